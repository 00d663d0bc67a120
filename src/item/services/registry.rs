//! In-process registry of lost and found item records.

use std::fmt;
use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::error::{NotFoundError, ValidationError};
use crate::item::domain::{FoundItem, ItemId, ItemRecord, ItemReport, LostItem};

/// Registry of lost items awaiting resolution and found items handed in.
///
/// Both lists keep insertion order. Marking a lost item found deletes it;
/// found items are never matched against lost ones.
pub struct ItemRegistry<C>
where
    C: Clock + Send + Sync,
{
    lost: Vec<LostItem>,
    found: Vec<FoundItem>,
    config: DashboardConfig,
    clock: Arc<C>,
}

impl<C> ItemRegistry<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty registry.
    #[must_use]
    pub const fn new(config: DashboardConfig, clock: Arc<C>) -> Self {
        Self {
            lost: Vec::new(),
            found: Vec::new(),
            config,
            clock,
        }
    }

    /// Files a lost-item report and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the report is incomplete or
    /// malformed.
    pub fn report_lost(&mut self, report: ItemReport) -> Result<LostItem, ValidationError> {
        let item = LostItem::from(self.stamp(report)?);
        info!(
            item_id = %item.id(),
            category = item.record().category().as_str(),
            "lost item reported"
        );
        self.lost.push(item.clone());
        Ok(item)
    }

    /// Files a found-item report and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the report is incomplete or
    /// malformed.
    pub fn report_found(&mut self, report: ItemReport) -> Result<FoundItem, ValidationError> {
        let item = FoundItem::from(self.stamp(report)?);
        info!(
            item_id = %item.id(),
            category = item.record().category().as_str(),
            "found item reported"
        );
        self.found.push(item.clone());
        Ok(item)
    }

    /// Removes a resolved lost item.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::LostItem`] when no lost item has the id,
    /// including when it was already marked found.
    pub fn mark_found(&mut self, id: ItemId) -> Result<LostItem, NotFoundError> {
        let index = self
            .lost
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| {
                debug!(item_id = %id, "lost item not registered");
                NotFoundError::LostItem(id)
            })?;
        let item = self.lost.remove(index);
        info!(item_id = %id, remaining = self.lost.len(), "lost item marked found");
        Ok(item)
    }

    /// Registers a lost item loaded from external storage.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the record breaks the rules applied
    /// to new reports, or [`ValidationError::DuplicateItem`] when the id is
    /// already registered.
    pub fn restore_lost(&mut self, item: LostItem) -> Result<(), ValidationError> {
        item.record()
            .validate(&self.config)
            .inspect_err(|err| debug!(item_id = %item.id(), %err, "restored item rejected"))?;
        if self.lost.iter().any(|existing| existing.id() == item.id()) {
            return Err(ValidationError::DuplicateItem(item.id()));
        }
        debug!(item_id = %item.id(), "lost item restored");
        self.lost.push(item);
        Ok(())
    }

    /// Returns all lost items in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<LostItem> {
        self.lost.clone()
    }

    /// Returns all found items in insertion order.
    #[must_use]
    pub fn list_found(&self) -> Vec<FoundItem> {
        self.found.clone()
    }

    /// Returns the lost items without copying.
    #[must_use]
    pub fn lost(&self) -> &[LostItem] {
        &self.lost
    }

    /// Returns the configuration the registry validates against.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    fn stamp(&self, report: ItemReport) -> Result<ItemRecord, ValidationError> {
        report
            .into_record(&self.config, self.clock.utc())
            .inspect_err(|err| debug!(%err, "item report rejected"))
    }
}

impl<C> fmt::Debug for ItemRegistry<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRegistry")
            .field("lost", &self.lost)
            .field("found", &self.found)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
