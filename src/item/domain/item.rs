//! Lost and found item records.

use super::{ItemCategory, ItemId};
use crate::config::DashboardConfig;
use crate::error::{ValidationError, ensure_max_length};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw item report as entered by a lab keeper.
///
/// Every field is free text; the registry validates and normalises it when
/// the report is filed. Missing JSON keys default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemReport {
    /// Short name of the item.
    pub item_name: String,
    /// Category code or label.
    pub category: String,
    /// Where the item was lost or found.
    pub location: String,
    /// Free-text description.
    pub description: String,
    /// Name of the reporting person, if given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_name: Option<String>,
}

impl ItemReport {
    /// Starts a report with the two required fields.
    #[must_use]
    pub fn new(item_name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the reporter's name.
    #[must_use]
    pub fn with_reporter(mut self, reporter_name: impl Into<String>) -> Self {
        self.reporter_name = Some(reporter_name.into());
        self
    }

    /// Validates the report and stamps it into a record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for a blank `itemName`,
    /// `category`, or (when required by `config`) `location`;
    /// [`ValidationError::UnknownValue`] for an unrecognised category; or
    /// [`ValidationError::TooLong`] for an oversized description.
    pub(crate) fn into_record(
        self,
        config: &DashboardConfig,
        timestamp: DateTime<Utc>,
    ) -> Result<ItemRecord, ValidationError> {
        let item_name = self.item_name.trim();
        if item_name.is_empty() {
            return Err(ValidationError::missing("itemName"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::missing("category"));
        }
        let category = ItemCategory::try_from(self.category.as_str())?;
        let location = self.location.trim();
        let description = self.description.trim();
        check_text_fields(item_name, location, description, config)?;

        Ok(ItemRecord {
            id: ItemId::new(),
            item_name: item_name.to_owned(),
            category,
            location: location.to_owned(),
            description: description.to_owned(),
            reporter_name: self
                .reporter_name
                .map(|name| name.trim().to_owned())
                .filter(|name| !name.is_empty()),
            timestamp,
        })
    }
}

/// A stored item report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    id: ItemId,
    item_name: String,
    category: ItemCategory,
    #[serde(default)]
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reporter_name: Option<String>,
    timestamp: DateTime<Utc>,
}

impl ItemRecord {
    /// Returns the registry-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the item name.
    #[must_use]
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> ItemCategory {
        self.category
    }

    /// Returns the location, empty when not given.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the description, empty when not given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the reporter's name, if given.
    #[must_use]
    pub fn reporter_name(&self) -> Option<&str> {
        self.reporter_name.as_deref()
    }

    /// Returns when the report was filed.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Checks a record loaded from storage against the rules applied to new
    /// reports.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for a blank `itemName` or
    /// (when required by `config`) `location`, or
    /// [`ValidationError::TooLong`] for an oversized description.
    pub(crate) fn validate(&self, config: &DashboardConfig) -> Result<(), ValidationError> {
        check_text_fields(
            self.item_name.trim(),
            self.location.trim(),
            self.description.trim(),
            config,
        )
    }

    /// Returns the reporter's name or the configured anonymous label.
    #[must_use]
    pub fn reporter_display<'a>(&'a self, config: &'a DashboardConfig) -> &'a str {
        self.reporter_name
            .as_deref()
            .unwrap_or(&config.anonymous_reporter_label)
    }
}

fn check_text_fields(
    item_name: &str,
    location: &str,
    description: &str,
    config: &DashboardConfig,
) -> Result<(), ValidationError> {
    if item_name.is_empty() {
        return Err(ValidationError::missing("itemName"));
    }
    if config.require_item_location && location.is_empty() {
        return Err(ValidationError::missing("location"));
    }
    ensure_max_length("description", description, config.max_description_length)
}

/// An item somebody has lost, removed once it turns up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LostItem(ItemRecord);

/// An item handed in by somebody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoundItem(ItemRecord);

impl LostItem {
    /// Returns the underlying record.
    #[must_use]
    pub const fn record(&self) -> &ItemRecord {
        &self.0
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.0.id
    }

    /// Returns the reporter's name or the configured anonymous label.
    #[must_use]
    pub fn reporter_display<'a>(&'a self, config: &'a DashboardConfig) -> &'a str {
        self.0.reporter_display(config)
    }
}

impl From<ItemRecord> for LostItem {
    fn from(record: ItemRecord) -> Self {
        Self(record)
    }
}

impl FoundItem {
    /// Returns the underlying record.
    #[must_use]
    pub const fn record(&self) -> &ItemRecord {
        &self.0
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.0.id
    }
}

impl From<ItemRecord> for FoundItem {
    fn from(record: ItemRecord) -> Self {
        Self(record)
    }
}
