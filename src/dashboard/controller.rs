//! Dashboard controller for a single acting lab keeper.

use std::fmt;
use std::sync::Arc;

use mockable::Clock;
use serde::Deserialize;
use tracing::{debug, info};

use super::{DashboardError, DashboardIntent, DashboardView, IntentData, IntentOutcome};
use crate::config::DashboardConfig;
use crate::error::ValidationError;
use crate::help::domain::AckToken;
use crate::help::services::HelpRequestIntake;
use crate::item::domain::{FoundItem, ItemId, ItemReport, LostItem};
use crate::item::services::ItemRegistry;
use crate::task::domain::{
    AssignedTask, AssignedTaskRecord, NotCompletedCapture, Task, TaskChange, TaskId, TaskStatus,
};
use crate::task::ports::TaskChangeListener;
use crate::task::services::{StatusTransition, TaskQueue, TaskStatusMachine};

/// Result type for controller operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// State loaded from an external storage collaborator at session start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionSeed {
    /// Tasks waiting in the pending queue.
    pub pending: Vec<Task>,
    /// Tasks already accepted, with their persisted status.
    pub assigned: Vec<AssignedTaskRecord>,
    /// Unresolved lost items.
    pub lost_items: Vec<LostItem>,
}

/// Orchestrates the task queue, status machine, item registry and help
/// intake on behalf of one lab keeper.
///
/// Every mutating intent is applied in full or not at all. Subscribed
/// [`TaskChangeListener`]s hear about task mutations only after they have
/// succeeded.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use labkeeper::config::DashboardConfig;
/// use labkeeper::dashboard::DashboardController;
/// use labkeeper::task::domain::{Task, TaskId, TaskStatus};
/// use mockable::DefaultClock;
///
/// let mut dashboard = DashboardController::new(DashboardConfig::default(), Arc::new(DefaultClock));
/// dashboard
///     .enqueue_task(Task::new("1", "Lab 101", "09:00-10:00", 1, "Main"))
///     .expect("valid task");
/// assert_eq!(dashboard.notification_badge(), 1);
///
/// let id = TaskId::from("1");
/// dashboard.accept_task(&id).expect("pending task");
/// assert_eq!(dashboard.notification_badge(), 0);
///
/// let task = dashboard.set_task_status(&id, TaskStatus::Closed).expect("assigned task");
/// assert_eq!(task.status(), TaskStatus::Closed);
/// ```
pub struct DashboardController<C>
where
    C: Clock + Send + Sync,
{
    config: DashboardConfig,
    queue: TaskQueue<C>,
    status: TaskStatusMachine,
    items: ItemRegistry<C>,
    help: HelpRequestIntake<C>,
    listeners: Vec<Arc<dyn TaskChangeListener>>,
}

impl<C> DashboardController<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a dashboard with empty collections.
    #[must_use]
    pub fn new(config: DashboardConfig, clock: Arc<C>) -> Self {
        Self {
            queue: TaskQueue::new(Arc::clone(&clock)),
            status: TaskStatusMachine::from_config(&config),
            items: ItemRegistry::new(config.clone(), Arc::clone(&clock)),
            help: HelpRequestIntake::new(&config, clock),
            config,
            listeners: Vec::new(),
        }
    }

    /// Creates a dashboard seeded from external storage.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] when a seeded task or item is
    /// malformed or its id is already present.
    pub fn with_seed(
        config: DashboardConfig,
        clock: Arc<C>,
        seed: SessionSeed,
    ) -> DashboardResult<Self> {
        let mut dashboard = Self::new(config, Arc::clone(&clock));
        for task in seed.pending {
            dashboard.queue.enqueue(task)?;
        }
        for record in seed.assigned {
            let task =
                AssignedTask::restore(record, dashboard.config.max_reason_length, &*clock)?;
            dashboard.queue.restore_assigned(task)?;
        }
        for item in seed.lost_items {
            dashboard.items.restore_lost(item)?;
        }
        info!(
            pending = dashboard.queue.pending_count(),
            assigned = dashboard.queue.assigned().len(),
            lost_items = dashboard.items.lost().len(),
            "dashboard seeded"
        );
        Ok(dashboard)
    }

    /// Registers a collaborator to be notified of task changes.
    pub fn subscribe(&mut self, listener: Arc<dyn TaskChangeListener>) {
        self.listeners.push(listener);
        debug!(listeners = self.listeners.len(), "task change listener subscribed");
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Adds a booking request to the pending queue.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] when required fields are blank
    /// or the id is already tracked.
    pub fn enqueue_task(&mut self, task: Task) -> DashboardResult<()> {
        Ok(self.queue.enqueue(task)?)
    }

    /// Returns the pending queue in arrival order.
    #[must_use]
    pub fn list_pending_tasks(&self) -> Vec<Task> {
        self.queue.list_pending()
    }

    /// Returns the assigned tasks in acceptance order.
    #[must_use]
    pub fn list_assigned_tasks(&self) -> Vec<AssignedTask> {
        self.queue.list_assigned()
    }

    /// Returns the number of pending tasks, derived on every call.
    #[must_use]
    pub fn notification_badge(&self) -> usize {
        self.queue.pending_count()
    }

    /// Accepts a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] when the id is not pending.
    pub fn accept_task(&mut self, id: &TaskId) -> DashboardResult<AssignedTask> {
        let task = self.queue.accept(id)?;
        self.notify(&TaskChange::Accepted { task: task.clone() });
        Ok(task)
    }

    /// Declines a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] when the id is not pending.
    pub fn decline_task(&mut self, id: &TaskId) -> DashboardResult<()> {
        let task = self.queue.decline(id)?;
        self.notify(&TaskChange::Declined { task });
        Ok(())
    }

    /// Moves an assigned task to an ordinal status.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] when the task is not assigned,
    /// or [`DashboardError::Validation`] when `status` is `NotCompleted`.
    pub fn set_task_status(
        &mut self,
        id: &TaskId,
        status: TaskStatus,
    ) -> DashboardResult<AssignedTask> {
        let StatusTransition { task, previous } =
            self.status.set_status(&mut self.queue, id, status)?;
        self.notify(&TaskChange::StatusChanged {
            task: task.clone(),
            previous,
        });
        Ok(task)
    }

    /// Returns the reason options for marking a task not completed.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] when the task is not assigned.
    pub fn begin_not_completed_capture(
        &self,
        id: &TaskId,
    ) -> DashboardResult<NotCompletedCapture> {
        Ok(self.status.begin_not_completed_capture(&self.queue, id)?)
    }

    /// Marks an assigned task not completed.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] when the task is not assigned,
    /// or [`DashboardError::Validation`] when the issue or reason is
    /// invalid.
    pub fn mark_task_not_completed(
        &mut self,
        id: &TaskId,
        selected_issue: &str,
        reason: &str,
    ) -> DashboardResult<AssignedTask> {
        let StatusTransition { task, previous } =
            self.status
                .mark_not_completed(&mut self.queue, id, selected_issue, reason)?;
        self.notify(&TaskChange::MarkedNotCompleted {
            task: task.clone(),
            previous,
        });
        Ok(task)
    }

    /// Files a lost-item report.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] when the report is invalid.
    pub fn report_lost_item(&mut self, report: ItemReport) -> DashboardResult<LostItem> {
        Ok(self.items.report_lost(report)?)
    }

    /// Files a found-item report.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] when the report is invalid.
    pub fn report_found_item(&mut self, report: ItemReport) -> DashboardResult<FoundItem> {
        Ok(self.items.report_found(report)?)
    }

    /// Removes a resolved lost item.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] when no lost item has the id.
    pub fn mark_item_found(&mut self, id: ItemId) -> DashboardResult<()> {
        self.items.mark_found(id)?;
        Ok(())
    }

    /// Returns unresolved lost items in report order.
    #[must_use]
    pub fn list_lost_items(&self) -> Vec<LostItem> {
        self.items.list()
    }

    /// Returns found items in report order.
    #[must_use]
    pub fn list_found_items(&self) -> Vec<FoundItem> {
        self.items.list_found()
    }

    /// Submits a help request; always acknowledged.
    #[must_use]
    pub fn submit_help_request(&self, issue: &str, description: &str) -> AckToken {
        self.help.submit(issue, description)
    }

    /// Takes a snapshot of everything the dashboard displays.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView {
            pending: self.list_pending_tasks(),
            assigned: self.list_assigned_tasks(),
            lost_items: self.list_lost_items(),
            notification_badge: self.notification_badge(),
        }
    }

    /// Applies a serialized intent and wraps the result in an envelope.
    #[must_use]
    pub fn apply(&mut self, intent: DashboardIntent) -> IntentOutcome {
        let name = intent.name();
        let outcome = IntentOutcome::from(self.dispatch(intent));
        if let Some(error) = &outcome.error {
            debug!(intent = name, kind = error.kind.as_str(), "intent failed");
        }
        outcome
    }

    fn dispatch(&mut self, intent: DashboardIntent) -> DashboardResult<Option<IntentData>> {
        let data = match intent {
            DashboardIntent::ListPendingTasks => IntentData::Tasks(self.list_pending_tasks()),
            DashboardIntent::ListAssignedTasks => {
                IntentData::AssignedTasks(self.list_assigned_tasks())
            }
            DashboardIntent::NotificationBadge => IntentData::Badge(self.notification_badge()),
            DashboardIntent::AcceptTask { id } => IntentData::AssignedTask(self.accept_task(&id)?),
            DashboardIntent::DeclineTask { id } => {
                self.decline_task(&id)?;
                return Ok(None);
            }
            DashboardIntent::SetTaskStatus { id, status } => {
                self.queue.find_assigned(&id)?;
                let target = TaskStatus::try_from(status.as_str())
                    .map_err(ValidationError::from)?;
                IntentData::AssignedTask(self.set_task_status(&id, target)?)
            }
            DashboardIntent::BeginNotCompleted { id } => {
                IntentData::Capture(self.begin_not_completed_capture(&id)?)
            }
            DashboardIntent::MarkTaskNotCompleted {
                id,
                selected_issue,
                reason,
            } => IntentData::AssignedTask(self.mark_task_not_completed(
                &id,
                &selected_issue,
                &reason,
            )?),
            DashboardIntent::ReportLostItem { item } => {
                IntentData::LostItem(self.report_lost_item(item)?)
            }
            DashboardIntent::ReportFoundItem { item } => {
                IntentData::FoundItem(self.report_found_item(item)?)
            }
            DashboardIntent::MarkItemFound { id } => {
                self.mark_item_found(id)?;
                return Ok(None);
            }
            DashboardIntent::ListLostItems => IntentData::LostItems(self.list_lost_items()),
            DashboardIntent::ListFoundItems => IntentData::FoundItems(self.list_found_items()),
            DashboardIntent::SubmitHelpRequest { issue, description } => {
                IntentData::Ack(self.submit_help_request(&issue, &description))
            }
            DashboardIntent::View => IntentData::View(Box::new(self.view())),
        };
        Ok(Some(data))
    }

    fn notify(&self, change: &TaskChange) {
        debug!(
            task_id = %change.task_id(),
            listeners = self.listeners.len(),
            "delivering task change"
        );
        for listener in &self.listeners {
            listener.on_task_changed(change);
        }
    }
}

impl<C> fmt::Debug for DashboardController<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardController")
            .field("config", &self.config)
            .field("queue", &self.queue)
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
