//! Pending queue and assigned list for booking-service tasks.

use std::fmt;
use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info};

use crate::error::{NotFoundError, ValidationError};
use crate::task::domain::{AssignedTask, Task, TaskId};

/// Owner of the pending queue and the assigned list.
///
/// Every task id lives in exactly one of the two collections. Both keep
/// arrival order, which is the order they are listed in. The pending count
/// is always derived from the queue itself.
pub struct TaskQueue<C>
where
    C: Clock + Send + Sync,
{
    pending: Vec<Task>,
    assigned: Vec<AssignedTask>,
    clock: Arc<C>,
}

impl<C> TaskQueue<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty queue.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self {
            pending: Vec::new(),
            assigned: Vec::new(),
            clock,
        }
    }

    pub(crate) const fn clock_handle(&self) -> &Arc<C> {
        &self.clock
    }

    /// Appends a task delivered by booking intake to the pending queue.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when required booking
    /// fields are blank, or [`ValidationError::DuplicateTask`] when the id is
    /// already pending or assigned.
    pub fn enqueue(&mut self, task: Task) -> Result<(), ValidationError> {
        self.ensure_untracked(&task)?;
        info!(task_id = %task.id(), room = task.room_name(), "task enqueued");
        self.pending.push(task);
        Ok(())
    }

    /// Places a previously assigned task directly into the assigned list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateTask`] when the id is already
    /// tracked.
    pub fn restore_assigned(&mut self, task: AssignedTask) -> Result<(), ValidationError> {
        self.ensure_untracked(task.task())?;
        debug!(task_id = %task.id(), status = task.status().as_str(), "assigned task restored");
        self.assigned.push(task);
        Ok(())
    }

    /// Moves a pending task into the assigned list with status `ToBeOpened`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::PendingTask`] when the id is not pending,
    /// including when it was already accepted. Both collections are left
    /// untouched on failure.
    pub fn accept(&mut self, id: &TaskId) -> Result<AssignedTask, NotFoundError> {
        let index = self.pending_index(id)?;
        let task = self.pending.remove(index);
        let assigned = AssignedTask::accept(task, &*self.clock);
        self.assigned.push(assigned.clone());
        info!(task_id = %id, pending = self.pending.len(), "task accepted");
        Ok(assigned)
    }

    /// Removes a pending task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::PendingTask`] when the id is not pending.
    pub fn decline(&mut self, id: &TaskId) -> Result<Task, NotFoundError> {
        let index = self.pending_index(id)?;
        let task = self.pending.remove(index);
        info!(task_id = %id, pending = self.pending.len(), "task declined");
        Ok(task)
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the pending tasks in arrival order.
    #[must_use]
    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Returns the assigned tasks in acceptance order.
    #[must_use]
    pub fn assigned(&self) -> &[AssignedTask] {
        &self.assigned
    }

    /// Returns an owned snapshot of the pending queue.
    #[must_use]
    pub fn list_pending(&self) -> Vec<Task> {
        self.pending.clone()
    }

    /// Returns an owned snapshot of the assigned list.
    #[must_use]
    pub fn list_assigned(&self) -> Vec<AssignedTask> {
        self.assigned.clone()
    }

    /// Returns `true` when the id is pending or assigned.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.pending.iter().any(|task| task.id() == id)
            || self.assigned.iter().any(|task| task.id() == id)
    }

    /// Looks up an assigned task.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::AssignedTask`] when the id is not assigned.
    pub fn find_assigned(&self, id: &TaskId) -> Result<&AssignedTask, NotFoundError> {
        self.assigned
            .iter()
            .find(|task| task.id() == id)
            .ok_or_else(|| NotFoundError::AssignedTask(id.clone()))
    }

    pub(crate) fn find_assigned_mut(
        &mut self,
        id: &TaskId,
    ) -> Result<&mut AssignedTask, NotFoundError> {
        self.assigned
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| NotFoundError::AssignedTask(id.clone()))
    }

    fn pending_index(&self, id: &TaskId) -> Result<usize, NotFoundError> {
        self.pending
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| {
                debug!(task_id = %id, "task not pending");
                NotFoundError::PendingTask(id.clone())
            })
    }

    fn ensure_untracked(&self, task: &Task) -> Result<(), ValidationError> {
        task.validate()?;
        if self.contains(task.id()) {
            return Err(ValidationError::DuplicateTask(task.id().clone()));
        }
        Ok(())
    }
}

impl<C> fmt::Debug for TaskQueue<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.pending)
            .field("assigned", &self.assigned)
            .finish_non_exhaustive()
    }
}
