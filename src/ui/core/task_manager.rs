use super::actions::{Action, Operation};
use crate::api::MoviePayload;
use crate::catalog::CatalogService;
use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// Requests slower than this are reported when they finish
const SLOW_REQUEST: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub operation: Operation,
    pub started_at: Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Runs backend requests off the UI loop.
///
/// Each request reports back exactly one [`Action`] over the channel
/// returned by [`TaskManager::new`]: the success action built by the caller,
/// or [`Action::RequestFailed`].
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn one request and forward its outcome as an action
    pub fn spawn_request<F, T>(&mut self, operation: Operation, request: F, on_success: fn(T) -> Action) -> TaskId
    where
        F: Future<Output = anyhow::Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match request.await {
                Ok(value) => on_success(value),
                Err(e) => Action::RequestFailed {
                    operation,
                    error: format!("{:#}", e),
                },
            };
            // The receiver is gone only during shutdown
            let _ = action_sender.send(action);
        });

        log::debug!("Task {}: started {}", task_id, operation);
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                operation,
                started_at: Instant::now(),
            },
        );
        task_id
    }

    /// Fetch the whole catalogue
    pub fn spawn_fetch(&mut self, service: CatalogService) -> TaskId {
        self.spawn_request(
            Operation::Fetch,
            async move { service.fetch_all().await },
            Action::MoviesLoaded,
        )
    }

    pub fn spawn_create(&mut self, service: CatalogService, payload: MoviePayload) -> TaskId {
        self.spawn_request(
            Operation::Create,
            async move { service.create(&payload).await },
            Action::MovieCreated,
        )
    }

    pub fn spawn_update(&mut self, service: CatalogService, id: String, payload: MoviePayload) -> TaskId {
        self.spawn_request(
            Operation::Update,
            async move {
                let movie = service.update(&id, &payload).await?;
                Ok::<_, anyhow::Error>((id, movie))
            },
            |(id, movie)| Action::MovieUpdated { id, movie },
        )
    }

    pub fn spawn_delete(&mut self, service: CatalogService, id: String) -> TaskId {
        self.spawn_request(
            Operation::Delete,
            async move {
                service.delete(&id).await?;
                Ok::<_, anyhow::Error>(id)
            },
            Action::MovieDeleted,
        )
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                if task.elapsed() > SLOW_REQUEST {
                    log::warn!("Task {}: {} took {:?}", task.id, task.operation, task.elapsed());
                }
            }
        }

        finished
    }

    /// Check if a request of the given kind is still running
    pub fn is_running(&self, operation: Operation) -> bool {
        self.tasks.values().any(|task| task.operation == operation)
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
