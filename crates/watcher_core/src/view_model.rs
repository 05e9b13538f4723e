use crate::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WatchViewModel {
    pub phase: Phase,
    pub task_id: Option<String>,
}

impl WatchViewModel {
    /// One-line status suitable for a terminal headline.
    pub fn headline(&self) -> String {
        match (&self.task_id, self.phase) {
            (None, _) => "No task to watch".to_string(),
            (Some(id), Phase::Done) => format!("Task {id} finished"),
            (Some(id), _) => format!("Waiting for task {id}"),
        }
    }
}
