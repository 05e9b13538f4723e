use crate::view_model::WatchViewModel;

/// Poller lifecycle. `Idle` and `Done` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A status request is in flight.
    Polling,
    /// The inter-poll delay timer is armed.
    Waiting,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WatchState {
    task_id: Option<String>,
    phase: Phase,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn view(&self) -> WatchViewModel {
        WatchViewModel {
            phase: self.phase,
            task_id: self.task_id.clone(),
        }
    }

    pub(crate) fn begin(&mut self, task_id: String) {
        self.task_id = Some(task_id);
        self.phase = Phase::Polling;
    }

    pub(crate) fn wait(&mut self) {
        self.phase = Phase::Waiting;
    }

    pub(crate) fn resume(&mut self) {
        self.phase = Phase::Polling;
    }

    pub(crate) fn complete(&mut self) {
        self.phase = Phase::Done;
    }
}
