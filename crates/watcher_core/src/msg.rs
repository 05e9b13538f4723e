/// One status poll's answer, already lifted out of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusReport {
    pub ready: bool,
    pub result: String,
    pub raw_base64: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Watcher entry point: the task id resolved from the page URL, if any.
    Started { task_id: Option<String> },
    /// The in-flight status request answered.
    StatusArrived(StatusReport),
    /// The in-flight status request failed (network, HTTP, or payload).
    StatusFailed { message: String },
    /// The inter-poll delay elapsed.
    TimerFired,
}
