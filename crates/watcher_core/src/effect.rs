use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a status request for the watched task.
    RequestStatus { task_id: String },
    /// Arm the fixed inter-poll delay timer.
    ArmTimer { delay: Duration },
    /// Replace the lead and raw regions with the finished result.
    RenderResult { result: String, raw_base64: String },
}
