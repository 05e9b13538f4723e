use std::time::Duration;

use crate::{Effect, Msg, Phase, WatchState};

/// Delay between polls. Fixed, matching the legacy page poller.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Pure update function: applies a message to state and returns any effects.
///
/// `RequestStatus` is only ever emitted on the `Idle -> Polling` and
/// `Waiting -> Polling` transitions, so at most one request is in flight.
pub fn update(mut state: WatchState, msg: Msg) -> (WatchState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started { task_id } => {
            // An absent or empty task id leaves the watcher inert: no
            // network activity, ever.
            let task_id = match task_id.filter(|id| !id.is_empty()) {
                Some(id) => id,
                None => return (state, Vec::new()),
            };
            if state.phase() != Phase::Idle {
                return (state, Vec::new());
            }
            state.begin(task_id.clone());
            vec![Effect::RequestStatus { task_id }]
        }
        Msg::StatusArrived(report) => {
            if state.phase() != Phase::Polling {
                return (state, Vec::new());
            }
            if report.ready {
                state.complete();
                vec![Effect::RenderResult {
                    result: report.result,
                    raw_base64: report.raw_base64,
                }]
            } else {
                state.wait();
                vec![Effect::ArmTimer {
                    delay: POLL_INTERVAL,
                }]
            }
        }
        Msg::StatusFailed { message: _ } => {
            // The legacy poller had no error path: a failed poll simply
            // never called back, leaving it stalled. Preserved here by
            // dropping the message without scheduling anything.
            Vec::new()
        }
        Msg::TimerFired => {
            if state.phase() != Phase::Waiting {
                return (state, Vec::new());
            }
            let task_id = match state.task_id() {
                Some(id) => id.to_string(),
                None => return (state, Vec::new()),
            };
            state.resume();
            vec![Effect::RequestStatus { task_id }]
        }
    };

    (state, effects)
}
