//! Watcher core: pure poller state machine and query-string helpers.
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, StatusReport};
pub use query::{QueryParams, TASK_ID_PARAM};
pub use state::{Phase, WatchState};
pub use update::{update, POLL_INTERVAL};
pub use view_model::WatchViewModel;
