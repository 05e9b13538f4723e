use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::{EngineEvent, StatusClient};

enum EngineCommand {
    FetchStatus { task_id: String },
    ArmTimer { delay: Duration },
}

/// Handle to the background poll engine: commands in, events out.
///
/// The engine never decides to poll on its own; sequencing lives in the
/// update loop, which only requests one fetch at a time.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn StatusClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_status(&self, task_id: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchStatus {
            task_id: task_id.into(),
        });
    }

    pub fn arm_timer(&self, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::ArmTimer { delay });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn StatusClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchStatus { task_id } => {
            let event = match client.poll(&task_id).await {
                Ok(response) => EngineEvent::StatusArrived(response),
                Err(err) => EngineEvent::StatusFailed {
                    message: err.to_string(),
                },
            };
            let _ = event_tx.send(event);
        }
        EngineCommand::ArmTimer { delay } => {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(EngineEvent::TimerElapsed);
        }
    }
}
