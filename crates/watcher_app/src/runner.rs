use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use watcher_core::{update, Effect, Msg, Phase, StatusReport, WatchState};
use watcher_engine::{
    decode_payload, DecodeError, EngineEvent, EngineHandle, ReqwestStatusClient,
};

use crate::surface::ResultSurface;

/// Bridges core effects to the engine and engine events back to messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(page_url: &str, msg_tx: mpsc::Sender<Msg>) -> anyhow::Result<Self> {
        let client = ReqwestStatusClient::new(page_url)
            .map_err(|err| anyhow::anyhow!("cannot resolve status endpoint: {err}"))?;
        let engine = EngineHandle::new(Arc::new(client));
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn run_effects(
        &self,
        effects: Vec<Effect>,
        surface: &mut dyn ResultSurface,
    ) -> Result<(), DecodeError> {
        for effect in effects {
            match effect {
                Effect::RequestStatus { task_id } => {
                    log::info!("requesting status for task {task_id}");
                    self.engine.fetch_status(task_id);
                }
                Effect::ArmTimer { delay } => {
                    log::debug!("next poll in {delay:?}");
                    self.engine.arm_timer(delay);
                }
                Effect::RenderResult { result, raw_base64 } => {
                    // Lead is filled before the payload is decoded, matching
                    // the page: a bad payload leaves the lead text in place
                    // and aborts with the decode error.
                    surface.set_lead(&result);
                    let raw = decode_payload(&raw_base64)?;
                    surface.set_raw(&raw);
                }
            }
        }
        Ok(())
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::StatusArrived(response) => Msg::StatusArrived(StatusReport {
                        ready: response.ready,
                        result: response.result,
                        raw_base64: response.raw_base64,
                    }),
                    EngineEvent::StatusFailed { message } => {
                        log::warn!("status poll failed: {message}");
                        Msg::StatusFailed { message }
                    }
                    EngineEvent::TimerElapsed => Msg::TimerFired,
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

/// Runs the watcher to completion.
///
/// Returns immediately when no task id was given: the watcher is inert and
/// never touches the network. A failed poll leaves the loop blocked on the
/// message channel with nothing scheduled; the legacy page stalled the
/// same way, so no retry is attempted here.
pub fn run_watch(
    page_url: &str,
    task_id: Option<String>,
    surface: &mut dyn ResultSurface,
) -> anyhow::Result<()> {
    let (mut state, effects) = update(WatchState::new(), Msg::Started { task_id });
    log::info!("{}", state.view().headline());
    if state.phase() == Phase::Idle {
        return Ok(());
    }

    let (msg_tx, msg_rx) = mpsc::channel();
    let runner = EffectRunner::new(page_url, msg_tx)?;
    runner.run_effects(effects, surface)?;

    while state.phase() != Phase::Done {
        let msg = msg_rx.recv()?;
        let (next, effects) = update(state, msg);
        state = next;
        runner.run_effects(effects, surface)?;
    }
    log::info!("{}", state.view().headline());
    Ok(())
}
