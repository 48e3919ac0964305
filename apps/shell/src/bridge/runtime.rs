//! Worker loop standing in for the head-tracking pointer controller.
//!
//! The real controller consumes camera frames and gesture inference on its
//! own thread; this worker owns that thread's command intake. It consumes
//! enable/disable commands and acknowledges the resulting state over the
//! event channel. Event sends are best-effort: a full or disconnected UI
//! side never blocks the worker.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};

use crate::bridge::commands::PointerCommand;
use crate::controller::events::WorkerEvent;

pub fn launch(cmd_rx: Receiver<PointerCommand>, event_tx: Sender<WorkerEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let _ = event_tx.try_send(WorkerEvent::Info("pointer worker ready".to_string()));

        let mut active = false;
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                PointerCommand::SetActive { active: requested } => {
                    if requested == active {
                        tracing::debug!(active, "pointer state unchanged");
                        continue;
                    }
                    active = requested;
                    tracing::info!(active, "pointer control toggled");
                    let _ = event_tx.try_send(WorkerEvent::PointerState { active });
                }
            }
        }

        tracing::info!("pointer worker shutting down");
        let _ = event_tx.try_send(WorkerEvent::Info("pointer worker stopped".to_string()));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn worker_acknowledges_state_transitions() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (event_tx, event_rx) = bounded(8);
        let handle = launch(cmd_rx, event_tx);

        cmd_tx
            .send(PointerCommand::SetActive { active: true })
            .expect("send enable");
        // Repeat is swallowed by the worker, not re-acknowledged.
        cmd_tx
            .send(PointerCommand::SetActive { active: true })
            .expect("send repeat");
        cmd_tx
            .send(PointerCommand::SetActive { active: false })
            .expect("send disable");
        drop(cmd_tx);
        handle.join().expect("worker exit");

        let acks: Vec<bool> = event_rx
            .try_iter()
            .filter_map(|event| match event {
                WorkerEvent::PointerState { active } => Some(active),
                WorkerEvent::Info(_) => None,
            })
            .collect();
        assert_eq!(acks, vec![true, false]);
    }
}
