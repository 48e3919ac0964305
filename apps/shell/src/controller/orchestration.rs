//! Command orchestration from shell actions to the pointer worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::bridge::commands::PointerCommand;

pub fn dispatch_pointer_command(
    cmd_tx: &Sender<PointerCommand>,
    cmd: PointerCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        PointerCommand::SetActive { .. } => "set_active",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued shell->pointer command"),
        Err(TrySendError::Full(_)) => {
            *status = "pointer command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "pointer worker disconnected (possible startup failure); restart the shell"
                .to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn full_queue_surfaces_a_status_message() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();

        dispatch_pointer_command(&tx, PointerCommand::SetActive { active: true }, &mut status);
        assert!(status.is_empty());

        dispatch_pointer_command(&tx, PointerCommand::SetActive { active: false }, &mut status);
        assert!(status.contains("full"));
    }

    #[test]
    fn disconnected_worker_surfaces_a_status_message() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();

        dispatch_pointer_command(&tx, PointerCommand::SetActive { active: true }, &mut status);
        assert!(status.contains("disconnected"));
    }
}
