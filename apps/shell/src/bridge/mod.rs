//! Bridge between the shell and the external pointer-controller worker.

pub mod commands;
pub mod runtime;

use crossbeam_channel::Sender;
use shell_core::PointerControl;

use crate::bridge::commands::PointerCommand;
use crate::controller::orchestration::dispatch_pointer_command;

/// Channel-backed adapter behind the core's `PointerControl` seam. The
/// forward is best-effort: queue pressure or a dead worker only update the
/// status line.
pub struct ChannelPointerControl {
    cmd_tx: Sender<PointerCommand>,
    last_status: String,
}

impl ChannelPointerControl {
    pub fn new(cmd_tx: Sender<PointerCommand>) -> Self {
        Self {
            cmd_tx,
            last_status: String::new(),
        }
    }
}

impl PointerControl for ChannelPointerControl {
    fn set_active(&mut self, active: bool) {
        self.last_status.clear();
        dispatch_pointer_command(
            &self.cmd_tx,
            PointerCommand::SetActive { active },
            &mut self.last_status,
        );
        if !self.last_status.is_empty() {
            tracing::warn!(status = %self.last_status, "pointer forward degraded");
        }
    }
}
