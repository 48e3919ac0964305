//! Commands queued from the shell to the pointer worker.

pub enum PointerCommand {
    SetActive { active: bool },
}
