//! Events flowing back from the pointer worker to the shell loop.

pub enum WorkerEvent {
    PointerState { active: bool },
    Info(String),
}
