//! Controller layer: worker events, driver input parsing, and command
//! orchestration.

pub mod events;
pub mod input;
pub mod orchestration;
