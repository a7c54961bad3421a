//! Turn gating between the two players' input channels.

pub mod coordinator;

pub use coordinator::{Gates, TurnCoordinator};
