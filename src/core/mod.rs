//! Core engine types and contracts.
//!
//! This module contains the machine itself plus the two contracts it is
//! built on:
//! - [`Handler`]: how a state answers one event type, with optional
//!   enter/leave hooks defaulting to no-ops
//! - [`StateSet`]/[`Slot`]/[`Dispatch`]: the shape of the generated
//!   owned-state collection the machine drives
//!
//! Nothing here allocates or fails at runtime; every "can this state take
//! this event" question is settled by trait bounds at build time.

mod handler;
mod machine;
mod set;

pub use handler::Handler;
pub use machine::Machine;
pub use set::{Dispatch, Slot, StateSet};
