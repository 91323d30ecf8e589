//! Actions: the values a handler returns and the machine executes.
//!
//! Handling one event produces one action, consumed within that same
//! dispatch: do nothing ([`NoOp`]), move to another state
//! ([`TransitionTo`]), or a statically-bounded choice between outcomes
//! ([`OneOf`], with [`Maybe`] as the common two-way case). All actions are
//! plain stack values; executing one never allocates.

mod noop;
mod one_of;
mod transition;

pub use noop::NoOp;
pub use one_of::{Maybe, OneOf};
pub use transition::TransitionTo;

use crate::core::{Machine, StateSet};

/// The contract a handler's result must satisfy.
///
/// `Src` is the state type the action was produced by, i.e. the state that was
/// current when the event was dispatched. It does not appear in the method
/// signature, but transition actions use it to reach the outgoing state's
/// leave hook through the machine while the switch has not happened yet.
///
/// Execution may mutate which state is current; it runs to completion
/// inside [`Machine::handle`] and has no failure path.
pub trait Action<S: StateSet, Src, E>: Sized {
    /// Apply this action against the machine that dispatched `event`.
    fn execute(self, machine: &mut Machine<S>, event: &E);
}
