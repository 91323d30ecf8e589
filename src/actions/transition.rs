//! The transition action.

use std::fmt;
use std::marker::PhantomData;

use crate::actions::Action;
use crate::core::{Handler, Machine, Slot};

/// Action that moves the machine to the state of type `Target`.
///
/// Execution happens in a fixed order:
///
/// 1. the outgoing state's [`on_leave`](Handler::on_leave) runs, while the
///    outgoing state is still current;
/// 2. the machine's current tag switches to `Target`'s slot
///    ([`Machine::transition_to`]);
/// 3. the target's [`on_enter`](Handler::on_enter) runs, with the target
///    already current.
///
/// No event can be processed between the two hook calls: the whole sequence
/// completes inside the dispatch that produced this action. States that do
/// not override a hook get the trait's default no-op.
pub struct TransitionTo<Target> {
    _target: PhantomData<Target>,
}

impl<Target> TransitionTo<Target> {
    /// Request a transition to `Target`.
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<Target> Default for TransitionTo<Target> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Target> Clone for TransitionTo<Target> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<Target> Copy for TransitionTo<Target> {}

impl<Target> fmt::Debug for TransitionTo<Target> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransitionTo<{}>", std::any::type_name::<Target>())
    }
}

impl<S, Src, Target, E> Action<S, Src, E> for TransitionTo<Target>
where
    S: Slot<Src> + Slot<Target>,
    Src: Handler<E>,
    Target: Handler<E>,
{
    fn execute(self, machine: &mut Machine<S>, event: &E) {
        machine.state_mut::<Src>().on_leave(event);
        let target = machine.transition_to::<Target>();
        target.on_enter(event);
    }
}
