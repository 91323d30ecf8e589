//! Traits over the owned-state collection.
//!
//! A machine owns exactly one instance of every state type it can be in.
//! That collection is an ordinary struct with one field per state, declared
//! through the [`state_set!`](crate::state_set) macro together with a
//! fieldless tag enum naming each slot in declaration order. The traits in
//! this module are the contract between that generated collection and the
//! [`Machine`](crate::Machine) engine.

use std::fmt::Debug;

use crate::core::machine::Machine;

/// The owned collection of every state a machine can be in.
///
/// Implementations are normally generated by [`state_set!`](crate::state_set).
/// The associated `Tag` is a plain `Copy` discriminant; a machine stores one
/// tag alongside the collection to mark which slot is current, so cloning a
/// machine re-derives "current" positionally rather than by comparing state
/// values.
pub trait StateSet {
    /// Fieldless enum with one variant per state slot, in declaration order.
    type Tag: Copy + Eq + Debug;

    /// Tag of the first-declared state. A freshly constructed machine
    /// starts here.
    const INITIAL: Self::Tag;
}

/// Access to the slot holding state type `T`.
///
/// One implementation exists per state type in a set, which is what ties a
/// concrete state type to its tag. Requesting a state type the set was not
/// declared with is an unsatisfied bound, not a runtime lookup failure.
pub trait Slot<T>: StateSet {
    /// The tag naming `T`'s slot.
    const TAG: Self::Tag;

    /// Borrow the owned instance of `T`.
    fn get(&self) -> &T;

    /// Mutably borrow the owned instance of `T`.
    fn get_mut(&mut self) -> &mut T;
}

/// Event routing over a state set.
///
/// [`state_set!`](crate::state_set) emits a single implementation generic
/// over the event type whose bounds require every state in the set to
/// implement [`Handler`](crate::Handler) for that event. A machine can
/// therefore only be asked to handle events its whole state set answers;
/// an incomplete transition table does not build.
pub trait Dispatch<E>: StateSet + Sized {
    /// Route `event` to the currently active state and execute whatever
    /// action its handler returns.
    fn dispatch(machine: &mut Machine<Self>, event: &E);
}
