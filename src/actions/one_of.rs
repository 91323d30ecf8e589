//! Bounded choice between actions.

use crate::actions::{Action, NoOp};
use crate::core::{Machine, StateSet};

/// A tagged union of two actions, executing whichever variant is held.
///
/// The discriminant is fixed when the handler constructs the value; nest
/// `OneOf`s for a wider choice. For the common "either this happens or
/// nothing does" case use the [`Maybe`] alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OneOf<A, B> {
    /// The first alternative.
    Left(A),
    /// The second alternative.
    Right(B),
}

impl<S, Src, E, A, B> Action<S, Src, E> for OneOf<A, B>
where
    S: StateSet,
    A: Action<S, Src, E>,
    B: Action<S, Src, E>,
{
    fn execute(self, machine: &mut Machine<S>, event: &E) {
        match self {
            OneOf::Left(action) => action.execute(machine, event),
            OneOf::Right(action) => action.execute(machine, event),
        }
    }
}

/// Either the action `A` happens, or nothing does.
///
/// Used when a handler's outcome depends on a runtime condition, e.g. a
/// credential check. Choosing [`Maybe::nothing`] is ordinary control flow,
/// not an error.
///
/// # Example
///
/// ```rust
/// use interlock::{Maybe, TransitionTo};
///
/// struct Granted;
///
/// let allow: Maybe<TransitionTo<Granted>> = Maybe::just(TransitionTo::new());
/// let deny: Maybe<TransitionTo<Granted>> = Maybe::nothing();
/// ```
pub type Maybe<A> = OneOf<A, NoOp>;

impl<A> OneOf<A, NoOp> {
    /// The action happens.
    pub fn just(action: A) -> Self {
        OneOf::Left(action)
    }

    /// Nothing happens.
    pub fn nothing() -> Self {
        OneOf::Right(NoOp)
    }
}

impl<A> From<Option<A>> for OneOf<A, NoOp> {
    fn from(option: Option<A>) -> Self {
        match option {
            Some(action) => OneOf::Left(action),
            None => OneOf::Right(NoOp),
        }
    }
}
