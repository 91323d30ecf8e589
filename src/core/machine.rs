//! The state machine engine.

use std::fmt;

use crate::core::set::{Dispatch, Slot, StateSet};

/// A finite state machine over the state set `S`.
///
/// The machine owns one instance of every state type in `S` for its whole
/// lifetime; states are constructed together and dropped together, and no
/// allocation happens during dispatch or transition. Which state is current
/// is a single `Copy` tag into the owned set: never null, never dangling,
/// never pointing at another machine's states.
///
/// Dispatch is synchronous and non-reentrant: [`handle`](Machine::handle)
/// runs the current state's handler and the returned action (including any
/// transition and its leave/enter hooks) to completion before returning.
/// The machine is not internally synchronized; callers that share one across
/// threads must serialize access themselves.
///
/// # Example
///
/// ```rust
/// use interlock::{handlers, state_set, Machine, TransitionTo};
///
/// #[derive(Default, Clone)]
/// struct Idle;
/// #[derive(Default, Clone)]
/// struct Busy;
///
/// struct Start;
/// struct Finish;
///
/// handlers! {
///     impl Idle {
///         on Start => TransitionTo<Busy> {
///             handle(_state, _event) { TransitionTo::new() }
///         }
///         ignore Finish;
///     }
/// }
///
/// handlers! {
///     impl Busy {
///         on Finish => TransitionTo<Idle> {
///             handle(_state, _event) { TransitionTo::new() }
///         }
///         ignore Start;
///     }
/// }
///
/// state_set! {
///     #[derive(Default, Clone)]
///     struct WorkerSet, tag WorkerTag {
///         idle: Idle,
///         busy: Busy,
///     }
/// }
///
/// let mut worker: Machine<WorkerSet> = Machine::default();
/// assert_eq!(worker.current(), WorkerTag::Idle);
///
/// worker.handle(Start);
/// assert_eq!(worker.current(), WorkerTag::Busy);
///
/// worker.handle(Finish);
/// assert!(worker.is_in::<Idle>());
/// ```
pub struct Machine<S: StateSet> {
    states: S,
    current: S::Tag,
}

impl<S: StateSet> Machine<S> {
    /// Create a machine from caller-supplied state instances.
    ///
    /// The first state type declared in the set becomes current.
    pub fn new(states: S) -> Self {
        Self {
            states,
            current: S::INITIAL,
        }
    }

    /// The tag of the currently active state.
    pub fn current(&self) -> S::Tag {
        self.current
    }

    /// Whether the state of type `T` is currently active.
    pub fn is_in<T>(&self) -> bool
    where
        S: Slot<T>,
    {
        self.current == <S as Slot<T>>::TAG
    }

    /// Borrow the owned instance of state `T`, current or not.
    pub fn state<T>(&self) -> &T
    where
        S: Slot<T>,
    {
        self.states.get()
    }

    /// Mutably borrow the owned instance of state `T`, current or not.
    pub fn state_mut<T>(&mut self) -> &mut T
    where
        S: Slot<T>,
    {
        self.states.get_mut()
    }

    /// Make `T` the current state and return its owned instance.
    ///
    /// Pure bookkeeping: no hooks run here. Transition actions call this
    /// between the source's leave hook and the target's enter hook, so a
    /// leave hook always observes the outgoing state as still current and an
    /// enter hook always observes the target as already current.
    pub fn transition_to<T>(&mut self) -> &mut T
    where
        S: Slot<T>,
    {
        self.current = <S as Slot<T>>::TAG;
        self.states.get_mut()
    }

    /// Dispatch an event to the currently active state and execute the
    /// action its handler returns.
    ///
    /// The active state is found by one match on the current tag; the
    /// handler for `E` is selected per state type at compile time. There is
    /// no runtime "unhandled event" path; a state set with a state lacking
    /// a `Handler<E>` implementation does not satisfy `Dispatch<E>` and the
    /// call does not build:
    ///
    /// ```compile_fail
    /// use interlock::{handlers, state_set, Machine, TransitionTo};
    ///
    /// #[derive(Default, Clone)]
    /// struct Idle;
    /// #[derive(Default, Clone)]
    /// struct Busy;
    ///
    /// struct Start;
    ///
    /// handlers! {
    ///     impl Idle {
    ///         on Start => TransitionTo<Busy> {
    ///             handle(_state, _event) { TransitionTo::new() }
    ///         }
    ///     }
    /// }
    ///
    /// // `Busy` never declares a handler for `Start`.
    /// state_set! {
    ///     #[derive(Default, Clone)]
    ///     struct PairSet, tag PairTag {
    ///         idle: Idle,
    ///         busy: Busy,
    ///     }
    /// }
    ///
    /// let mut machine: Machine<PairSet> = Machine::default();
    /// machine.handle(Start);
    /// ```
    pub fn handle<E>(&mut self, event: E)
    where
        S: Dispatch<E>,
    {
        S::dispatch(self, &event);
    }
}

impl<S: StateSet + Clone> Clone for Machine<S> {
    /// Cloning duplicates the whole owned set and copies the current tag,
    /// re-deriving "current" positionally inside the new set. States may be
    /// equal-valued but they are distinct slots; the tag, not a value match,
    /// decides which slot the clone resumes in.
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            current: self.current,
        }
    }
}

impl<S: StateSet + Default> Default for Machine<S> {
    /// A machine over default-constructed states, current at the
    /// first-declared state.
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: StateSet + fmt::Debug> fmt::Debug for Machine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("states", &self.states)
            .finish()
    }
}
