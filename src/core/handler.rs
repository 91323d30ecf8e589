//! The per-event handler contract for states.

/// How a state answers one event type.
///
/// A machine declared over events `E1..En` requires every one of its state
/// types to implement `Handler<Ei>` for each event; the bound is checked
/// where [`Machine::handle`](crate::Machine::handle) is called, so a missing
/// handler is a build failure rather than a runtime fallback.
///
/// The lifecycle hooks ride along with default no-op bodies. A state that
/// cares about being entered or left on a particular event overrides the
/// hook inside its `Handler` implementation for that event; a state that
/// does not gets the silent default. The [`handlers!`](crate::handlers)
/// macro writes these implementations from a compact arm syntax, but
/// implementing the trait by hand is equally valid.
///
/// # Example
///
/// ```rust
/// use interlock::{Handler, NoOp};
///
/// #[derive(Default)]
/// struct Armed {
///     trips: u32,
/// }
///
/// struct Trip;
///
/// impl Handler<Trip> for Armed {
///     type Action = NoOp;
///
///     fn handle(&self, _event: &Trip) -> NoOp {
///         NoOp
///     }
///
///     fn on_enter(&mut self, _event: &Trip) {
///         self.trips += 1;
///     }
/// }
/// ```
pub trait Handler<E> {
    /// The action value produced when this state handles `E`.
    type Action;

    /// Answer the event. Runs while this state is current; must not assume
    /// anything about other states in the set.
    fn handle(&self, event: &E) -> Self::Action;

    /// Invoked by a transition action after this state became current.
    fn on_enter(&mut self, _event: &E) {}

    /// Invoked by a transition action while this state is still current,
    /// before the switch.
    fn on_leave(&mut self, _event: &E) {}
}
