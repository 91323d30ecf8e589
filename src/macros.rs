//! Authoring macros.
//!
//! Two macros carry the whole authoring surface: [`state_set!`] declares the
//! owned-state collection a [`Machine`](crate::Machine) drives, and
//! [`handlers!`] writes a state's [`Handler`](crate::Handler)
//! implementations from a compact arm syntax. Both are pure sugar: they
//! expand to the same structs, enums and trait implementations one could
//! write by hand, and impose no runtime behavior of their own.

/// Declare the owned-state collection for a machine.
///
/// Expands to:
/// - the set struct itself, one field per state, with any attributes (e.g.
///   derives) passed through;
/// - a fieldless tag enum with one variant per state, named after the state
///   type, in declaration order;
/// - [`StateSet`](crate::StateSet) (initial = first field),
///   [`Slot`](crate::Slot) for every state, and a generic
///   [`Dispatch`](crate::Dispatch) implementation that requires every state
///   to handle whichever event is dispatched.
///
/// The tag enum is the machine's current-state discriminant; variant order
/// matching field order is what lets a cloned machine re-derive its current
/// state positionally.
///
/// # Example
///
/// ```rust
/// use interlock::{handlers, state_set, Machine, TransitionTo};
///
/// #[derive(Default, Clone)]
/// struct Disarmed;
/// #[derive(Default, Clone)]
/// struct Armed;
///
/// struct Arm;
/// struct Disarm;
///
/// handlers! {
///     impl Disarmed {
///         on Arm => TransitionTo<Armed> {
///             handle(_state, _event) { TransitionTo::new() }
///         }
///         ignore Disarm;
///     }
/// }
///
/// handlers! {
///     impl Armed {
///         on Disarm => TransitionTo<Disarmed> {
///             handle(_state, _event) { TransitionTo::new() }
///         }
///         ignore Arm;
///     }
/// }
///
/// state_set! {
///     #[derive(Default, Clone)]
///     struct InterlockSet, tag InterlockTag {
///         disarmed: Disarmed,
///         armed: Armed,
///     }
/// }
///
/// let mut machine: Machine<InterlockSet> = Machine::default();
/// assert_eq!(machine.current(), InterlockTag::Disarmed);
/// machine.handle(Arm);
/// assert_eq!(machine.current(), InterlockTag::Armed);
/// ```
#[macro_export]
macro_rules! state_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $set:ident, tag $tag:ident {
            $first_field:ident : $first_state:ident
            $(, $field:ident : $state:ident )* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $set {
            $vis $first_field: $first_state,
            $( $vis $field: $state, )*
        }

        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $tag {
            $first_state,
            $( $state, )*
        }

        impl $crate::StateSet for $set {
            type Tag = $tag;
            const INITIAL: $tag = $tag::$first_state;
        }

        impl $crate::Slot<$first_state> for $set {
            const TAG: $tag = $tag::$first_state;

            fn get(&self) -> &$first_state {
                &self.$first_field
            }

            fn get_mut(&mut self) -> &mut $first_state {
                &mut self.$first_field
            }
        }

        $(
            impl $crate::Slot<$state> for $set {
                const TAG: $tag = $tag::$state;

                fn get(&self) -> &$state {
                    &self.$field
                }

                fn get_mut(&mut self) -> &mut $state {
                    &mut self.$field
                }
            }
        )*

        impl<__E> $crate::Dispatch<__E> for $set
        where
            $first_state: $crate::Handler<__E>,
            <$first_state as $crate::Handler<__E>>::Action:
                $crate::Action<$set, $first_state, __E>,
            $(
                $state: $crate::Handler<__E>,
                <$state as $crate::Handler<__E>>::Action:
                    $crate::Action<$set, $state, __E>,
            )*
        {
            fn dispatch(machine: &mut $crate::Machine<Self>, event: &__E) {
                match machine.current() {
                    $tag::$first_state => {
                        let action = <$first_state as $crate::Handler<__E>>::handle(
                            machine.state::<$first_state>(),
                            event,
                        );
                        <<$first_state as $crate::Handler<__E>>::Action as $crate::Action<
                            $set,
                            $first_state,
                            __E,
                        >>::execute(action, machine, event);
                    }
                    $(
                        $tag::$state => {
                            let action = <$state as $crate::Handler<__E>>::handle(
                                machine.state::<$state>(),
                                event,
                            );
                            <<$state as $crate::Handler<__E>>::Action as $crate::Action<
                                $set,
                                $state,
                                __E,
                            >>::execute(action, machine, event);
                        }
                    )*
                }
            }
        }
    };
}

/// Write a state's [`Handler`](crate::Handler) implementations.
///
/// Three arm forms compose inside one block:
/// - `on Event => ActionType { handle(state, event) { .. } }`: exactly one
///   event/action pairing; `state` binds `&Self` and `event` binds
///   `&Event`. An optional `enter(state, event) { .. }` and/or
///   `leave(state, event) { .. }` after the handler overrides the lifecycle
///   hooks for that event (in that order); `state` binds `&mut Self` there.
/// - `ignore E1, E2;`: a fallback arm where each listed event gets a handler
///   returning [`NoOp`](crate::NoOp), collapsing "this state ignores most
///   events" to one line.
/// - several arms in one block merge into the state's overall handling
///   capability; `on` arms come before `ignore` arms.
///
/// # Example
///
/// ```rust
/// use interlock::{handlers, Handler, Maybe, TransitionTo};
///
/// struct Granted;
/// # handlers! { impl Granted { ignore Badge; } }
///
/// struct Badge {
///     code: u32,
/// }
///
/// struct Checking {
///     expected: u32,
/// }
///
/// handlers! {
///     impl Checking {
///         on Badge => Maybe<TransitionTo<Granted>> {
///             handle(state, event) {
///                 if event.code == state.expected {
///                     Maybe::just(TransitionTo::new())
///                 } else {
///                     Maybe::nothing()
///                 }
///             }
///         }
///     }
/// }
///
/// let checking = Checking { expected: 7 };
/// assert!(matches!(
///     checking.handle(&Badge { code: 7 }),
///     Maybe::Left(_)
/// ));
/// ```
#[macro_export]
macro_rules! handlers {
    (
        impl $state:ty {
            $(
                on $event:ty => $action:ty {
                    handle($hs:pat_param, $he:pat_param) $hbody:block
                    $( enter($es:pat_param, $ee:pat_param) $ebody:block )?
                    $( leave($ls:pat_param, $le:pat_param) $lbody:block )?
                }
            )*
            $( ignore $( $ignored:ty ),+ ; )*
        }
    ) => {
        $(
            impl $crate::Handler<$event> for $state {
                type Action = $action;

                fn handle(&self, event: &$event) -> Self::Action {
                    let $hs = self;
                    let $he = event;
                    $hbody
                }

                $(
                    fn on_enter(&mut self, event: &$event) {
                        let $es = self;
                        let $ee = event;
                        $ebody
                    }
                )?

                $(
                    fn on_leave(&mut self, event: &$event) {
                        let $ls = self;
                        let $le = event;
                        $lbody
                    }
                )?
            }
        )*

        $(
            $(
                impl $crate::Handler<$ignored> for $state {
                    type Action = $crate::NoOp;

                    fn handle(&self, _event: &$ignored) -> Self::Action {
                        $crate::NoOp
                    }
                }
            )+
        )*
    };
}
