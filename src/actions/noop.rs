//! The do-nothing action.

use crate::actions::Action;
use crate::core::{Machine, StateSet};

/// Action for events that are legal but cause no observable change.
///
/// Executing it leaves the current state, and every state's data, exactly
/// as they were. The `ignore` arms of [`handlers!`](crate::handlers) expand
/// to handlers returning this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoOp;

impl<S: StateSet, Src, E> Action<S, Src, E> for NoOp {
    fn execute(self, _machine: &mut Machine<S>, _event: &E) {}
}

#[cfg(test)]
mod tests {
    use crate::{Machine, NoOp};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Only {
        data: u32,
    }

    struct Ping;

    crate::handlers! {
        impl Only {
            ignore Ping;
        }
    }

    crate::state_set! {
        #[derive(Clone, Debug, Default)]
        struct OnlySet, tag OnlyTag {
            only: Only,
        }
    }

    #[test]
    fn ignored_event_changes_nothing() {
        let mut machine: Machine<OnlySet> = Machine::default();
        machine.state_mut::<Only>().data = 7;

        machine.handle(Ping);

        assert_eq!(machine.current(), OnlyTag::Only);
        assert_eq!(machine.state::<Only>().data, 7);
    }

    #[test]
    fn noop_executes_directly() {
        use crate::Action;

        let mut machine: Machine<OnlySet> = Machine::default();
        Action::<OnlySet, Only, Ping>::execute(NoOp, &mut machine, &Ping);
        assert_eq!(machine.current(), OnlyTag::Only);
    }
}
