//! End-to-end scenario: a door that can be closed, open, or locked.
//!
//! Exercises the full engine surface through one concrete machine:
//! construction with caller-supplied state values, transitions with enter
//! hooks carrying event data, the key-mismatch soft-failure path, and clone
//! independence.

use interlock::{handlers, state_set, Machine, Maybe, NoOp, TransitionTo};

#[derive(Clone, Debug, Default)]
struct Closed;

#[derive(Clone, Debug, Default)]
struct Open;

#[derive(Clone, Debug)]
struct Locked {
    key: u32,
}

struct OpenDoor;
struct CloseDoor;
struct Lock {
    new_key: u32,
}
struct Unlock {
    key: u32,
}

handlers! {
    impl Closed {
        on OpenDoor => TransitionTo<Open> {
            handle(_state, _event) { TransitionTo::new() }
        }
        on Lock => TransitionTo<Locked> {
            handle(_state, _event) { TransitionTo::new() }
        }
        ignore CloseDoor, Unlock;
    }
}

handlers! {
    impl Open {
        on CloseDoor => TransitionTo<Closed> {
            handle(_state, _event) { TransitionTo::new() }
        }
        ignore OpenDoor, Lock, Unlock;
    }
}

handlers! {
    impl Locked {
        on Lock => NoOp {
            handle(_state, _event) { NoOp }
            enter(state, event) { state.key = event.new_key; }
        }
        on Unlock => Maybe<TransitionTo<Closed>> {
            handle(state, event) {
                if event.key == state.key {
                    Maybe::just(TransitionTo::new())
                } else {
                    Maybe::nothing()
                }
            }
        }
        ignore OpenDoor, CloseDoor;
    }
}

state_set! {
    #[derive(Clone, Debug)]
    struct DoorSet, tag DoorTag {
        closed: Closed,
        open: Open,
        locked: Locked,
    }
}

fn new_door() -> Machine<DoorSet> {
    Machine::new(DoorSet {
        closed: Closed,
        open: Open,
        locked: Locked { key: 0x11 },
    })
}

#[test]
fn starts_closed() {
    let door = new_door();
    assert_eq!(door.current(), DoorTag::Closed);
    assert!(door.is_in::<Closed>());
}

#[test]
fn lock_then_unlock_with_matching_key() {
    let mut door = new_door();

    door.handle(Lock { new_key: 1234 });
    assert_eq!(door.current(), DoorTag::Locked);
    // The enter hook replaced the construction-time key.
    assert_eq!(door.state::<Locked>().key, 1234);

    door.handle(Unlock { key: 2 });
    assert_eq!(door.current(), DoorTag::Locked);
    assert_eq!(door.state::<Locked>().key, 1234);

    door.handle(Unlock { key: 1234 });
    assert_eq!(door.current(), DoorTag::Closed);
}

#[test]
fn open_close_cycle() {
    let mut door = new_door();

    door.handle(OpenDoor);
    assert!(door.is_in::<Open>());

    door.handle(CloseDoor);
    assert!(door.is_in::<Closed>());
}

#[test]
fn locked_door_ignores_open() {
    let mut door = new_door();
    door.handle(Lock { new_key: 1 });

    door.handle(OpenDoor);
    assert_eq!(door.current(), DoorTag::Locked);
}

#[test]
fn relocking_updates_the_key_without_leaving() {
    let mut door = new_door();
    door.handle(Lock { new_key: 1 });

    // Handling Lock while already locked is a NoOp action, but the arm
    // only attaches the key update to the enter hook, so the key stays.
    door.handle(Lock { new_key: 99 });
    assert_eq!(door.state::<Locked>().key, 1);

    door.handle(Unlock { key: 1 });
    assert!(door.is_in::<Closed>());
}

#[test]
fn cloned_door_keeps_its_own_current_state() {
    let mut door = new_door();
    door.handle(Lock { new_key: 7 });

    let snapshot = door.clone();
    assert_eq!(snapshot.current(), DoorTag::Locked);
    assert_eq!(snapshot.state::<Locked>().key, 7);

    door.handle(Unlock { key: 7 });
    assert_eq!(door.current(), DoorTag::Closed);

    // The clone re-derived "current" inside its own state set and is not
    // affected by the original moving on.
    assert_eq!(snapshot.current(), DoorTag::Locked);
    assert_eq!(snapshot.state::<Locked>().key, 7);
}
