//! Dispatch benchmarks.
//!
//! Guards the "near-zero overhead" claim: handling an event is one match on
//! the current tag plus the handler body, with no allocation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use interlock::{handlers, state_set, Machine, Maybe, NoOp, TransitionTo};

#[derive(Clone, Debug, Default)]
struct Closed;

#[derive(Clone, Debug, Default)]
struct Open;

#[derive(Clone, Debug, Default)]
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
    #[derive(Clone, Debug, Default)]
    struct DoorSet, tag DoorTag {
        closed: Closed,
        open: Open,
        locked: Locked,
    }
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("ignored_event", |b| {
        let mut door: Machine<DoorSet> = Machine::default();
        b.iter(|| {
            door.handle(black_box(Unlock { key: 2 }));
        });
    });

    group.bench_function("transition_cycle", |b| {
        let mut door: Machine<DoorSet> = Machine::default();
        b.iter(|| {
            door.handle(black_box(OpenDoor));
            door.handle(black_box(CloseDoor));
        });
    });

    group.bench_function("guarded_transition", |b| {
        let mut door: Machine<DoorSet> = Machine::default();
        b.iter(|| {
            door.handle(black_box(Lock { new_key: 7 }));
            door.handle(black_box(Unlock { key: 7 }));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
