//! Interlock: a statically-typed finite state machine engine.
//!
//! Interlock is built for control software (hardware interlocks, protocol
//! handshakes, device drivers) where the legal transitions of every state
//! must be fixed at build time, but the currently active state is tracked
//! and swapped at run time with near-zero overhead and no heap allocation.
//!
//! # Core Concepts
//!
//! - **State**: a plain struct per mode; a machine owns one instance of each
//!   for its whole lifetime
//! - **Event**: an immutable value describing something that happened
//! - **Action**: what handling one event does: nothing ([`NoOp`]), a
//!   transition ([`TransitionTo`]), or a bounded choice ([`OneOf`],
//!   [`Maybe`])
//! - **Machine**: owns the state set, tracks the current state through a
//!   `Copy` tag, dispatches events and executes the returned action
//!
//! A state lacking a handler for an event the machine is asked to accept is
//! an unsatisfied trait bound: the incomplete transition table does not
//! build, so there is no runtime "unhandled event" path at all.
//!
//! # Example
//!
//! ```rust
//! use interlock::{handlers, state_set, Machine, Maybe, NoOp, TransitionTo};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Closed;
//! #[derive(Clone, Debug, Default)]
//! struct Open;
//! #[derive(Clone, Debug)]
//! struct Locked {
//!     key: u32,
//! }
//!
//! struct OpenDoor;
//! struct CloseDoor;
//! struct Lock {
//!     new_key: u32,
//! }
//! struct Unlock {
//!     key: u32,
//! }
//!
//! handlers! {
//!     impl Closed {
//!         on OpenDoor => TransitionTo<Open> {
//!             handle(_state, _event) { TransitionTo::new() }
//!         }
//!         on Lock => TransitionTo<Locked> {
//!             handle(_state, _event) { TransitionTo::new() }
//!         }
//!         ignore CloseDoor, Unlock;
//!     }
//! }
//!
//! handlers! {
//!     impl Open {
//!         on CloseDoor => TransitionTo<Closed> {
//!             handle(_state, _event) { TransitionTo::new() }
//!         }
//!         ignore OpenDoor, Lock, Unlock;
//!     }
//! }
//!
//! handlers! {
//!     impl Locked {
//!         on Lock => NoOp {
//!             handle(_state, _event) { NoOp }
//!             enter(state, event) { state.key = event.new_key; }
//!         }
//!         on Unlock => Maybe<TransitionTo<Closed>> {
//!             handle(state, event) {
//!                 if event.key == state.key {
//!                     Maybe::just(TransitionTo::new())
//!                 } else {
//!                     Maybe::nothing()
//!                 }
//!             }
//!         }
//!         ignore OpenDoor, CloseDoor;
//!     }
//! }
//!
//! state_set! {
//!     #[derive(Clone, Debug)]
//!     struct DoorSet, tag DoorTag {
//!         closed: Closed,
//!         open: Open,
//!         locked: Locked,
//!     }
//! }
//!
//! let mut door = Machine::new(DoorSet {
//!     closed: Closed,
//!     open: Open,
//!     locked: Locked { key: 0x11 },
//! });
//!
//! door.handle(Lock { new_key: 1234 });
//! assert_eq!(door.current(), DoorTag::Locked);
//! assert_eq!(door.state::<Locked>().key, 1234);
//!
//! door.handle(Unlock { key: 2 });
//! assert_eq!(door.current(), DoorTag::Locked);
//!
//! door.handle(Unlock { key: 1234 });
//! assert!(door.is_in::<Closed>());
//! ```

pub mod actions;
pub mod core;
pub mod macros;

// Re-export commonly used types
pub use crate::actions::{Action, Maybe, NoOp, OneOf, TransitionTo};
pub use crate::core::{Dispatch, Handler, Machine, Slot, StateSet};
