//! # rivulet: a minimal push-based reactive-stream core
//!
//! Multicast observables, state-holding behavior subjects and composable
//! operators, with synchronous in-process dispatch and nothing else: no
//! schedulers, no backpressure, no retry.
//!
//! ## Quick Start
//!
//! ```rust
//! use rivulet::prelude::*;
//!
//! let source = Observable::<i32>::new(|mut emitter| {
//!   for v in 1..=4 {
//!     emitter.next(v);
//!   }
//!   emitter.complete();
//! });
//!
//! source
//!   .filter(|v| v % 2 == 0)
//!   .map(|v| v * 10)
//!   .subscribe(|v| println!("got {v}")); // got 20, got 40
//! ```
//!
//! Behavior subjects replay their latest value to every new subscriber:
//!
//! ```rust
//! use rivulet::prelude::*;
//!
//! let name: BehaviorSubject<&str> = BehaviorSubject::new("Alice");
//! name.subscribe(|n| println!("name is {n}")); // name is Alice
//! name.clone().next("Bob");                    // name is Bob
//! assert_eq!(name.value(), "Bob");
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A producer-driven multicast stream |
//! | [`Subject`] | A broadcaster that is both a sink and a stream |
//! | [`BehaviorSubject`] | A subject that retains and replays its latest value |
//! | [`Observer`] | Consumes `next`, `error` and `complete` events |
//! | [`Subscription`] | Handle to cancel an active subscription |
//!
//! ## Activation model
//!
//! Streams here are shared ("hot"): an [`Observable`]'s producer runs at
//! most once, on the first subscribe, and all subscribers fan in to that
//! single broadcast. A subscriber that joins late sees only what is
//! emitted after it joined. Dispatch is single threaded and synchronous;
//! every `next` is delivered to all observers, in subscription order,
//! before control returns to the emitter.
//!
//! [`Observable`]: observable::Observable
//! [`Subject`]: subject::Subject
//! [`BehaviorSubject`]: behavior_subject::BehaviorSubject
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription

pub mod behavior_subject;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod subject;
pub mod subscribable;
pub mod subscription;

pub use prelude::*;
