//! Prelude module for convenient imports
//!
//! Re-exports the types and traits needed to build, compose and
//! subscribe streams.

pub use crate::{
  behavior_subject::BehaviorSubject,
  observable::{BoxOp, Observable},
  observer::{Observer, ObserverAll},
  ops,
  subject::Subject,
  subscribable::Subscribable,
  subscription::{SubjectSubscription, Subscription, SubscriptionGuard},
};
