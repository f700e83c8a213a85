//! Operator factories, composed through the `pipe` family.
//!
//! An operator is a function from one [`Observable`](crate::Observable)
//! to another. Factories here curry their configuration (a projection or
//! a predicate) and return the operator; nothing subscribes until the
//! composed stream is subscribed.

pub mod filter;
pub mod map;

pub use filter::filter;
pub use map::map;
