//! Observer trait and closure adapters
//!
//! An `Observer` is the consumer side of a stream: it receives values via
//! `next`, at most one terminal `error` or `complete`, and nothing after
//! that. Terminality is a caller contract, not a state machine; observers
//! stay registered in a multicast collection, so every method takes
//! `&mut self`.

/// The consumer of data in reactive programming.
///
/// Observers are registered through [`Subscribable`](crate::Subscribable),
/// which always builds a fully defaulted observer before registration:
/// every capability the caller left out is replaced with an explicit no-op,
/// so dispatch code never checks for absence.
pub trait Observer<Item, Err> {
  /// Receive the next value from the stream.
  fn next(&mut self, value: Item);

  /// Receive a terminal error. No further calls should follow.
  fn error(&mut self, err: Err);

  /// Receive the completion signal. No further calls should follow.
  fn complete(&mut self);
}

impl<Item, Err, T> Observer<Item, Err> for Box<T>
where
  T: Observer<Item, Err> + ?Sized,
{
  #[inline]
  fn next(&mut self, value: Item) { (**self).next(value) }

  #[inline]
  fn error(&mut self, err: Err) { (**self).error(err) }

  #[inline]
  fn complete(&mut self) { (**self).complete() }
}

/// A complete observer assembled from three closures.
///
/// This is the defaulting step behind the `subscribe*` family: partial
/// capability sets are filled out with no-op closures here, once, at
/// registration time.
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> ObserverAll<N, E, C> {
  #[inline]
  pub fn new(next: N, error: E, complete: C) -> Self {
    ObserverAll { next, error, complete }
  }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnMut(Err),
  C: FnMut(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value) }

  #[inline]
  fn error(&mut self, err: Err) { (self.error)(err) }

  #[inline]
  fn complete(&mut self) { (self.complete)() }
}
