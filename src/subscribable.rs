//! The subscribe surface shared by every stream type.

use crate::{
  observer::{Observer, ObserverAll},
  subscription::Subscription,
};

/// Anything an observer can be registered with.
///
/// `actual_subscribe` is the single required entry point and always
/// receives a complete observer. The provided `subscribe*` family accepts
/// partial capability sets and fills every missing capability with an
/// explicit no-op closure before registration, so implementations never
/// deal with absent callbacks.
pub trait Subscribable<Item, Err> {
  type Unsub: Subscription;

  /// Register a fully defaulted observer and return its subscription.
  fn actual_subscribe(
    &self,
    observer: Box<dyn Observer<Item, Err>>,
  ) -> Self::Unsub;

  /// Subscribe with a value callback only; errors and completion are
  /// ignored.
  fn subscribe<N>(&self, next: N) -> Self::Unsub
  where
    N: FnMut(Item) + 'static,
    Item: 'static,
    Err: 'static,
  {
    self.actual_subscribe(Box::new(ObserverAll::new(
      next,
      |_: Err| {},
      || {},
    )))
  }

  /// Subscribe with value and error callbacks; completion is ignored.
  fn subscribe_err<N, E>(&self, next: N, error: E) -> Self::Unsub
  where
    N: FnMut(Item) + 'static,
    E: FnMut(Err) + 'static,
    Item: 'static,
    Err: 'static,
  {
    self.actual_subscribe(Box::new(ObserverAll::new(next, error, || {})))
  }

  /// Subscribe with value and completion callbacks; errors are ignored.
  fn subscribe_complete<N, C>(&self, next: N, complete: C) -> Self::Unsub
  where
    N: FnMut(Item) + 'static,
    C: FnMut() + 'static,
    Item: 'static,
    Err: 'static,
  {
    self.actual_subscribe(Box::new(ObserverAll::new(next, |_: Err| {}, complete)))
  }

  /// Subscribe with all three capabilities.
  fn subscribe_all<N, E, C>(
    &self,
    next: N,
    error: E,
    complete: C,
  ) -> Self::Unsub
  where
    N: FnMut(Item) + 'static,
    E: FnMut(Err) + 'static,
    C: FnMut() + 'static,
    Item: 'static,
    Err: 'static,
  {
    self.actual_subscribe(Box::new(ObserverAll::new(next, error, complete)))
  }

  /// Subscribe with any [`Observer`] implementation.
  fn subscribe_with<O>(&self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'static,
    Item: 'static,
    Err: 'static,
  {
    self.actual_subscribe(Box::new(observer))
  }
}
