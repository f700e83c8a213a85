//! Subscription handles returned by every subscribe call.

use std::{cell::RefCell, rc::Weak};

use crate::subject::Subscribers;

/// Handle allowing a registered observer to be deregistered before the
/// stream has delivered all of its events.
pub trait Subscription {
  /// Remove the observer this handle was returned for. Safe to call any
  /// number of times, and after the source completed or was dropped.
  fn unsubscribe(&mut self);

  fn is_closed(&self) -> bool;

  /// Activates RAII behavior for this subscription: `unsubscribe()` runs
  /// as soon as the returned guard goes out of scope.
  ///
  /// **Attention:** if you don't bind the return value to a variable,
  /// `unsubscribe()` is called immediately, which is probably not what
  /// you want.
  fn unsubscribe_when_dropped(self) -> SubscriptionGuard<Self>
  where
    Self: Sized,
  {
    SubscriptionGuard(self)
  }
}

/// Subscription for one observer registered with a subject's registry.
///
/// Removal is identity based: the handle carries the numeric id allocated
/// at registration, never a comparison of observer values. The registry is
/// held weakly, so an outstanding handle does not keep a dropped stream
/// alive and unsubscribing after the drop is a no-op.
pub struct SubjectSubscription<Item, Err> {
  registry: Weak<RefCell<Subscribers<Item, Err>>>,
  id: usize,
}

impl<Item, Err> SubjectSubscription<Item, Err> {
  pub(crate) fn new(
    registry: Weak<RefCell<Subscribers<Item, Err>>>,
    id: usize,
  ) -> Self {
    SubjectSubscription { registry, id }
  }
}

impl<Item, Err> Clone for SubjectSubscription<Item, Err> {
  fn clone(&self) -> Self {
    SubjectSubscription { registry: self.registry.clone(), id: self.id }
  }
}

impl<Item, Err> Subscription for SubjectSubscription<Item, Err> {
  fn unsubscribe(&mut self) {
    if let Some(registry) = self.registry.upgrade() {
      registry.borrow_mut().remove(self.id);
    }
  }

  fn is_closed(&self) -> bool {
    self
      .registry
      .upgrade()
      .is_none_or(|registry| !registry.borrow().contains(self.id))
  }
}

/// An RAII "scoped subscription": when the guard is dropped the
/// subscription is unsubscribed.
///
/// If you want to drop it immediately, wrap it in its own scope.
#[derive(Debug)]
#[must_use]
pub struct SubscriptionGuard<T: Subscription>(pub(crate) T);

impl<T: Subscription> SubscriptionGuard<T> {
  /// Wraps an existing subscription with a guard to enable RAII behavior
  /// for it.
  pub fn new(subscription: T) -> SubscriptionGuard<T> {
    SubscriptionGuard(subscription)
  }
}

impl<T: Subscription> Drop for SubscriptionGuard<T> {
  #[inline]
  fn drop(&mut self) { self.0.unsubscribe() }
}

impl<Item, Err> std::fmt::Debug for SubjectSubscription<Item, Err> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SubjectSubscription")
      .field("id", &self.id)
      .field("is_closed", &self.is_closed())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  #[test]
  fn unsubscribe_is_idempotent() {
    let subject = Subject::<i32>::new();
    let values = Rc::new(RefCell::new(vec![]));
    let collected = values.clone();

    let mut sub =
      subject.subscribe(move |v| collected.borrow_mut().push(v));
    assert!(!sub.is_closed());

    subject.clone().next(1);
    sub.unsubscribe();
    assert!(sub.is_closed());
    subject.clone().next(2);
    // A second unsubscribe must be a silent no-op.
    sub.unsubscribe();

    assert_eq!(*values.borrow(), vec![1]);
  }

  #[test]
  fn unsubscribe_after_source_dropped() {
    let mut sub = {
      let subject = Subject::<i32>::new();
      subject.subscribe(|_| {})
    };
    assert!(sub.is_closed());
    sub.unsubscribe();
  }

  #[test]
  fn guard_unsubscribes_on_drop() {
    let subject = Subject::<i32>::new();
    let values = Rc::new(RefCell::new(vec![]));
    let collected = values.clone();

    {
      let _guard = subject
        .subscribe(move |v| collected.borrow_mut().push(v))
        .unsubscribe_when_dropped();
      subject.clone().next(1);
    }
    subject.clone().next(2);

    assert_eq!(*values.borrow(), vec![1]);
  }
}
