//! Subject: a multicast broadcaster that is both a stream and a sink.

use std::{
  cell::RefCell,
  convert::Infallible,
  rc::{Rc, Weak},
};

use smallvec::SmallVec;

use crate::{
  observable::Observable,
  observer::Observer,
  subscribable::Subscribable,
  subscription::SubjectSubscription,
};

type SharedObserver<Item, Err> = Rc<RefCell<Box<dyn Observer<Item, Err>>>>;

/// Ordered registry of the observers attached to one subject.
///
/// Each registration is keyed by a monotonically increasing id so a
/// subscription can remove exactly the observer it was returned for.
/// The registry is private to its owning subject; only subscribe,
/// unsubscribe and dispatch ever touch it.
pub(crate) struct Subscribers<Item, Err> {
  next_id: usize,
  items: SmallVec<[(usize, SharedObserver<Item, Err>); 2]>,
}

impl<Item, Err> Default for Subscribers<Item, Err> {
  fn default() -> Self { Subscribers { next_id: 0, items: SmallVec::new() } }
}

impl<Item, Err> Subscribers<Item, Err> {
  fn add(&mut self, observer: Box<dyn Observer<Item, Err>>) -> usize {
    let id = self.next_id;
    self.next_id += 1;
    self.items.push((id, Rc::new(RefCell::new(observer))));
    id
  }

  pub(crate) fn remove(&mut self, id: usize) -> bool {
    let position = self.items.iter().position(|(i, _)| *i == id);
    if let Some(position) = position {
      self.items.remove(position);
    }
    position.is_some()
  }

  pub(crate) fn contains(&self, id: usize) -> bool {
    self.items.iter().any(|(i, _)| *i == id)
  }

  fn len(&self) -> usize { self.items.len() }

  /// Copy of the current observer pointers, in registration order.
  ///
  /// Dispatch always iterates a snapshot, never the live collection, so
  /// observers may subscribe or unsubscribe from inside their own
  /// callbacks without corrupting the iteration. A removal issued during
  /// an emission takes effect from the next emission.
  fn snapshot(&self) -> SmallVec<[SharedObserver<Item, Err>; 2]> {
    self
      .items
      .iter()
      .map(|(_, observer)| observer.clone())
      .collect()
  }

  /// Empty the registry and hand back the former observers, in order.
  /// Used for terminal signals, which are delivered exactly once.
  fn drain(&mut self) -> SmallVec<[SharedObserver<Item, Err>; 2]> {
    self
      .items
      .drain(..)
      .map(|(_, observer)| observer)
      .collect()
  }
}

/// A multicast broadcaster: values pushed in via [`Observer::next`] are
/// fanned out synchronously to every registered observer in subscription
/// order, before control returns to the emitter.
///
/// Cloning a `Subject` is cheap and shares the same registry, which is
/// how the same subject can serve as a sink on one side and a stream on
/// the other.
///
/// `error` and `complete` are one-shot terminal signals: they broadcast
/// to every observer and then empty the registry, so a later `next`
/// reaches nobody and is a silent no-op.
///
/// Emissions are not re-entrant. Calling `next`, `error` or `complete`
/// on a subject from inside one of that subject's own callbacks panics.
/// Subscribing or unsubscribing from inside callbacks is fine.
pub struct Subject<Item, Err = Infallible> {
  observers: Rc<RefCell<Subscribers<Item, Err>>>,
}

impl<Item, Err> Default for Subject<Item, Err> {
  fn default() -> Self {
    Subject { observers: Rc::new(RefCell::new(Subscribers::default())) }
  }
}

impl<Item, Err> Clone for Subject<Item, Err> {
  #[inline]
  fn clone(&self) -> Self { Subject { observers: self.observers.clone() } }
}

impl<Item, Err> Subject<Item, Err> {
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// Number of currently registered observers.
  pub fn subscriber_count(&self) -> usize { self.observers.borrow().len() }

  /// Whether no observers are registered.
  pub fn is_empty(&self) -> bool { self.subscriber_count() == 0 }

  pub(crate) fn downgrade(&self) -> Weak<RefCell<Subscribers<Item, Err>>> {
    Rc::downgrade(&self.observers)
  }
}

impl<Item, Err> Subscribable<Item, Err> for Subject<Item, Err> {
  type Unsub = SubjectSubscription<Item, Err>;

  fn actual_subscribe(
    &self,
    observer: Box<dyn Observer<Item, Err>>,
  ) -> Self::Unsub {
    let id = self.observers.borrow_mut().add(observer);
    SubjectSubscription::new(self.downgrade(), id)
  }
}

impl<Item, Err> Observer<Item, Err> for Subject<Item, Err>
where
  Item: Clone,
  Err: Clone,
{
  /// Broadcast `value` in subscription order. The value is cloned for
  /// every observer but the last, which receives it moved.
  fn next(&mut self, value: Item) {
    let snapshot = self.observers.borrow().snapshot();
    let mut iter = snapshot.into_iter().peekable();
    while let Some(observer) = iter.next() {
      if iter.peek().is_some() {
        observer.borrow_mut().next(value.clone());
      } else {
        observer.borrow_mut().next(value);
        break;
      }
    }
  }

  fn error(&mut self, err: Err) {
    let drained = self.observers.borrow_mut().drain();
    let mut iter = drained.into_iter().peekable();
    while let Some(observer) = iter.next() {
      if iter.peek().is_some() {
        observer.borrow_mut().error(err.clone());
      } else {
        observer.borrow_mut().error(err);
        break;
      }
    }
  }

  fn complete(&mut self) {
    let drained = self.observers.borrow_mut().drain();
    for observer in drained {
      observer.borrow_mut().complete();
    }
  }
}

impl<Item, Err> Subject<Item, Err>
where
  Item: Clone + 'static,
  Err: Clone + 'static,
{
  /// View this subject as an [`Observable`] whose producer subscribes the
  /// downstream fan-out handle to the subject, forwarding every event.
  pub fn as_observable(&self) -> Observable<Item, Err> {
    let source = self.clone();
    Observable::new(move |downstream: Subject<Item, Err>| {
      source.subscribe_with(downstream);
    })
  }

  /// Compose this subject with an operator. See [`Observable::pipe`].
  pub fn pipe<A>(
    &self,
    op: impl FnOnce(Observable<Item, Err>) -> A,
  ) -> A {
    self.as_observable().pipe(op)
  }

  /// Compose this subject with two operators, left to right.
  pub fn pipe2<A, B>(
    &self,
    op1: impl FnOnce(Observable<Item, Err>) -> A,
    op2: impl FnOnce(A) -> B,
  ) -> B {
    self.as_observable().pipe2(op1, op2)
  }

  /// Compose this subject with three operators, left to right.
  pub fn pipe3<A, B, C>(
    &self,
    op1: impl FnOnce(Observable<Item, Err>) -> A,
    op2: impl FnOnce(A) -> B,
    op3: impl FnOnce(B) -> C,
  ) -> C {
    self.as_observable().pipe3(op1, op2, op3)
  }
}
