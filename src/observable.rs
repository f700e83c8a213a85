//! Observable: a producer-driven multicast stream.

use std::{cell::RefCell, convert::Infallible, rc::Rc};

use crate::{
  observer::Observer,
  ops,
  subject::Subject,
  subscribable::Subscribable,
  subscription::SubjectSubscription,
};

type Producer<Item, Err> = Box<dyn FnOnce(Subject<Item, Err>)>;

/// Boxed operator for type-erased, variable-length [`Observable::pipe_dyn`]
/// chains. Erasure fixes the item type across the whole chain; use the
/// typed `pipe` family when a stage changes the type.
pub type BoxOp<Item, Err> =
  Box<dyn FnOnce(Observable<Item, Err>) -> Observable<Item, Err>>;

/// A push-based source of values, activated by subscription.
///
/// An `Observable` couples a producer function with a multicast registry.
/// Activation is shared: the producer runs *at most once*, triggered by
/// the first subscribe, and every subscriber attaches to that one
/// broadcast. Subscribers that join later only see values emitted after
/// they joined. Unsubscribing never stops the producer, and producers
/// return no teardown value.
///
/// The producer receives the observable's own [`Subject`] as its
/// argument: a fully defaulted observer that fans every `next`, `error`
/// and `complete` out to whatever observers are registered at that
/// moment. A producer is free to stash the subject and call into it
/// later, for example from a timer callback; the core only defines what
/// happens once the calls arrive.
///
/// Cloning an `Observable` is cheap and shares both the registry and the
/// pending producer.
pub struct Observable<Item, Err = Infallible> {
  subject: Subject<Item, Err>,
  producer: Rc<RefCell<Option<Producer<Item, Err>>>>,
}

impl<Item, Err> Clone for Observable<Item, Err> {
  #[inline]
  fn clone(&self) -> Self {
    Observable {
      subject: self.subject.clone(),
      producer: self.producer.clone(),
    }
  }
}

impl<Item, Err> Observable<Item, Err> {
  /// Wrap a producer into an observable. Nothing runs until the first
  /// subscribe.
  pub fn new<P>(producer: P) -> Self
  where
    P: FnOnce(Subject<Item, Err>) + 'static,
  {
    Observable {
      subject: Subject::new(),
      producer: Rc::new(RefCell::new(Some(Box::new(producer)))),
    }
  }

  /// Run the producer if it has not run yet.
  fn activate(&self) {
    let producer = self.producer.borrow_mut().take();
    if let Some(producer) = producer {
      producer(self.subject.clone());
    }
  }

  /// Apply one operator to this observable.
  ///
  /// Composition is purely structural; the chain activates only when the
  /// final stream is subscribed. Chaining `pipe` calls composes any
  /// number of operators with full type safety.
  #[inline]
  pub fn pipe<A>(self, op: impl FnOnce(Self) -> A) -> A { op(self) }

  /// Apply two operators, left to right.
  #[inline]
  pub fn pipe2<A, B>(
    self,
    op1: impl FnOnce(Self) -> A,
    op2: impl FnOnce(A) -> B,
  ) -> B {
    op2(op1(self))
  }

  /// Apply three operators, left to right.
  #[inline]
  pub fn pipe3<A, B, C>(
    self,
    op1: impl FnOnce(Self) -> A,
    op2: impl FnOnce(A) -> B,
    op3: impl FnOnce(B) -> C,
  ) -> C {
    op3(op2(op1(self)))
  }

  /// Apply an arbitrary number of boxed, item-type-preserving operators,
  /// left to right.
  pub fn pipe_dyn(self, ops: Vec<BoxOp<Item, Err>>) -> Self {
    ops.into_iter().fold(self, |source, op| op(source))
  }
}

impl<Item, Err> Observable<Item, Err>
where
  Item: Clone + 'static,
  Err: Clone + 'static,
{
  /// Shorthand for `self.pipe(ops::map(project))`.
  pub fn map<Out, F>(self, project: F) -> Observable<Out, Err>
  where
    Out: Clone + 'static,
    F: FnMut(Item) -> Out + 'static,
  {
    self.pipe(ops::map(project))
  }

  /// Shorthand for `self.pipe(ops::filter(predicate))`.
  pub fn filter<F>(self, predicate: F) -> Self
  where
    F: FnMut(&Item) -> bool + 'static,
  {
    self.pipe(ops::filter(predicate))
  }
}

impl<Item, Err> Subscribable<Item, Err> for Observable<Item, Err> {
  type Unsub = SubjectSubscription<Item, Err>;

  /// Register the observer, then activate the producer if this was the
  /// first subscription, so synchronously produced values reach the
  /// subscriber that triggered them.
  fn actual_subscribe(
    &self,
    observer: Box<dyn Observer<Item, Err>>,
  ) -> Self::Unsub {
    let subscription = self.subject.actual_subscribe(observer);
    self.activate();
    subscription
  }
}
