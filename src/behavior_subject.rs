//! BehaviorSubject: a subject that represents current state.

use std::{cell::RefCell, convert::Infallible, rc::Rc};

use crate::{
  observable::Observable,
  observer::Observer,
  subject::Subject,
  subscribable::Subscribable,
  subscription::SubjectSubscription,
};

/// A multicast subject that retains the most recently pushed value and
/// replays it, synchronously, to every new subscriber before that
/// subscriber can observe anything else.
///
/// Use it to model current state rather than a pure event stream: a
/// subscriber always starts from the latest value, never from silence.
///
/// The retained value is created at construction, overwritten by every
/// `next` and never cleared. No other value is buffered; observers that
/// subscribe late see the then-current value and everything after it,
/// nothing before. Replay is the subject's only automatic behavior:
/// `error` and `complete` are broadcast solely when a caller pushes them
/// in.
pub struct BehaviorSubject<Item, Err = Infallible> {
  subject: Subject<Item, Err>,
  value: Rc<RefCell<Item>>,
}

impl<Item, Err> Clone for BehaviorSubject<Item, Err> {
  #[inline]
  fn clone(&self) -> Self {
    BehaviorSubject {
      subject: self.subject.clone(),
      value: self.value.clone(),
    }
  }
}

impl<Item, Err> BehaviorSubject<Item, Err> {
  pub fn new(initial: Item) -> Self {
    BehaviorSubject {
      subject: Subject::new(),
      value: Rc::new(RefCell::new(initial)),
    }
  }

  /// Number of currently registered observers.
  #[inline]
  pub fn subscriber_count(&self) -> usize { self.subject.subscriber_count() }

  /// Whether no observers are registered.
  #[inline]
  pub fn is_empty(&self) -> bool { self.subject.is_empty() }
}

impl<Item: Clone, Err> BehaviorSubject<Item, Err> {
  /// The current value, without side effects.
  pub fn value(&self) -> Item { self.value.borrow().clone() }
}

impl<Item, Err> Subscribable<Item, Err> for BehaviorSubject<Item, Err>
where
  Item: Clone,
{
  type Unsub = SubjectSubscription<Item, Err>;

  /// Deliver exactly one `next` with the current value to the new
  /// observer, then register it for everything that follows.
  fn actual_subscribe(
    &self,
    mut observer: Box<dyn Observer<Item, Err>>,
  ) -> Self::Unsub {
    observer.next(self.value.borrow().clone());
    self.subject.actual_subscribe(observer)
  }
}

impl<Item, Err> Observer<Item, Err> for BehaviorSubject<Item, Err>
where
  Item: Clone,
  Err: Clone,
{
  fn next(&mut self, value: Item) {
    *self.value.borrow_mut() = value.clone();
    self.subject.next(value);
  }

  #[inline]
  fn error(&mut self, err: Err) { self.subject.error(err) }

  #[inline]
  fn complete(&mut self) { self.subject.complete() }
}

impl<Item, Err> BehaviorSubject<Item, Err>
where
  Item: Clone + 'static,
  Err: Clone + 'static,
{
  /// View this subject as an [`Observable`] whose producer subscribes the
  /// downstream fan-out handle to the subject. The producer runs for the
  /// first downstream subscriber, so that subscriber receives the replay;
  /// later downstream subscribers join the shared broadcast.
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

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  #[test]
  fn replays_current_value_on_subscribe() {
    let subject: BehaviorSubject<&'static str> =
      BehaviorSubject::new("Alice");
    let values = Rc::new(RefCell::new(vec![]));

    let collected = values.clone();
    subject.subscribe(move |v| collected.borrow_mut().push(v));
    assert_eq!(*values.borrow(), vec!["Alice"]);

    subject.clone().next("Bob");
    assert_eq!(*values.borrow(), vec!["Alice", "Bob"]);
  }

  #[test]
  fn value_tracks_latest_push() {
    let mut subject: BehaviorSubject<i32> = BehaviorSubject::new(0);
    assert_eq!(subject.value(), 0);

    subject.next(5);
    assert_eq!(subject.value(), 5);

    subject.next(6);
    assert_eq!(subject.value(), 6);
  }

  #[test]
  fn late_subscriber_gets_current_not_history() {
    let subject: BehaviorSubject<i32> = BehaviorSubject::new(1);
    let early = Rc::new(RefCell::new(vec![]));
    let late = Rc::new(RefCell::new(vec![]));

    let collected = early.clone();
    subject.subscribe(move |v| collected.borrow_mut().push(v));

    subject.clone().next(2);

    let collected = late.clone();
    subject.subscribe(move |v| collected.borrow_mut().push(v));

    subject.clone().next(3);

    assert_eq!(*early.borrow(), vec![1, 2, 3]);
    assert_eq!(*late.borrow(), vec![2, 3]);
  }

  #[test]
  fn every_subscriber_is_replayed_to() {
    let subject: BehaviorSubject<i32> = BehaviorSubject::new(7);
    let first = Rc::new(RefCell::new(vec![]));
    let second = Rc::new(RefCell::new(vec![]));

    let collected = first.clone();
    subject.subscribe(move |v| collected.borrow_mut().push(v));
    let collected = second.clone();
    subject.subscribe(move |v| collected.borrow_mut().push(v));

    assert_eq!(*first.borrow(), vec![7]);
    assert_eq!(*second.borrow(), vec![7]);

    subject.clone().next(8);
    assert_eq!(*first.borrow(), vec![7, 8]);
    assert_eq!(*second.borrow(), vec![7, 8]);
  }

  #[test]
  fn unsubscribed_observer_stops_receiving() {
    let subject: BehaviorSubject<i32> = BehaviorSubject::new(0);
    let values = Rc::new(RefCell::new(vec![]));

    let collected = values.clone();
    let mut sub = subject.subscribe(move |v| collected.borrow_mut().push(v));

    subject.clone().next(1);
    sub.unsubscribe();
    subject.clone().next(2);

    assert_eq!(*values.borrow(), vec![0, 1]);
    // The retained value still advances without observers.
    assert_eq!(subject.value(), 2);
  }

  #[test]
  fn pipe_replays_through_the_chain() {
    let subject: BehaviorSubject<i32> = BehaviorSubject::new(1);
    let values = Rc::new(RefCell::new(vec![]));

    let collected = values.clone();
    subject
      .pipe(ops::map(|v: i32| v * 10))
      .subscribe(move |v| collected.borrow_mut().push(v));

    subject.clone().next(2);

    assert_eq!(*values.borrow(), vec![10, 20]);
  }

  #[test]
  fn error_is_forwarded_only_when_pushed() {
    let subject: BehaviorSubject<i32, &'static str> =
      BehaviorSubject::new(1);
    let errors = Rc::new(RefCell::new(vec![]));

    let collected = errors.clone();
    subject.subscribe_err(|_| {}, move |e| collected.borrow_mut().push(e));
    assert!(errors.borrow().is_empty());

    subject.clone().error("boom");
    assert_eq!(*errors.borrow(), vec!["boom"]);
  }
}
