//! Transform every value of a stream with a projection function.

use crate::{
  observable::Observable,
  observer::Observer,
  subject::Subject,
  subscribable::Subscribable,
};

/// Create an operator that calls `project` on each source value and
/// emits the result downstream. Errors and completion pass through
/// untouched.
///
/// `project` should be a pure function of its argument. A panic inside
/// it is not caught; it unwinds through the call stack of whoever
/// emitted the value.
///
/// # Example
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use rivulet::prelude::*;
///
/// let values = Rc::new(RefCell::new(vec![]));
/// let collected = values.clone();
///
/// Observable::<i32>::new(|mut emitter| {
///   emitter.next(100);
///   emitter.complete();
/// })
/// .pipe(ops::map(|v: i32| v * 2))
/// .subscribe(move |v| collected.borrow_mut().push(v));
///
/// assert_eq!(*values.borrow(), vec![200]);
/// ```
pub fn map<Item, Out, Err, F>(
  mut project: F,
) -> impl FnOnce(Observable<Item, Err>) -> Observable<Out, Err> + 'static
where
  F: FnMut(Item) -> Out + 'static,
  Item: 'static,
  Out: Clone + 'static,
  Err: Clone + 'static,
{
  move |source| {
    Observable::new(move |downstream: Subject<Out, Err>| {
      let mut on_next = downstream.clone();
      let mut on_error = downstream.clone();
      let mut on_complete = downstream;
      source.subscribe_all(
        move |value| on_next.next(project(value)),
        move |err| on_error.error(err),
        move || on_complete.complete(),
      );
    })
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  fn emit_range(range: std::ops::RangeInclusive<i32>) -> Observable<i32> {
    Observable::new(move |mut emitter| {
      for v in range {
        emitter.next(v);
      }
      emitter.complete();
    })
  }

  #[test]
  fn projects_each_value() {
    let values = Rc::new(RefCell::new(vec![]));
    let collected = values.clone();

    emit_range(1..=3)
      .pipe(ops::map(|v: i32| v * 2))
      .subscribe(move |v| collected.borrow_mut().push(v));

    assert_eq!(*values.borrow(), vec![2, 4, 6]);
  }

  #[test]
  fn maps_between_types() {
    let values = Rc::new(RefCell::new(vec![]));
    let collected = values.clone();

    emit_range(1..=3)
      .pipe(ops::map(|v: i32| format!("#{v}")))
      .subscribe(move |v| collected.borrow_mut().push(v));

    assert_eq!(*values.borrow(), vec!["#1", "#2", "#3"]);
  }

  #[test]
  fn forwards_error_untouched() {
    let source = Observable::<i32, &'static str>::new(|mut emitter| {
      emitter.next(1);
      emitter.error("broken");
    });

    let values = Rc::new(RefCell::new(vec![]));
    let errors = Rc::new(RefCell::new(vec![]));

    let v = values.clone();
    let e = errors.clone();
    source
      .pipe(ops::map(|v: i32| v + 1))
      .subscribe_err(
        move |value| v.borrow_mut().push(value),
        move |err| e.borrow_mut().push(err),
      );

    assert_eq!(*values.borrow(), vec![2]);
    assert_eq!(*errors.borrow(), vec!["broken"]);
  }

  #[test]
  fn forwards_completion() {
    let completed = Rc::new(RefCell::new(false));
    let c = completed.clone();

    emit_range(1..=1)
      .pipe(ops::map(|v: i32| v))
      .subscribe_complete(|_| {}, move || *c.borrow_mut() = true);

    assert!(*completed.borrow());
  }

  #[test]
  fn composes_with_itself() {
    let values = Rc::new(RefCell::new(vec![]));
    let collected = values.clone();

    emit_range(1..=2)
      .pipe2(ops::map(|v: i32| v + 1), ops::map(|v: i32| v * 10))
      .subscribe(move |v| collected.borrow_mut().push(v));

    assert_eq!(*values.borrow(), vec![20, 30]);
  }

  #[test]
  #[should_panic]
  fn projection_panic_unwinds_to_emitter() {
    emit_range(1..=1)
      .pipe(ops::map(|_: i32| -> i32 { panic!("projection failed") }))
      .subscribe(|_| {});
  }
}
