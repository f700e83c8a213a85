//! Emit only the values of a stream that pass a predicate test.

use crate::{
  observable::Observable,
  observer::Observer,
  subject::Subject,
  subscribable::Subscribable,
};

/// Create an operator that forwards a value downstream only when
/// `predicate` returns `true` for it. Dropped values produce no signal
/// at all; errors and completion pass through untouched.
///
/// Like [`map`](crate::ops::map), a panic inside the predicate is not
/// caught and unwinds through the emitter's call stack.
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
///   for v in 0..10 {
///     emitter.next(v);
///   }
/// })
/// .pipe(ops::filter(|v: &i32| v % 2 == 0))
/// .subscribe(move |v| collected.borrow_mut().push(v));
///
/// assert_eq!(*values.borrow(), vec![0, 2, 4, 6, 8]);
/// ```
pub fn filter<Item, Err, F>(
  mut predicate: F,
) -> impl FnOnce(Observable<Item, Err>) -> Observable<Item, Err> + 'static
where
  F: FnMut(&Item) -> bool + 'static,
  Item: Clone + 'static,
  Err: Clone + 'static,
{
  move |source| {
    Observable::new(move |downstream: Subject<Item, Err>| {
      let mut on_next = downstream.clone();
      let mut on_error = downstream.clone();
      let mut on_complete = downstream;
      source.subscribe_all(
        move |value| {
          if predicate(&value) {
            on_next.next(value);
          }
        },
        move |err| on_error.error(err),
        move || on_complete.complete(),
      );
    })
  }
}
