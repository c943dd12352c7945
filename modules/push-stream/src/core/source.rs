//! In-memory source stage.


use alloc::collections::VecDeque;
use core::{
  cell::{Cell, RefCell},
  fmt,
};

use tracing::{debug, trace};

use super::{Stage, StageCore, StageKind, TRACE_TARGET};

/// Origin stage pushing a fixed, finite sequence.
///
/// Delivery is a synchronous run-to-completion push: while the downstream neighbour is not paused
/// the whole remaining sequence is written in one [`Stage::resume`] call.
pub struct Source<T> {
  core:    StageCore<T>,
  items:   RefCell<VecDeque<T>>,
  emitted: Cell<usize>,
}

impl<T> Source<T> {
  /// Creates a source holding `items` in order.
  pub fn new<I>(items: I) -> Self
  where
    I: IntoIterator<Item = T>, {
    Self {
      core:    StageCore::new(StageKind::Source),
      items:   RefCell::new(items.into_iter().collect()),
      emitted: Cell::new(0),
    }
  }

  /// Returns the number of items pushed so far.
  #[must_use]
  pub fn emitted(&self) -> usize {
    self.emitted.get()
  }

  /// Returns the number of items not yet pushed.
  #[must_use]
  pub fn remaining(&self) -> usize {
    self.items.borrow().len()
  }

  fn next_item(&self) -> Option<T> {
    let item = self.items.borrow_mut().pop_front()?;
    self.emitted.set(self.emitted.get() + 1);
    Some(item)
  }
}

impl<T> FromIterator<T> for Source<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::new(iter)
  }
}

impl<T> Stage for Source<T> {
  type Item = T;

  fn core(&self) -> &StageCore<T> {
    &self.core
  }

  fn resume(&self) -> bool {
    if self.core.is_ended() {
      return false;
    }
    let Some(downstream) = self.core.downstream() else {
      return false;
    };

    while !downstream.is_paused() {
      let Some(item) = self.next_item() else {
        break;
      };
      trace!(target: TRACE_TARGET, index = self.emitted.get() - 1, "source pushed item");
      downstream.write(item);
    }

    if self.remaining() == 0 && self.core.mark_ended() {
      debug!(target: TRACE_TARGET, emitted = self.emitted.get(), "source exhausted");
      downstream.end();
    }
    true
  }

  fn pipe(&self) {
    self.resume();
  }
}

impl<T> fmt::Debug for Source<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Source")
      .field("core", &self.core)
      .field("emitted", &self.emitted())
      .field("remaining", &self.remaining())
      .finish()
  }
}
