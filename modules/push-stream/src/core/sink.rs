//! Terminal sink stage.


use alloc::vec::Vec;
use core::{cell::RefCell, fmt};

use tracing::{debug, trace};

use super::{ElementSize, Stage, StageCore, StageKind, TRACE_TARGET};

/// Terminal stage accumulating every item in arrival order.
///
/// `write` returns the item's [`ElementSize`], so the [`Stage`] impl needs `T: ElementSize`.
/// Custom payloads implement the trait to report their own measure.
pub struct Sink<T> {
  core:  StageCore<T>,
  items: RefCell<Vec<T>>,
}

impl<T> Sink<T> {
  /// Creates an empty sink.
  #[must_use]
  pub const fn new() -> Self {
    Self { core: StageCore::new(StageKind::Sink), items: RefCell::new(Vec::new()) }
  }

  /// Returns a copy of the accumulated items.
  #[must_use]
  pub fn items(&self) -> Vec<T>
  where
    T: Clone, {
    self.items.borrow().clone()
  }

  /// Moves the accumulated items out of the sink.
  #[must_use]
  pub fn take_items(&self) -> Vec<T> {
    core::mem::take(&mut *self.items.borrow_mut())
  }

  /// Returns the number of accumulated items.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.borrow().len()
  }

  /// Returns `true` when nothing has been accumulated.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.borrow().is_empty()
  }
}

impl<T> Default for Sink<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: ElementSize> Stage for Sink<T> {
  type Item = T;

  fn core(&self) -> &StageCore<T> {
    &self.core
  }

  fn write(&self, item: T) -> usize {
    if self.core.is_ended() {
      trace!(target: TRACE_TARGET, "write after end dropped by sink");
      return 0;
    }
    let size = item.element_size();
    self.items.borrow_mut().push(item);
    size
  }

  /// Clears the sink's pause and asks the upstream neighbour to push again.
  fn resume(&self) -> bool {
    if self.core.is_ended() {
      return false;
    }
    self.core.set_paused(false);
    self.core.upstream().is_some_and(|upstream| upstream.resume())
  }

  fn end(&self) -> bool {
    if !self.core.mark_ended() {
      return false;
    }
    debug!(target: TRACE_TARGET, received = self.len(), "sink ended");
    true
  }
}

impl<T> fmt::Debug for Sink<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Sink").field("core", &self.core).field("len", &self.len()).finish()
  }
}
