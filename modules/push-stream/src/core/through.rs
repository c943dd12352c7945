//! Transform stage.

#[cfg(test)]
mod tests;

use core::{cell::RefCell, fmt};

use tracing::trace;

use super::{ElementSize, Stage, StageCore, StageKind, TRACE_TARGET};

/// Relay stage applying a transform to every item in transit.
///
/// A through stage holds no data of its own. It starts paused so that nothing is pushed into it
/// before it has somewhere to send; composing it with a downstream neighbour adopts that
/// neighbour's pause state and, when running, resumes the upstream chain. A later pause of the
/// downstream neighbour is copied into the own flag, one hop only.
///
/// The [`Stage`] impl requires `T: ElementSize` because `write` reports the size of the original
/// item. Payloads without a natural measure implement [`ElementSize`] themselves.
pub struct Through<T, F> {
  core:      StageCore<T>,
  transform: RefCell<F>,
}

impl<T, F> Through<T, F>
where
  F: FnMut(T) -> T,
{
  /// Creates a paused transform stage.
  #[must_use]
  pub const fn new(transform: F) -> Self {
    Self { core: StageCore::new_paused(StageKind::Through), transform: RefCell::new(transform) }
  }
}

impl<T, F> Stage for Through<T, F>
where
  T: ElementSize,
  F: FnMut(T) -> T,
{
  type Item = T;

  fn core(&self) -> &StageCore<T> {
    &self.core
  }

  /// Forwards the transformed item and returns the size of the original one.
  fn write(&self, item: T) -> usize {
    if self.core.is_ended() {
      trace!(target: TRACE_TARGET, "write after end dropped by through");
      return 0;
    }
    let Some(downstream) = self.core.downstream() else {
      trace!(target: TRACE_TARGET, "write without sink dropped by through");
      return 0;
    };

    let size = item.element_size();
    let derived = {
      let mut transform = self.transform.borrow_mut();
      (*transform)(item)
    };
    downstream.write(derived);
    size
  }

  /// Clears the own pause and delegates to the upstream neighbour.
  fn resume(&self) -> bool {
    if self.core.is_ended() || !self.core.has_sink() {
      return false;
    }
    self.core.set_paused(false);
    self.core.upstream().is_some_and(|upstream| upstream.resume())
  }

  fn pipe(&self) {
    let Some(downstream) = self.core.downstream() else {
      return;
    };
    self.core.set_paused(downstream.is_paused());
    if !self.core.is_paused() {
      self.resume();
    }
  }

  /// Adopts the downstream neighbour's pause into the own flag without passing it further up.
  fn on_downstream_pause(&self) {
    self.core.set_paused(true);
  }
}

impl<T, F> fmt::Debug for Through<T, F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Through").field("core", &self.core).finish_non_exhaustive()
  }
}
