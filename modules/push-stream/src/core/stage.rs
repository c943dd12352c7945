//! Stream stage contract.


use tracing::trace;

use super::{StageCore, StageFlags, StageKind, TRACE_TARGET};

/// Capability set implemented by every pipeline stage.
///
/// Operations are total: they report work through counts and flags and never fail. A stage
/// pushes data downstream with [`Stage::write`], consults only its adjacent downstream
/// neighbour's pause flag, and propagates end-of-stream downstream with [`Stage::end`].
/// [`Stage::is_paused`] reports the stage's own flag and never looks further down the chain.
pub trait Stage {
  /// Item type flowing through the stage.
  type Item;

  /// Returns the flag and link state of the stage.
  fn core(&self) -> &StageCore<Self::Item>;

  /// Accepts one item and returns the work done, or `0` when the write is a no-op.
  ///
  /// The default drops the item.
  fn write(&self, item: Self::Item) -> usize {
    drop(item);
    trace!(target: TRACE_TARGET, kind = ?self.kind(), "write ignored by stage");
    0
  }

  /// Attempts to (re)start pulling data through the stage.
  ///
  /// Returns `false` when nothing can flow: no downstream neighbour, or the stage has ended.
  fn resume(&self) -> bool {
    let core = self.core();
    core.has_sink() && !core.is_ended()
  }

  /// Marks the stage ended and propagates end-of-stream downstream.
  ///
  /// Returns `true` for the call that ended the stage; repeated calls return `false` and do not
  /// propagate again.
  fn end(&self) -> bool {
    let core = self.core();
    if !core.mark_ended() {
      return false;
    }
    if let Some(downstream) = core.downstream() {
      downstream.end();
    }
    true
  }

  /// Hook invoked on the upstream stage right after composition.
  fn pipe(&self) {}

  /// Asks the upstream neighbour to hold back before its next item.
  ///
  /// Sets the own flag and reports the pause to the upstream neighbour only; stages further up
  /// are never touched.
  fn pause(&self) {
    let core = self.core();
    core.set_paused(true);
    if let Some(upstream) = core.upstream() {
      upstream.on_downstream_pause();
    }
  }

  /// Called by the downstream neighbour when it pauses.
  ///
  /// The default ignores the notification: origin stages read the neighbour's flag directly.
  fn on_downstream_pause(&self) {}

  /// Returns the stage's own pause flag, as observed by the upstream neighbour.
  fn is_paused(&self) -> bool {
    self.core().is_paused()
  }

  /// Returns `true` once the stage has ended.
  fn is_ended(&self) -> bool {
    self.core().is_ended()
  }

  /// Returns the reserved abort flag.
  fn is_aborted(&self) -> bool {
    self.core().is_aborted()
  }

  /// Returns `true` while a downstream neighbour is attached.
  fn has_sink(&self) -> bool {
    self.core().has_sink()
  }

  /// Returns the stage kind.
  fn kind(&self) -> StageKind {
    self.core().kind()
  }

  /// Returns a snapshot of the stage's flags as observed by its neighbours.
  fn flags(&self) -> StageFlags {
    StageFlags {
      ended:    self.is_ended(),
      aborted:  self.is_aborted(),
      paused:   self.is_paused(),
      has_sink: self.has_sink(),
    }
  }
}
