//! Source stage pulling items from a readable resource.


use core::{
  cell::{Cell, RefCell},
  fmt,
};

use tracing::{debug, warn};

use super::{ReadOutcome, ReadableResource, ResourceGuard, Stage, StageCore, StageKind, StreamError, TRACE_TARGET};

/// Origin stage obtaining each item through a suspending read.
///
/// A failed acquisition is absorbed: the stage is born ended and ends its downstream neighbour
/// as soon as it is composed. The synchronous [`Stage::resume`] only reports readiness; reads are
/// driven by awaiting [`AsyncSource::resume_async`] on a single-threaded executor.
pub struct AsyncSource<R: ReadableResource> {
  core:     StageCore<R::Item>,
  resource: RefCell<Option<R>>,
  reads:    Cell<usize>,
}

impl<R: ReadableResource> AsyncSource<R> {
  /// Creates a source from the outcome of acquiring its resource.
  pub fn new(acquired: Result<R, StreamError>) -> Self {
    let core = StageCore::new(StageKind::AsyncSource);
    let resource = match acquired {
      | Ok(resource) => Some(resource),
      | Err(error) => {
        warn!(target: TRACE_TARGET, %error, "resource acquisition failed, source starts ended");
        core.mark_ended();
        None
      },
    };
    Self { core, resource: RefCell::new(resource), reads: Cell::new(0) }
  }

  /// Creates a source over an already acquired resource.
  pub fn from_resource(resource: R) -> Self {
    Self::new(Ok(resource))
  }

  /// Returns the number of completed read operations.
  #[must_use]
  pub fn reads_issued(&self) -> usize {
    self.reads.get()
  }

  /// Returns `true` while the stage still holds its resource.
  #[must_use]
  pub fn holds_resource(&self) -> bool {
    self.resource.borrow().is_some()
  }

  /// Runs the pull loop.
  ///
  /// While the downstream neighbour is not paused, awaits one read and writes the item. The loop
  /// stops at end-of-data, on a read failure, when the neighbour pauses, or when the stage is ended
  /// through [`Stage::end`]; afterwards the resource is released and end-of-stream is propagated.
  ///
  /// Returns `false` without reading when the stage has ended, has no downstream neighbour, or
  /// another loop currently holds the resource.
  pub async fn resume_async(&self) -> bool {
    if self.core.is_ended() {
      return false;
    }
    let Some(downstream) = self.core.downstream() else {
      return false;
    };
    let taken = self.resource.borrow_mut().take();
    let Some(resource) = taken else {
      return false;
    };

    let mut guard = ResourceGuard::new(resource);
    let mut delivered = 0_usize;
    while !self.core.is_ended() && !downstream.is_paused() {
      let Some(resource) = guard.resource_mut() else {
        break;
      };
      let outcome = resource.read_next().await;
      self.reads.set(self.reads.get() + 1);
      match outcome {
        | Ok(ReadOutcome::Item(item)) => {
          delivered += 1;
          downstream.write(item);
        },
        | Ok(ReadOutcome::EndOfData) => break,
        | Err(error) => {
          warn!(target: TRACE_TARGET, %error, "read failed, treating as end of data");
          break;
        },
      }
    }
    guard.release();

    debug!(target: TRACE_TARGET, reads = self.reads.get(), delivered, "async source finished");
    if self.core.mark_ended() {
      downstream.end();
    }
    true
  }

  fn release_held(&self) {
    let held = self.resource.borrow_mut().take();
    if let Some(resource) = held {
      debug!(target: TRACE_TARGET, "async source released an unread resource");
      resource.release();
    }
  }
}

impl<R: ReadableResource> Stage for AsyncSource<R> {
  type Item = R::Item;

  fn core(&self) -> &StageCore<R::Item> {
    &self.core
  }

  /// Reports whether [`AsyncSource::resume_async`] would read; never reads itself.
  fn resume(&self) -> bool {
    !self.core.is_ended() && self.core.has_sink() && self.holds_resource()
  }

  /// Releases the resource and propagates end-of-stream.
  fn end(&self) -> bool {
    if !self.core.mark_ended() {
      return false;
    }
    self.release_held();
    if let Some(downstream) = self.core.downstream() {
      downstream.end();
    }
    true
  }

  /// Ends the new downstream neighbour when the resource was never acquired.
  fn pipe(&self) {
    if !self.core.is_ended() {
      return;
    }
    if let Some(downstream) = self.core.downstream() {
      downstream.end();
    }
  }
}

impl<R: ReadableResource> Drop for AsyncSource<R> {
  fn drop(&mut self) {
    self.release_held();
  }
}

impl<R: ReadableResource> fmt::Debug for AsyncSource<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AsyncSource")
      .field("core", &self.core)
      .field("reads", &self.reads_issued())
      .field("holds_resource", &self.holds_resource())
      .finish()
  }
}
