use alloc::boxed::Box;

use async_trait::async_trait;

use super::{ReadOutcome, StreamError};

/// External resource read one item at a time by an [`AsyncSource`](super::AsyncSource).
///
/// Acquisition is the implementor's constructor. Each read is a single suspension point and the
/// owning stage never issues two reads concurrently.
#[async_trait(?Send)]
pub trait ReadableResource {
  /// Item produced by each read.
  type Item;

  /// Fetches the next item or reports end-of-data.
  ///
  /// # Errors
  ///
  /// Returns a [`StreamError`] when the read fails; the owning stage treats it as end-of-data.
  async fn read_next(&mut self) -> Result<ReadOutcome<Self::Item>, StreamError>;

  /// Releases the resource. Called exactly once by the owning stage.
  fn release(self)
  where
    Self: Sized, {
  }
}
