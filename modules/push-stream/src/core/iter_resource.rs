//! Iterator-backed readable resource.


use alloc::boxed::Box;

use async_trait::async_trait;

use super::{ReadOutcome, ReadableResource, StreamError};

/// Readable resource yielding the items of an iterator, then end-of-data.
#[derive(Debug)]
pub struct IterResource<I> {
  items: I,
}

impl<I: Iterator> IterResource<I> {
  /// Creates a resource over `items`.
  pub fn new<T>(items: T) -> Self
  where
    T: IntoIterator<IntoIter = I>, {
    Self { items: items.into_iter() }
  }
}

#[async_trait(?Send)]
impl<I: Iterator> ReadableResource for IterResource<I> {
  type Item = I::Item;

  async fn read_next(&mut self) -> Result<ReadOutcome<I::Item>, StreamError> {
    Ok(self.items.next().into())
  }
}
