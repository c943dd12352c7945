/// Result of a single successful read against a readable resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome<T> {
  /// The next item.
  Item(T),
  /// No more data will be produced.
  EndOfData,
}

impl<T> ReadOutcome<T> {
  /// Returns `true` for [`ReadOutcome::EndOfData`].
  #[must_use]
  pub const fn is_end_of_data(&self) -> bool {
    matches!(self, Self::EndOfData)
  }
}

impl<T> From<Option<T>> for ReadOutcome<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      | Some(item) => Self::Item(item),
      | None => Self::EndOfData,
    }
  }
}
