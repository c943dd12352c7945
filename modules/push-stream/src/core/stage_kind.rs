/// Built-in stage kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
  /// In-memory source that pushes a fixed sequence.
  Source,
  /// Terminal stage that accumulates items.
  Sink,
  /// Transform stage relaying items downstream.
  Through,
  /// Source that pulls each item from a readable resource.
  AsyncSource,
  /// User-defined stage.
  Custom,
}
