/// Snapshot of a stage's flow-control flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageFlags {
  /// The stage has ended. Never cleared once set.
  pub ended:    bool,
  /// Reserved for abnormal termination; no built-in stage sets it.
  pub aborted:  bool,
  /// The stage asks its upstream neighbour to hold back.
  pub paused:   bool,
  /// A downstream neighbour is attached.
  pub has_sink: bool,
}
