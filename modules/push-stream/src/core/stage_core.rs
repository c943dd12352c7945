//! Flag and link state embedded in every stage.


use alloc::rc::{Rc, Weak};
use core::{
  cell::{Cell, RefCell},
  fmt,
};

use super::{DynStage, StageFlags, StageKind};

/// Flow-control flags and neighbour links shared by all stage kinds.
///
/// The downstream link is strong and the upstream link is weak, so a chain never forms a
/// reference cycle. Accessors hand out cloned handles; no borrow outlives the call, which keeps
/// re-entrant calls between neighbours safe.
pub struct StageCore<T> {
  kind:       StageKind,
  ended:      Cell<bool>,
  aborted:    Cell<bool>,
  paused:     Cell<bool>,
  upstream:   RefCell<Option<Weak<DynStage<T>>>>,
  downstream: RefCell<Option<Rc<DynStage<T>>>>,
}

impl<T> StageCore<T> {
  /// Creates an unlinked, running core.
  #[must_use]
  pub const fn new(kind: StageKind) -> Self {
    Self::with_paused(kind, false)
  }

  /// Creates an unlinked core that starts paused.
  #[must_use]
  pub const fn new_paused(kind: StageKind) -> Self {
    Self::with_paused(kind, true)
  }

  const fn with_paused(kind: StageKind, paused: bool) -> Self {
    Self {
      kind,
      ended: Cell::new(false),
      aborted: Cell::new(false),
      paused: Cell::new(paused),
      upstream: RefCell::new(None),
      downstream: RefCell::new(None),
    }
  }

  /// Returns the stage kind.
  #[must_use]
  pub const fn kind(&self) -> StageKind {
    self.kind
  }

  /// Returns `true` once the stage has ended.
  #[must_use]
  pub fn is_ended(&self) -> bool {
    self.ended.get()
  }

  /// Returns the reserved abort flag.
  #[must_use]
  pub fn is_aborted(&self) -> bool {
    self.aborted.get()
  }

  /// Returns the stage's own pause flag.
  #[must_use]
  pub fn is_paused(&self) -> bool {
    self.paused.get()
  }

  /// Updates the stage's own pause flag.
  pub fn set_paused(&self, paused: bool) {
    self.paused.set(paused);
  }

  /// Returns `true` while a downstream neighbour is attached.
  #[must_use]
  pub fn has_sink(&self) -> bool {
    self.downstream.borrow().is_some()
  }

  /// Marks the stage ended.
  ///
  /// Returns `true` only for the call that performed the transition.
  pub fn mark_ended(&self) -> bool {
    !self.ended.replace(true)
  }

  /// Returns the upstream neighbour when it is attached and still alive.
  #[must_use]
  pub fn upstream(&self) -> Option<Rc<DynStage<T>>> {
    self.upstream.borrow().as_ref().and_then(Weak::upgrade)
  }

  /// Returns the downstream neighbour, if attached.
  #[must_use]
  pub fn downstream(&self) -> Option<Rc<DynStage<T>>> {
    self.downstream.borrow().clone()
  }

  /// Returns a snapshot of the flags stored in this core.
  #[must_use]
  pub fn flags(&self) -> StageFlags {
    StageFlags {
      ended:    self.is_ended(),
      aborted:  self.is_aborted(),
      paused:   self.is_paused(),
      has_sink: self.has_sink(),
    }
  }

  pub(crate) fn attach_upstream(&self, upstream: Weak<DynStage<T>>) {
    *self.upstream.borrow_mut() = Some(upstream);
  }

  pub(crate) fn detach_upstream(&self) {
    *self.upstream.borrow_mut() = None;
  }

  pub(crate) fn attach_downstream(&self, downstream: Rc<DynStage<T>>) -> Option<Rc<DynStage<T>>> {
    self.downstream.borrow_mut().replace(downstream)
  }
}

impl<T> fmt::Debug for StageCore<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StageCore").field("kind", &self.kind).field("flags", &self.flags()).finish()
  }
}
