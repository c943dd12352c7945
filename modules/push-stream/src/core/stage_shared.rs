//! Shared stage handle.


use alloc::rc::Rc;
use core::{fmt, ops::Deref};

use super::{DynStage, Stage, compose};

/// Shared ownership handle for a stage, backed by `alloc::rc::Rc`.
///
/// Call sites own stages through this handle; composition clones it into neighbour links and
/// never transfers ownership. The handle is not thread-safe, matching the single-threaded
/// delivery model.
pub struct StageShared<S: ?Sized>(Rc<S>);

impl<S> StageShared<S> {
  /// Wraps a stage in a new shared handle.
  pub fn new(stage: S) -> Self {
    Self(Rc::new(stage))
  }
}

impl<S: ?Sized> StageShared<S> {
  /// Consumes the handle and returns the inner `Rc`.
  #[must_use]
  pub fn into_rc(self) -> Rc<S> {
    self.0
  }

  /// Returns `true` when both handles point at the same stage.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }

  pub(crate) const fn as_rc(&self) -> &Rc<S> {
    &self.0
  }
}

impl<S> StageShared<S>
where
  S: Stage + 'static,
  S::Item: 'static,
{
  /// Composes this stage with `downstream` and returns the downstream handle.
  ///
  /// Enables left-to-right chaining: `source.pipe_to(&through).pipe_to(&sink)`.
  pub fn pipe_to<D>(&self, downstream: &StageShared<D>) -> StageShared<D>
  where
    D: Stage<Item = S::Item> + 'static, {
    compose(self, downstream)
  }

  /// Erases the concrete stage type.
  #[must_use]
  pub fn into_dyn(self) -> StageShared<DynStage<S::Item>> {
    StageShared(self.0)
  }
}

impl<S: ?Sized> Clone for StageShared<S> {
  fn clone(&self) -> Self {
    Self(Rc::clone(&self.0))
  }
}

impl<S: ?Sized> Deref for StageShared<S> {
  type Target = S;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<S: ?Sized + fmt::Debug> fmt::Debug for StageShared<S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("StageShared").field(&&*self.0).finish()
  }
}
