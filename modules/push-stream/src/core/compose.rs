//! Pairwise stage composition.


use alloc::rc::{Rc, Weak};
use core::ptr;

use tracing::{debug, warn};

use super::{DynStage, Stage, StageShared, TRACE_TARGET};

/// Links `upstream` to `downstream` and returns the downstream handle.
///
/// The downstream stage gets a weak back-reference, the upstream stage a strong forward link,
/// and then the upstream stage's [`Stage::pipe`] hook runs. Composing a stage that already has a
/// downstream neighbour replaces the old link and detaches the replaced stage from `upstream`.
pub fn compose<U, D>(upstream: &StageShared<U>, downstream: &StageShared<D>) -> StageShared<D>
where
  U: Stage + 'static,
  U::Item: 'static,
  D: Stage<Item = U::Item> + 'static, {
  let back = Rc::downgrade(upstream.as_rc());
  let back: Weak<DynStage<U::Item>> = back;
  downstream.core().attach_upstream(back);

  let forward: Rc<DynStage<U::Item>> = downstream.as_rc().clone();
  if let Some(previous) = upstream.core().attach_downstream(forward) {
    if !ptr::eq(previous.core(), downstream.core()) {
      previous.core().detach_upstream();
      warn!(
        target: TRACE_TARGET,
        upstream = ?upstream.kind(),
        replaced = ?previous.kind(),
        "composition replaced an existing downstream link"
      );
    }
  }

  debug!(target: TRACE_TARGET, upstream = ?upstream.kind(), downstream = ?downstream.kind(), "stages composed");
  upstream.pipe();
  downstream.clone()
}
