//! Stage contract, composition, and the built-in stage kinds.

/// Asynchronous source stage.
mod async_source;
/// Stage composition.
mod compose;
/// Item size measurement.
mod element_size;
/// Iterator-backed readable resource.
mod iter_resource;
/// Outcome of a single resource read.
mod read_outcome;
/// Readable resource contract.
mod readable_resource;
/// Scoped resource release.
mod resource_guard;
/// Sink stage.
mod sink;
/// In-memory source stage.
mod source;
/// Stream stage contract.
mod stage;
/// Shared flag and link state.
mod stage_core;
/// Flag snapshot.
mod stage_flags;
/// Stage kinds.
mod stage_kind;
/// Shared stage handle.
mod stage_shared;
/// Stream error definitions.
mod stream_error;
/// Transform stage.
mod through;

pub use async_source::AsyncSource;
pub use compose::compose;
pub use element_size::ElementSize;
pub use iter_resource::IterResource;
pub use read_outcome::ReadOutcome;
pub use readable_resource::ReadableResource;
pub use sink::Sink;
pub use source::Source;
pub use stage::Stage;
pub use stage_core::StageCore;
pub use stage_flags::StageFlags;
pub use stage_kind::StageKind;
pub use stage_shared::StageShared;
pub use stream_error::StreamError;
pub use through::Through;
use resource_guard::ResourceGuard;

/// Trait object for a stage carrying `T` items.
pub type DynStage<T> = dyn Stage<Item = T>;

/// Tracing target shared by every stage.
pub(crate) const TRACE_TARGET: &str = "push_stream";
