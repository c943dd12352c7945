//! Scoped ownership of a readable resource.


use super::ReadableResource;

/// Holds a resource for the duration of a read loop and releases it exactly once.
///
/// Release happens either through [`ResourceGuard::release`] or, when the loop future is dropped
/// mid-read, on drop.
pub(crate) struct ResourceGuard<R: ReadableResource> {
  resource: Option<R>,
}

impl<R: ReadableResource> ResourceGuard<R> {
  pub(crate) const fn new(resource: R) -> Self {
    Self { resource: Some(resource) }
  }

  pub(crate) fn resource_mut(&mut self) -> Option<&mut R> {
    self.resource.as_mut()
  }

  pub(crate) fn release(mut self) {
    self.release_held();
  }

  fn release_held(&mut self) {
    if let Some(resource) = self.resource.take() {
      resource.release();
    }
  }
}

impl<R: ReadableResource> Drop for ResourceGuard<R> {
  fn drop(&mut self) {
    self.release_held();
  }
}
