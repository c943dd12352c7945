//! Item size measurement used as the count returned by `write`.


use alloc::{boxed::Box, string::String, vec::Vec};

/// Measures the work represented by a single stream item.
pub trait ElementSize {
  /// Returns the size of the item: byte length for text, element count for sequences.
  fn element_size(&self) -> usize;
}

impl ElementSize for String {
  fn element_size(&self) -> usize {
    self.len()
  }
}

impl ElementSize for &str {
  fn element_size(&self) -> usize {
    self.len()
  }
}

impl ElementSize for Box<str> {
  fn element_size(&self) -> usize {
    self.len()
  }
}

impl<U> ElementSize for Vec<U> {
  fn element_size(&self) -> usize {
    self.len()
  }
}

impl<U> ElementSize for &[U] {
  fn element_size(&self) -> usize {
    self.len()
  }
}

macro_rules! impl_element_size_for_primitive {
  ($($ty:ty),* $(,)?) => {
    $(
      impl ElementSize for $ty {
        fn element_size(&self) -> usize {
          core::mem::size_of::<$ty>()
        }
      }
    )*
  };
}

impl_element_size_for_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char);
