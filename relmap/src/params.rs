use alloc::{string::String, vec::Vec};
use core::fmt::{Arguments, Write};

/// Parameter values encoded in the driver's textual wire representation. `None` is the
/// NULL sentinel.
#[derive(Debug, Default, PartialEq)]
pub struct Params {
  values: Vec<Option<Vec<u8>>>,
}

impl Params {
  /// Creates an empty instance.
  #[inline]
  pub const fn new() -> Self {
    Self { values: Vec::new() }
  }

  /// Removes all values.
  #[inline]
  pub fn clear(&mut self) {
    self.values.clear();
  }

  /// Whether no value has been pushed.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Number of pushed values, NULL sentinels included.
  #[inline]
  pub fn len(&self) -> usize {
    self.values.len()
  }

  /// Pushes a value copied verbatim.
  #[inline]
  pub fn push_bytes(&mut self, bytes: &[u8]) {
    let mut value = Vec::new();
    value.extend_from_slice(bytes);
    self.values.push(Some(value));
  }

  /// Pushes a value built from its textual representation.
  #[inline]
  pub fn push_fmt(&mut self, args: Arguments<'_>) -> crate::Result<()> {
    let mut value = String::new();
    value.write_fmt(args)?;
    self.values.push(Some(value.into_bytes()));
    Ok(())
  }

  /// Pushes the NULL sentinel.
  #[inline]
  pub fn push_null(&mut self) {
    self.values.push(None);
  }

  /// All pushed values in insertion order.
  #[inline]
  pub fn values(&self) -> &[Option<Vec<u8>>] {
    &self.values
  }
}
