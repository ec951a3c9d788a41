use core::fmt::{Debug, Display, Formatter};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // External - Std
  //
  Fmt(core::fmt::Error),
  ParseFloatError(core::num::ParseFloatError),
  ParseIntError(core::num::ParseIntError),

  // Generic
  //
  /// An identifier or a fixed-size buffer received more characters than its declared capacity.
  CapacityOverflow,
  /// The operation requires an established session.
  ClosedConnection,
  /// The number of placeholder markers of a templated query differs from the number of
  /// supplied arguments.
  MismatchedPlaceholders {
    expected: usize,
    received: usize,
  },
  /// `PrimaryKey` and `AutoKey` attributes can not be applied to the same table.
  MultipleKeyAttributes,
  /// An INSERT statement would reference zero fields.
  NoFieldsToInsert,
  /// A field index is out of the bounds declared by [crate::Table::FIELDS].
  UnknownFieldIndex(usize),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<core::fmt::Error> for Error {
  #[inline]
  fn from(from: core::fmt::Error) -> Self {
    Self::Fmt(from)
  }
}

impl From<core::num::ParseFloatError> for Error {
  #[inline]
  fn from(from: core::num::ParseFloatError) -> Self {
    Self::ParseFloatError(from)
  }
}

impl From<core::num::ParseIntError> for Error {
  #[inline]
  fn from(from: core::num::ParseIntError) -> Self {
    Self::ParseIntError(from)
  }
}
