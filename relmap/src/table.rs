use crate::{params::Params, sql_ty::SqlTy};
use alloc::string::String;

/// Compile-time reflection over a record type: ordered field metadata plus type-dispatched
/// per-field marshaling. Usually implemented through the [table!](crate::table) macro.
pub trait Table: Default {
  /// Field metadata in declaration order.
  const FIELDS: &'static [TableField];
  /// Table name specified in the database.
  const TABLE_NAME: &'static str;

  /// Overwrites the field at `idx` with the decoded `cell`. `None` resets the field to its
  /// zero value.
  fn decode_field(&mut self, idx: usize, cell: Option<&str>) -> crate::Result<()>;

  /// Appends the wire representation of the field at `idx` to `params`.
  fn encode_field(&self, idx: usize, params: &mut Params) -> crate::Result<()>;

  /// Writes the field at `idx` as an inline SQL literal.
  fn write_field_literal(&self, idx: usize, buffer_cmd: &mut String) -> crate::Result<()>;
}

/// Table field name and its associated column type.
#[derive(Debug, Eq, PartialEq)]
pub struct TableField {
  name: &'static str,
  ty: SqlTy,
}

impl TableField {
  /// Creates a new instance from the table field name and its column type.
  #[inline]
  pub const fn new(name: &'static str, ty: SqlTy) -> Self {
    Self { name, ty }
  }

  /// Table field name.
  #[inline]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Base column type.
  #[inline]
  pub const fn ty(&self) -> SqlTy {
    self.ty
  }
}
