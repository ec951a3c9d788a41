use alloc::string::String;
use arrayvec::ArrayString;
use core::fmt::Write;

/// Base column type of the PostgreSQL dialect.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SqlTy {
  /// `bigint`
  BigInt,
  /// `char`
  Char,
  /// `double precision`
  DoublePrecision,
  /// `integer`
  Integer,
  /// `real`
  Real,
  /// `smallint`
  SmallInt,
  /// `text`
  Text,
  /// `varchar(N)`
  Varchar(u32),
}

impl SqlTy {
  /// Writes the dialect's type name.
  #[inline]
  pub fn write(&self, buffer_cmd: &mut String) -> crate::Result<()> {
    match self {
      Self::BigInt => buffer_cmd.push_str("bigint"),
      Self::Char => buffer_cmd.push_str("char"),
      Self::DoublePrecision => buffer_cmd.push_str("double precision"),
      Self::Integer => buffer_cmd.push_str("integer"),
      Self::Real => buffer_cmd.push_str("real"),
      Self::SmallInt => buffer_cmd.push_str("smallint"),
      Self::Text => buffer_cmd.push_str("text"),
      Self::Varchar(len) => buffer_cmd.write_fmt(format_args!("varchar({len})"))?,
    }
    Ok(())
  }
}

/// Associates a field type with its base column type. Types without an implementation can
/// not be used as table fields.
pub trait SqlDecl {
  /// Base column type.
  const TY: SqlTy;
}

macro_rules! impl_sql_decl {
  ($($ty:ty => $sql_ty:expr),+ $(,)?) => {
    $(
      impl SqlDecl for $ty {
        const TY: SqlTy = $sql_ty;
      }
    )+
  };
}

impl_sql_decl!(
  i8 => SqlTy::Char,
  u8 => SqlTy::Char,
  i16 => SqlTy::SmallInt,
  u16 => SqlTy::SmallInt,
  i32 => SqlTy::Integer,
  u32 => SqlTy::Integer,
  i64 => SqlTy::BigInt,
  u64 => SqlTy::BigInt,
  f32 => SqlTy::Real,
  f64 => SqlTy::DoublePrecision,
  String => SqlTy::Text,
);

impl<T> SqlDecl for Option<T>
where
  T: SqlDecl,
{
  const TY: SqlTy = T::TY;
}

impl<const N: usize> SqlDecl for ArrayString<N> {
  const TY: SqlTy = SqlTy::Varchar(N as u32);
}
