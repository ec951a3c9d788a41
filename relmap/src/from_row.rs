use crate::{client::Results, decode::Decode, table::Table};
use alloc::string::String;
use arrayvec::ArrayString;

/// Marshals one or more columns of a result row into a native value, advancing `col` past
/// the consumed columns.
///
/// Implemented for scalars (one column), for [Table] types (one column per field, generated
/// by the [table!](crate::table) macro) and for tuples whose members are themselves
/// [FromRow], enabling joined/composite projections.
pub trait FromRow: Sized {
  /// Performs the conversion starting at `col` of `row`.
  fn from_row<R>(results: &R, row: usize, col: &mut usize) -> crate::Result<Self>
  where
    R: Results;
}

/// Marshals the row range `[col, col + T::FIELDS.len())` into a [Table] instance
/// field-by-field. Used by [table!](crate::table) generated [FromRow] implementations.
#[inline]
pub fn from_row_table<T, R>(results: &R, row: usize, col: &mut usize) -> crate::Result<T>
where
  T: Table,
  R: Results,
{
  let mut this = T::default();
  for idx in 0..T::FIELDS.len() {
    let cell = if results.is_null(row, *col) { None } else { Some(results.value(row, *col)) };
    this.decode_field(idx, cell)?;
    *col = col.wrapping_add(1);
  }
  Ok(this)
}

#[inline]
fn from_row_scalar<T, R>(results: &R, row: usize, col: &mut usize) -> crate::Result<T>
where
  T: Decode,
  R: Results,
{
  let cell = if results.is_null(row, *col) { None } else { Some(results.value(row, *col)) };
  let rslt = T::decode_opt(cell)?;
  *col = col.wrapping_add(1);
  Ok(rslt)
}

impl<T> FromRow for Option<T>
where
  T: Decode,
{
  #[inline]
  fn from_row<R>(results: &R, row: usize, col: &mut usize) -> crate::Result<Self>
  where
    R: Results,
  {
    from_row_scalar(results, row, col)
  }
}

macro_rules! impl_from_row_scalar {
  ($($ty:ty),+) => {
    $(
      impl FromRow for $ty {
        #[inline]
        fn from_row<R>(results: &R, row: usize, col: &mut usize) -> crate::Result<Self>
        where
          R: Results,
        {
          from_row_scalar(results, row, col)
        }
      }
    )+
  };
}

impl_from_row_scalar!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, String);

impl<const N: usize> FromRow for ArrayString<N> {
  #[inline]
  fn from_row<R>(results: &R, row: usize, col: &mut usize) -> crate::Result<Self>
  where
    R: Results,
  {
    from_row_scalar(results, row, col)
  }
}
