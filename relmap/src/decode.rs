use crate::Error;
use alloc::string::String;
use arrayvec::ArrayString;

/// Decodes a textual cell reported by the driver back into a native value.
pub trait Decode: Default + Sized {
  /// Performs the conversion of a non-NULL cell.
  fn decode(cell: &str) -> crate::Result<Self>;

  /// Database NULL resets the target to its zero value.
  #[inline]
  fn decode_opt(cell: Option<&str>) -> crate::Result<Self> {
    match cell {
      None => Ok(Self::default()),
      Some(elem) => Self::decode(elem),
    }
  }
}

impl<T> Decode for Option<T>
where
  T: Decode,
{
  #[inline]
  fn decode(cell: &str) -> crate::Result<Self> {
    Ok(Some(T::decode(cell)?))
  }
}

macro_rules! impl_decode_parse {
  ($($ty:ty),+) => {
    $(
      impl Decode for $ty {
        #[inline]
        fn decode(cell: &str) -> crate::Result<Self> {
          Ok(cell.parse()?)
        }
      }
    )+
  };
}

impl_decode_parse!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl Decode for String {
  #[inline]
  fn decode(cell: &str) -> crate::Result<Self> {
    Ok(Self::from(cell))
  }
}

impl<const N: usize> Decode for ArrayString<N> {
  #[inline]
  fn decode(cell: &str) -> crate::Result<Self> {
    let mut end = N.min(cell.len());
    while !cell.is_char_boundary(end) {
      end = end.wrapping_sub(1);
    }
    let truncated = cell.get(..end).unwrap_or_default();
    Self::from(truncated).map_err(|_err| Error::CapacityOverflow)
  }
}
