use crate::params::Params;
use alloc::string::String;
use arrayvec::ArrayString;
use core::fmt::Write;

/// Encodes a type into the textual wire representation expected by the driver.
pub trait Encode {
  /// Appends the wire representation to `params`.
  fn encode(&self, params: &mut Params) -> crate::Result<()>;

  /// In rust terms, is the element `Option::None`?
  #[inline]
  fn is_null(&self) -> bool {
    false
  }

  /// Writes the value as an inline SQL literal, used when building WHERE conditions.
  fn write_literal(&self, buffer_cmd: &mut String) -> crate::Result<()>;
}

impl<T> Encode for &T
where
  T: Encode,
{
  #[inline]
  fn encode(&self, params: &mut Params) -> crate::Result<()> {
    (**self).encode(params)
  }

  #[inline]
  fn is_null(&self) -> bool {
    (**self).is_null()
  }

  #[inline]
  fn write_literal(&self, buffer_cmd: &mut String) -> crate::Result<()> {
    (**self).write_literal(buffer_cmd)
  }
}

impl Encode for &dyn Encode {
  #[inline]
  fn encode(&self, params: &mut Params) -> crate::Result<()> {
    (**self).encode(params)
  }

  #[inline]
  fn is_null(&self) -> bool {
    (**self).is_null()
  }

  #[inline]
  fn write_literal(&self, buffer_cmd: &mut String) -> crate::Result<()> {
    (**self).write_literal(buffer_cmd)
  }
}

impl<T> Encode for Option<T>
where
  T: Encode,
{
  #[inline]
  fn encode(&self, params: &mut Params) -> crate::Result<()> {
    match self {
      None => {
        params.push_null();
        Ok(())
      }
      Some(elem) => elem.encode(params),
    }
  }

  #[inline]
  fn is_null(&self) -> bool {
    self.is_none()
  }

  #[inline]
  fn write_literal(&self, buffer_cmd: &mut String) -> crate::Result<()> {
    match self {
      None => {
        buffer_cmd.push_str("NULL");
        Ok(())
      }
      Some(elem) => elem.write_literal(buffer_cmd),
    }
  }
}

macro_rules! impl_encode_integer {
  ($($ty:ty),+) => {
    $(
      impl Encode for $ty {
        #[inline]
        fn encode(&self, params: &mut Params) -> crate::Result<()> {
          params.push_fmt(format_args!("{self}"))
        }

        #[inline]
        fn write_literal(&self, buffer_cmd: &mut String) -> crate::Result<()> {
          buffer_cmd.write_fmt(format_args!("{self}"))?;
          Ok(())
        }
      }
    )+
  };
}

impl_encode_integer!(i8, u8, i16, u16, i32, u32, i64, u64);

macro_rules! impl_encode_float {
  ($($ty:ty),+) => {
    $(
      impl Encode for $ty {
        #[inline]
        fn encode(&self, params: &mut Params) -> crate::Result<()> {
          params.push_fmt(format_args!("{self:.6}"))
        }

        #[inline]
        fn write_literal(&self, buffer_cmd: &mut String) -> crate::Result<()> {
          buffer_cmd.write_fmt(format_args!("{self:.6}"))?;
          Ok(())
        }
      }
    )+
  };
}

impl_encode_float!(f32, f64);

impl Encode for &str {
  #[inline]
  fn encode(&self, params: &mut Params) -> crate::Result<()> {
    params.push_bytes(self.as_bytes());
    Ok(())
  }

  #[inline]
  fn write_literal(&self, buffer_cmd: &mut String) -> crate::Result<()> {
    buffer_cmd.push('\'');
    for c in self.chars() {
      if c == '\'' {
        buffer_cmd.push('\'');
      }
      buffer_cmd.push(c);
    }
    buffer_cmd.push('\'');
    Ok(())
  }
}

impl Encode for String {
  #[inline]
  fn encode(&self, params: &mut Params) -> crate::Result<()> {
    self.as_str().encode(params)
  }

  #[inline]
  fn write_literal(&self, buffer_cmd: &mut String) -> crate::Result<()> {
    self.as_str().write_literal(buffer_cmd)
  }
}

impl<const N: usize> Encode for ArrayString<N> {
  #[inline]
  fn encode(&self, params: &mut Params) -> crate::Result<()> {
    self.as_str().encode(params)
  }

  #[inline]
  fn write_literal(&self, buffer_cmd: &mut String) -> crate::Result<()> {
    self.as_str().write_literal(buffer_cmd)
  }
}
