macro_rules! _debug {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::debug!($($tt)+);
  };
}

/// Declares a record type alongside the reflection implementations required by
/// [Mapper](crate::Mapper) operations.
///
/// Fields are enumerated in declaration order and every field type must implement
/// [Encode](crate::Encode), [Decode](crate::Decode) and [SqlDecl](crate::SqlDecl).
///
/// ```rust
/// relmap::table! {
///   /// System account.
///   pub struct User("user") {
///     id: i32,
///     name: String,
///   }
/// }
/// ```
#[macro_export]
macro_rules! table {
  (
    $(#[$container_mac:meta])*
    $v:vis struct $struct_ident:ident($table_name:literal) {
      $(
        $(#[$field_mac:meta])*
        $field_ident:ident: $field_ty:ty
      ),+ $(,)?
    }
  ) => {
    $(#[$container_mac])*
    #[derive(Clone, Debug, Default, PartialEq)]
    $v struct $struct_ident {
      $(
        $(#[$field_mac])*
        pub $field_ident: $field_ty,
      )+
    }

    impl $crate::Table for $struct_ident {
      const FIELDS: &'static [$crate::TableField] = &[
        $($crate::TableField::new(
          stringify!($field_ident),
          <$field_ty as $crate::SqlDecl>::TY,
        ),)+
      ];
      const TABLE_NAME: &'static str = $table_name;

      #[inline]
      fn decode_field(&mut self, idx: usize, cell: Option<&str>) -> $crate::Result<()> {
        let mut _counter: usize = 0;
        $(
          if idx == _counter {
            self.$field_ident = <$field_ty as $crate::Decode>::decode_opt(cell)?;
            return Ok(());
          }
          _counter = _counter.wrapping_add(1);
        )+
        Err($crate::Error::UnknownFieldIndex(idx))
      }

      #[inline]
      fn encode_field(&self, idx: usize, params: &mut $crate::Params) -> $crate::Result<()> {
        let mut _counter: usize = 0;
        $(
          if idx == _counter {
            return <$field_ty as $crate::Encode>::encode(&self.$field_ident, params);
          }
          _counter = _counter.wrapping_add(1);
        )+
        Err($crate::Error::UnknownFieldIndex(idx))
      }

      #[inline]
      fn write_field_literal(
        &self,
        idx: usize,
        buffer_cmd: &mut $crate::alloc::string::String,
      ) -> $crate::Result<()> {
        let mut _counter: usize = 0;
        $(
          if idx == _counter {
            return <$field_ty as $crate::Encode>::write_literal(&self.$field_ident, buffer_cmd);
          }
          _counter = _counter.wrapping_add(1);
        )+
        Err($crate::Error::UnknownFieldIndex(idx))
      }
    }

    impl $crate::FromRow for $struct_ident {
      #[inline]
      fn from_row<R>(results: &R, row: usize, col: &mut usize) -> $crate::Result<Self>
      where
        R: $crate::Results,
      {
        $crate::from_row_table(results, row, col)
      }
    }
  };
}
