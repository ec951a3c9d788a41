use crate::{client::Results, from_row::FromRow};

macro_rules! impl_from_row_tuple {
  ($($T:ident),+) => {
    impl<$($T,)+> FromRow for ($($T,)+)
    where
      $($T: FromRow,)+
    {
      #[inline]
      fn from_row<R>(results: &R, row: usize, col: &mut usize) -> crate::Result<Self>
      where
        R: Results,
      {
        Ok(($($T::from_row(results, row, col)?,)+))
      }
    }
  };
}

impl_from_row_tuple!(A);
impl_from_row_tuple!(A, B);
impl_from_row_tuple!(A, B, C);
impl_from_row_tuple!(A, B, C, D);
impl_from_row_tuple!(A, B, C, D, E);
impl_from_row_tuple!(A, B, C, D, E, F);
impl_from_row_tuple!(A, B, C, D, E, F, G);
impl_from_row_tuple!(A, B, C, D, E, F, G, H);
