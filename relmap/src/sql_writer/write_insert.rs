use crate::{misc::truncate_if_ends_with_char, table::Table, Error};
use alloc::string::String;
use core::fmt::Write;

/// Writes a parameterized INSERT naming every field of `T` except `auto_key` and returns
/// the number of `$N` placeholders.
pub(crate) fn write_insert<T>(auto_key: &str, buffer_cmd: &mut String) -> crate::Result<usize>
where
  T: Table,
{
  buffer_cmd.write_fmt(format_args!("INSERT INTO {}(", T::TABLE_NAME))?;
  let mut values: usize = 0;
  for field in T::FIELDS {
    if !auto_key.is_empty() && field.name() == auto_key {
      continue;
    }
    buffer_cmd.push_str(field.name());
    buffer_cmd.push(',');
    values = values.wrapping_add(1);
  }
  if values == 0 {
    return Err(Error::NoFieldsToInsert);
  }
  truncate_if_ends_with_char(buffer_cmd, ',');
  buffer_cmd.push_str(") VALUES(");
  for idx in 1..=values {
    buffer_cmd.write_fmt(format_args!("${idx},"))?;
  }
  truncate_if_ends_with_char(buffer_cmd, ',');
  buffer_cmd.push(')');
  Ok(values)
}
