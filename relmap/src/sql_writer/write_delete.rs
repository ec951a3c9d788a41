use crate::table::Table;
use alloc::string::String;
use core::fmt::Write;

/// Writes a DELETE statement constrained by `condition`. An empty `condition` targets every
/// row of the table.
pub(crate) fn write_delete<T>(condition: &str, buffer_cmd: &mut String) -> crate::Result<()>
where
  T: Table,
{
  buffer_cmd.write_fmt(format_args!("DELETE FROM {}", T::TABLE_NAME))?;
  if !condition.is_empty() {
    buffer_cmd.write_fmt(format_args!(" WHERE {condition}"))?;
  }
  Ok(())
}
