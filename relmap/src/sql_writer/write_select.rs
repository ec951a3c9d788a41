use crate::{misc::truncate_if_ends_with_char, table::Table};
use alloc::string::String;
use core::fmt::Write;

/// Writes a SELECT statement naming every reflected field of `T` in declaration order.
pub(crate) fn write_select<T>(buffer_cmd: &mut String) -> crate::Result<()>
where
  T: Table,
{
  buffer_cmd.push_str("SELECT ");
  for field in T::FIELDS {
    buffer_cmd.push_str(field.name());
    buffer_cmd.push(',');
  }
  truncate_if_ends_with_char(buffer_cmd, ',');
  buffer_cmd.write_fmt(format_args!(" FROM {}", T::TABLE_NAME))?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use crate::sql_writer::write_select;
  use alloc::string::String;

  table! {
    struct Metric("metric") {
      id: i32,
      value: f64,
    }
  }

  #[test]
  fn names_every_field_in_declaration_order() {
    let mut buffer_cmd = String::new();
    write_select::<Metric>(&mut buffer_cmd).unwrap();
    assert_eq!(buffer_cmd, "SELECT id,value FROM metric");
  }
}
