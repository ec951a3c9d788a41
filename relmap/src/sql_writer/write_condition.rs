use crate::table::Table;
use alloc::string::String;
use core::fmt::Write;

/// Writes the WHERE condition used by update operations: the registered `key` field plus any
/// `extra_fields` that name fields of `T`, each rendered as `name=value` from the record's
/// current values and joined with `AND`. Unknown names are ignored. With an empty `key` and
/// no matching extras the condition stays empty, which makes the caller target every row.
pub(crate) fn write_key_condition<T>(
  entity: &T,
  key: &str,
  extra_fields: &[&str],
  buffer_cmd: &mut String,
) -> crate::Result<()>
where
  T: Table,
{
  let mut wrote = false;
  for (idx, field) in T::FIELDS.iter().enumerate() {
    let is_key = !key.is_empty() && field.name() == key;
    if !is_key && !extra_fields.contains(&field.name()) {
      continue;
    }
    if wrote {
      buffer_cmd.push_str(" AND ");
    }
    buffer_cmd.write_fmt(format_args!("{}=", field.name()))?;
    entity.write_field_literal(idx, buffer_cmd)?;
    wrote = true;
  }
  Ok(())
}
