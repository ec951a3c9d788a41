use crate::{
  column_attr::{classify, has_conflicting_keys, ColumnAttr},
  table::{Table, TableField},
  Error, Identifier,
};
use alloc::string::String;
use core::fmt::Write;
use smallvec::SmallVec;

/// Writes a `CREATE TABLE IF NOT EXISTS` statement for `T` and returns the designated
/// `(key, auto_key)` field names, empty when `attrs` designates none.
pub(crate) fn write_create_table<T>(
  attrs: &[ColumnAttr<'_>],
  buffer_cmd: &mut String,
) -> crate::Result<(Identifier, Identifier)>
where
  T: Table,
{
  if has_conflicting_keys(attrs) {
    return Err(Error::MultipleKeyAttributes);
  }
  let classified = classify(attrs);
  let mut key = Identifier::new();
  let mut auto_key = Identifier::new();
  let mut unique_fields: SmallVec<[&'static str; 4]> = SmallVec::new();

  buffer_cmd.write_fmt(format_args!("CREATE TABLE IF NOT EXISTS {}(", T::TABLE_NAME))?;
  for (idx, field) in T::FIELDS.iter().enumerate() {
    if idx > 0 {
      buffer_cmd.push_str(", ");
    }
    let mut has_base = false;
    for attr in &classified {
      match attr {
        ColumnAttr::AutoKey(name) => {
          if *name != field.name() {
            continue;
          }
          buffer_cmd.write_fmt(format_args!("{} serial primary key", field.name()))?;
          has_base = true;
          set(&mut key, name)?;
          set(&mut auto_key, name)?;
        }
        ColumnAttr::PrimaryKey(name) => {
          if *name != field.name() {
            continue;
          }
          write_base(buffer_cmd, field, &mut has_base)?;
          buffer_cmd.push_str(" PRIMARY KEY");
          set(&mut key, name)?;
        }
        ColumnAttr::NotNull(fields) => {
          if !fields.contains(&field.name()) {
            continue;
          }
          write_base(buffer_cmd, field, &mut has_base)?;
          buffer_cmd.push_str(" NOT NULL");
        }
        ColumnAttr::Unique(fields) => {
          if !fields.contains(&field.name()) {
            continue;
          }
          unique_fields.push(field.name());
        }
      }
    }
    if !has_base {
      write_base(buffer_cmd, field, &mut has_base)?;
    }
  }

  if !unique_fields.is_empty() {
    buffer_cmd.push_str(", UNIQUE(");
    for (idx, unique_field) in unique_fields.iter().enumerate() {
      if idx > 0 {
        buffer_cmd.push(',');
      }
      buffer_cmd.push_str(unique_field);
    }
    buffer_cmd.push(')');
  }
  buffer_cmd.push(')');

  Ok((key, auto_key))
}

#[inline]
fn set(identifier: &mut Identifier, name: &str) -> crate::Result<()> {
  *identifier = Identifier::from(name).map_err(|_err| Error::CapacityOverflow)?;
  Ok(())
}

fn write_base(buffer_cmd: &mut String, field: &TableField, has_base: &mut bool) -> crate::Result<()> {
  if *has_base {
    return Ok(());
  }
  buffer_cmd.write_fmt(format_args!("{} ", field.name()))?;
  field.ty().write(buffer_cmd)?;
  *has_base = true;
  Ok(())
}
