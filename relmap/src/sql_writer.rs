//! SQL-text synthesis from reflected field metadata.

mod write_condition;
mod write_create_table;
mod write_delete;
mod write_insert;
mod write_select;

pub(crate) use write_condition::write_key_condition;
pub(crate) use write_create_table::write_create_table;
pub(crate) use write_delete::write_delete;
pub(crate) use write_insert::write_insert;
pub(crate) use write_select::write_select;
