#![doc = include_str!("../README.md")]
#![no_std]

#[doc(hidden)]
pub extern crate alloc;
#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod client;
mod column_attr;
mod conn_opts;
mod decode;
mod encode;
mod error;
mod from_row;
mod mapper;
mod mapper_context;
mod misc;
mod params;
mod sql_ty;
mod sql_writer;
mod stmt_guard;
mod table;
#[cfg(test)]
mod tests;
mod tuple_impls;

pub use client::{Client, Results, Status};
pub use column_attr::ColumnAttr;
pub use conn_opts::ConnectOptions;
pub use decode::Decode;
pub use encode::Encode;
pub use error::Error;
pub use from_row::{from_row_table, FromRow};
pub use mapper::Mapper;
pub use mapper_context::MapperContext;
pub use params::Params;
pub use sql_ty::{SqlDecl, SqlTy};
pub use table::{Table, TableField};

/// The maximum number of characters that a database identifier can have. For example, tables,
/// fields, procedures, etc.
pub type Identifier = arrayvec::ArrayString<64>;

/// Shortcut of [`core::result::Result<T, Error>`].
pub type Result<T> = core::result::Result<T, Error>;
