//! Driver contract. Mirrors the classic libpq surface: connection status and error text,
//! raw execution, a single unnamed prepared statement and textual result accessors.

#[cfg(test)]
pub(crate) mod mock;
mod status;

use crate::params::Params;
use alloc::string::String;
pub use status::Status;

/// A blocking database session. Implementations wrap the actual driver handle.
///
/// [open](Client::open) always yields an instance, connected or not, so failures can be
/// interrogated through [status_ok](Client::status_ok) and [error_message](Client::error_message).
pub trait Client {
  /// See [Results].
  type Results: Results;

  /// Establishes a session described by a space-separated `key=value` connection string.
  fn open(conn_str: &str) -> Self;

  /// Releases the underlying handle. Dropping must have the same effect.
  fn close(&mut self) {}

  /// Connection-scoped error text reported by the driver.
  fn error_message(&self) -> String;

  /// Sends a statement without placeholders.
  fn exec(&mut self, cmd: &str) -> Self::Results;

  /// Binds `params` to the last prepared statement and sends it.
  fn exec_prepared(&mut self, params: &Params) -> Self::Results;

  /// Stores `cmd` with `params_len` placeholders into the unnamed prepared statement slot,
  /// overwriting any previous content.
  fn prepare(&mut self, cmd: &str, params_len: usize) -> Self::Results;

  /// Whether the session is currently healthy.
  fn status_ok(&self) -> bool;
}

/// The outcome of a single statement execution.
pub trait Results {
  /// Number of columns of each row.
  fn columns(&self) -> usize;

  /// Statement-scoped error text reported by the driver.
  fn error_message(&self) -> String;

  /// Whether the cell at (`row`, `col`) is a database NULL.
  fn is_null(&self, row: usize, col: usize) -> bool;

  /// Number of returned rows.
  fn rows(&self) -> usize;

  /// See [Status].
  fn status(&self) -> Status;

  /// Textual content of the cell at (`row`, `col`). Empty for NULL or out-of-bounds cells.
  fn value(&self, row: usize, col: usize) -> &str;
}

impl Results for () {
  #[inline]
  fn columns(&self) -> usize {
    0
  }

  #[inline]
  fn error_message(&self) -> String {
    String::new()
  }

  #[inline]
  fn is_null(&self, _: usize, _: usize) -> bool {
    true
  }

  #[inline]
  fn rows(&self) -> usize {
    0
  }

  #[inline]
  fn status(&self) -> Status {
    Status::Error
  }

  #[inline]
  fn value(&self, _: usize, _: usize) -> &str {
    ""
  }
}
