use crate::{Error, Identifier};
use alloc::string::String;
use hashbrown::HashMap;

/// Mapper-scoped mutable state: the last-error flag/message plus the key registries
/// populated by table creation and consulted by insert/update operations.
///
/// Owned by a single [Mapper](crate::Mapper), so independent mapper instances never
/// interfere with each other.
#[derive(Debug, Default)]
pub struct MapperContext {
  auto_key_map: HashMap<Identifier, Identifier>,
  has_error: bool,
  key_map: HashMap<Identifier, Identifier>,
  last_error: String,
}

impl MapperContext {
  /// Auto-increment key field registered for `table_name`. Empty when none.
  #[inline]
  pub fn auto_key(&self, table_name: &str) -> Identifier {
    self.auto_key_map.get(table_name).copied().unwrap_or_default()
  }

  /// Whether the most recent operation failed.
  #[inline]
  pub fn has_error(&self) -> bool {
    self.has_error
  }

  /// Primary key field registered for `table_name`. Empty when none.
  #[inline]
  pub fn key(&self, table_name: &str) -> Identifier {
    self.key_map.get(table_name).copied().unwrap_or_default()
  }

  /// Message of the most recent failing operation. Empty after a success.
  #[inline]
  pub fn last_error(&self) -> &str {
    &self.last_error
  }

  /// Clears the error flag and message as well as both registries.
  #[inline]
  pub fn reset(&mut self) {
    self.auto_key_map.clear();
    self.key_map.clear();
    self.reset_error();
  }

  #[inline]
  pub(crate) fn register(
    &mut self,
    table_name: &str,
    key: Identifier,
    auto_key: Identifier,
  ) -> crate::Result<()> {
    let table = Identifier::from(table_name).map_err(|_err| Error::CapacityOverflow)?;
    let _ = self.key_map.insert(table, key);
    let _ = self.auto_key_map.insert(table, auto_key);
    Ok(())
  }

  #[inline]
  pub(crate) fn reset_error(&mut self) {
    self.has_error = false;
    self.last_error.clear();
  }

  #[inline]
  pub(crate) fn set_last_error(&mut self, last_error: String) {
    _debug!("{last_error}");
    self.has_error = true;
    self.last_error = last_error;
  }
}
