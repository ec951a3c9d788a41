use crate::{
  client::{Client, Results, Status},
  column_attr::ColumnAttr,
  conn_opts::ConnectOptions,
  encode::Encode,
  from_row::FromRow,
  mapper_context::MapperContext,
  misc::count_placeholders,
  params::Params,
  sql_writer::{write_create_table, write_delete, write_insert, write_key_condition, write_select},
  stmt_guard::StmtGuard,
  table::Table,
  Error,
};
use alloc::{format, string::String, vec::Vec};

/// Per-connection mapper bound to one underlying database session.
///
/// Every operation reflects over a record type, generates SQL (or reuses a caller-supplied
/// template) and marshals parameters in and rows out. Failures never panic: operations
/// return `false`, `None` or an empty `Vec` and the driver's error text stays inspectable
/// through [last_error](Self::last_error).
///
/// A mapper owns exactly one session and one in-flight result at a time. Transactions are
/// plain `begin`/`commit`/`rollback` statements without nesting support.
#[derive(Debug)]
pub struct Mapper<C>
where
  C: Client,
{
  client: Option<C>,
  ctx: MapperContext,
}

impl<C> Mapper<C>
where
  C: Client,
{
  /// Creates a disconnected instance.
  #[inline]
  pub fn new() -> Self {
    Self { client: None, ctx: MapperContext::default() }
  }

  /// Underlying session, if connected.
  #[inline]
  pub fn client(&self) -> Option<&C> {
    self.client.as_ref()
  }

  /// Mutable version of [client](Self::client).
  #[inline]
  pub fn client_mut(&mut self) -> Option<&mut C> {
    self.client.as_mut()
  }

  /// Whether the most recent operation failed.
  #[inline]
  pub fn has_error(&self) -> bool {
    self.ctx.has_error()
  }

  /// Message of the most recent failing operation. Empty after a success.
  #[inline]
  pub fn last_error(&self) -> &str {
    self.ctx.last_error()
  }

  /// Clears the error state as well as the key registries populated by
  /// [create_table](Self::create_table).
  #[inline]
  pub fn reset(&mut self) {
    self.ctx.reset();
  }

  /// Establishes the session described by `opts`, replacing any previous session.
  pub fn connect(&mut self, opts: &ConnectOptions<'_>) -> bool {
    self.ctx.reset_error();
    let Some(conn_str) = opts.connection_string() else {
      self.ctx.set_last_error(String::from("invalid connection parameters"));
      return false;
    };
    let client = C::open(&conn_str);
    if client.status_ok() {
      self.client = Some(client);
      true
    } else {
      self.ctx.set_last_error(client.error_message());
      false
    }
  }

  /// Releases the session. Idempotent.
  #[inline]
  pub fn disconnect(&mut self) {
    if let Some(mut client) = self.client.take() {
      client.close();
    }
  }

  /// Whether the session is currently healthy. Does not mutate any state.
  #[inline]
  pub fn ping(&self) -> bool {
    self.client.as_ref().map(C::status_ok).unwrap_or(false)
  }

  /// Synthesizes and executes `CREATE TABLE IF NOT EXISTS` for `T`, registering the key
  /// fields designated by `attrs`.
  pub fn create_table<T>(&mut self, attrs: &[ColumnAttr<'_>]) -> bool
  where
    T: Table,
  {
    let mut buffer_cmd = String::new();
    let (key, auto_key) = match write_create_table::<T>(attrs, &mut buffer_cmd) {
      Ok(elem) => elem,
      Err(err) => {
        self.set_error(err);
        return false;
      }
    };
    if let Err(err) = self.ctx.register(T::TABLE_NAME, key, auto_key) {
      self.set_error(err);
      return false;
    }
    self.exec_cmd(&buffer_cmd, Status::CommandOk)
  }

  /// Inserts a single record, skipping the registered auto-increment field.
  pub fn insert<T>(&mut self, entity: &T) -> Option<u64>
  where
    T: Table,
  {
    let auto_key = self.ctx.auto_key(T::TABLE_NAME);
    let mut buffer_cmd = String::new();
    let values = match write_insert::<T>(auto_key.as_str(), &mut buffer_cmd) {
      Ok(elem) => elem,
      Err(err) => {
        self.set_error(err);
        return None;
      }
    };
    if !self.prepare_cmd(&buffer_cmd, values) {
      return None;
    }
    self.insert_prepared(entity, auto_key.as_str())
  }

  /// Inserts all records inside a single transaction. Any failure rolls back the entire
  /// batch.
  pub fn insert_many<T>(&mut self, entities: &[T]) -> Option<u64>
  where
    T: Table,
  {
    let auto_key = self.ctx.auto_key(T::TABLE_NAME);
    let mut buffer_cmd = String::new();
    let values = match write_insert::<T>(auto_key.as_str(), &mut buffer_cmd) {
      Ok(elem) => elem,
      Err(err) => {
        self.set_error(err);
        return None;
      }
    };
    if !self.begin() {
      return None;
    }
    if !self.prepare_cmd(&buffer_cmd, values) {
      let _ = self.rollback();
      return None;
    }
    for entity in entities {
      if self.insert_prepared(entity, auto_key.as_str()).is_none() {
        let _ = self.rollback();
        return None;
      }
    }
    if !self.commit() {
      return None;
    }
    Some(entities.len() as u64)
  }

  /// Updates a record as a transaction that deletes the rows matching the registered key
  /// plus `extra_fields` and reinserts the new values.
  ///
  /// With no registered key and no matching extra fields the delete phase targets every
  /// row of the table.
  pub fn update<T>(&mut self, entity: &T, extra_fields: &[&str]) -> Option<u64>
  where
    T: Table,
  {
    let key = self.ctx.key(T::TABLE_NAME);
    let mut condition = String::new();
    if let Err(err) = write_key_condition(entity, key.as_str(), extra_fields, &mut condition) {
      self.set_error(err);
      return None;
    }
    if !self.begin() {
      return None;
    }
    if self.delete_then_insert(entity, &condition).is_none() {
      let _ = self.rollback();
      return None;
    }
    if !self.commit() {
      return None;
    }
    Some(1)
  }

  /// Applies [update](Self::update) to every record inside a single transaction, rolling
  /// back the whole batch on the first failure.
  pub fn update_many<T>(&mut self, entities: &[T], extra_fields: &[&str]) -> Option<u64>
  where
    T: Table,
  {
    let key = self.ctx.key(T::TABLE_NAME);
    if !self.begin() {
      return None;
    }
    for entity in entities {
      let mut condition = String::new();
      if let Err(err) = write_key_condition(entity, key.as_str(), extra_fields, &mut condition) {
        self.set_error(err);
        let _ = self.rollback();
        return None;
      }
      if self.delete_then_insert(entity, &condition).is_none() {
        let _ = self.rollback();
        return None;
      }
    }
    if !self.commit() {
      return None;
    }
    Some(entities.len() as u64)
  }

  /// Deletes the rows of `T` matching `condition`. An empty `condition` targets every row.
  pub fn delete_records<T>(&mut self, condition: &str) -> bool
  where
    T: Table,
  {
    let mut buffer_cmd = String::new();
    if let Err(err) = write_delete::<T>(condition, &mut buffer_cmd) {
      self.set_error(err);
      return false;
    }
    self.exec_cmd(&buffer_cmd, Status::CommandOk)
  }

  /// Fetches every row of `T` through a SELECT synthesized from its reflected fields.
  pub fn query<T>(&mut self) -> Vec<T>
  where
    T: FromRow + Table,
  {
    let mut buffer_cmd = String::new();
    if let Err(err) = write_select::<T>(&mut buffer_cmd) {
      self.set_error(err);
      return Vec::new();
    }
    _debug!("{buffer_cmd}");
    let Some(client) = self.client.as_mut() else {
      self.set_error(Error::ClosedConnection);
      return Vec::new();
    };
    let results = client.exec(&buffer_cmd);
    self.collect_rows(results)
  }

  /// Executes a caller-supplied SQL template with `$N` placeholders. The number of
  /// placeholder markers must equal `params.len()` or the call fails before reaching the
  /// driver.
  pub fn query_with<T>(&mut self, cmd: &str, params: &[&dyn Encode]) -> Vec<T>
  where
    T: FromRow,
  {
    let placeholders = count_placeholders(cmd);
    if placeholders != params.len() {
      self.set_error(Error::MismatchedPlaceholders {
        expected: placeholders,
        received: params.len(),
      });
      return Vec::new();
    }
    let mut values = Params::new();
    for param in params {
      if let Err(err) = param.encode(&mut values) {
        self.set_error(err);
        return Vec::new();
      }
    }
    if !self.prepare_cmd(cmd, values.len()) {
      return Vec::new();
    }
    let Some(client) = self.client.as_mut() else {
      self.set_error(Error::ClosedConnection);
      return Vec::new();
    };
    let results = client.exec_prepared(&values);
    self.collect_rows(results)
  }

  /// Executes a statement without placeholders.
  #[inline]
  pub fn execute(&mut self, cmd: &str) -> bool {
    self.exec_cmd(cmd, Status::CommandOk)
  }

  /// Starts a transaction.
  #[inline]
  pub fn begin(&mut self) -> bool {
    self.execute("begin;")
  }

  /// Flushes the current transaction.
  #[inline]
  pub fn commit(&mut self) -> bool {
    self.execute("commit;")
  }

  /// Discards the current transaction.
  #[inline]
  pub fn rollback(&mut self) -> bool {
    self.execute("rollback;")
  }

  fn collect_rows<T>(&mut self, results: C::Results) -> Vec<T>
  where
    T: FromRow,
  {
    let guard = StmtGuard::new(&mut self.ctx, results, Status::TuplesOk);
    if !guard.is_expected() {
      return Vec::new();
    }
    let mut failure = None;
    let mut rslt = Vec::new();
    {
      let results = guard.results();
      for row in 0..results.rows() {
        let mut col: usize = 0;
        match T::from_row(results, row, &mut col) {
          Ok(elem) => rslt.push(elem),
          Err(err) => {
            failure = Some(err);
            break;
          }
        }
      }
    }
    drop(guard);
    if let Some(err) = failure {
      self.set_error(err);
      return Vec::new();
    }
    rslt
  }

  fn delete_then_insert<T>(&mut self, entity: &T, condition: &str) -> Option<u64>
  where
    T: Table,
  {
    if !self.delete_records::<T>(condition) {
      return None;
    }
    self.insert(entity)
  }

  fn exec_cmd(&mut self, cmd: &str, expected: Status) -> bool {
    _debug!("{cmd}");
    let Some(client) = self.client.as_mut() else {
      self.set_error(Error::ClosedConnection);
      return false;
    };
    let results = client.exec(cmd);
    let guard = StmtGuard::new(&mut self.ctx, results, expected);
    guard.is_expected()
  }

  fn insert_prepared<T>(&mut self, entity: &T, auto_key: &str) -> Option<u64>
  where
    T: Table,
  {
    let mut params = Params::new();
    for (idx, field) in T::FIELDS.iter().enumerate() {
      if !auto_key.is_empty() && field.name() == auto_key {
        continue;
      }
      if let Err(err) = entity.encode_field(idx, &mut params) {
        self.set_error(err);
        return None;
      }
    }
    if params.is_empty() {
      self.set_error(Error::NoFieldsToInsert);
      return None;
    }
    let Some(client) = self.client.as_mut() else {
      self.set_error(Error::ClosedConnection);
      return None;
    };
    let results = client.exec_prepared(&params);
    let guard = StmtGuard::new(&mut self.ctx, results, Status::CommandOk);
    guard.is_expected().then_some(1)
  }

  fn prepare_cmd(&mut self, cmd: &str, params_len: usize) -> bool {
    _debug!("{cmd}");
    let Some(client) = self.client.as_mut() else {
      self.set_error(Error::ClosedConnection);
      return false;
    };
    let results = client.prepare(cmd, params_len);
    let guard = StmtGuard::new(&mut self.ctx, results, Status::CommandOk);
    guard.is_expected()
  }

  #[inline]
  fn set_error(&mut self, err: Error) {
    self.ctx.set_last_error(format!("{err}"));
  }
}

impl<C> Default for Mapper<C>
where
  C: Client,
{
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}
