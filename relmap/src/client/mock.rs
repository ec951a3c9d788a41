use crate::{
  client::{Client, Results, Status},
  params::Params,
};
use alloc::{
  string::{String, ToString},
  vec::Vec,
};

pub(crate) type MockRows = Vec<Vec<Option<String>>>;

/// Scripted driver used by the crate tests. Records every operation in order and can be
/// instructed to fail at an arbitrary statement ordinal.
#[derive(Debug)]
pub(crate) struct MockClient {
  pub(crate) canned: Vec<MockRows>,
  pub(crate) conn_str: String,
  pub(crate) fail_at: Option<usize>,
  pub(crate) ops: Vec<String>,
  pub(crate) params_log: Vec<Vec<Option<Vec<u8>>>>,
  prepared: String,
}

impl MockClient {
  fn outcome(&mut self, is_query: bool) -> MockResults {
    let ordinal = self.ops.len().wrapping_sub(1);
    if self.fail_at == Some(ordinal) {
      return MockResults {
        error: "mock failure".to_string(),
        rows: Vec::new(),
        status: Status::Error,
      };
    }
    if is_query {
      let rows = if self.canned.is_empty() { Vec::new() } else { self.canned.remove(0) };
      MockResults { error: String::new(), rows, status: Status::TuplesOk }
    } else {
      MockResults { error: String::new(), rows: Vec::new(), status: Status::CommandOk }
    }
  }
}

impl Client for MockClient {
  type Results = MockResults;

  fn open(conn_str: &str) -> Self {
    Self {
      canned: Vec::new(),
      conn_str: conn_str.to_string(),
      fail_at: None,
      ops: Vec::new(),
      params_log: Vec::new(),
      prepared: String::new(),
    }
  }

  fn error_message(&self) -> String {
    "mock connection failure".to_string()
  }

  fn exec(&mut self, cmd: &str) -> Self::Results {
    self.ops.push(cmd.to_string());
    let is_query = is_select(cmd);
    self.outcome(is_query)
  }

  fn exec_prepared(&mut self, params: &Params) -> Self::Results {
    let mut values = Vec::new();
    for value in params.values() {
      values.push(value.clone());
    }
    self.params_log.push(values);
    let mut op = String::from("exec_prepared:");
    op.push_str(&self.prepared);
    self.ops.push(op);
    let is_query = is_select(&self.prepared);
    self.outcome(is_query)
  }

  fn prepare(&mut self, cmd: &str, _: usize) -> Self::Results {
    self.prepared = cmd.to_string();
    let mut op = String::from("prepare:");
    op.push_str(cmd);
    self.ops.push(op);
    self.outcome(false)
  }

  fn status_ok(&self) -> bool {
    !self.conn_str.contains("invalid")
  }
}

#[derive(Debug)]
pub(crate) struct MockResults {
  error: String,
  rows: MockRows,
  status: Status,
}

impl Results for MockResults {
  fn columns(&self) -> usize {
    self.rows.first().map(Vec::len).unwrap_or_default()
  }

  fn error_message(&self) -> String {
    self.error.clone()
  }

  fn is_null(&self, row: usize, col: usize) -> bool {
    match self.rows.get(row).and_then(|cells| cells.get(col)) {
      Some(cell) => cell.is_none(),
      None => true,
    }
  }

  fn rows(&self) -> usize {
    self.rows.len()
  }

  fn status(&self) -> Status {
    self.status
  }

  fn value(&self, row: usize, col: usize) -> &str {
    match self.rows.get(row).and_then(|cells| cells.get(col)) {
      Some(Some(cell)) => cell,
      _ => "",
    }
  }
}

fn is_select(cmd: &str) -> bool {
  cmd.get(..6).map(|prefix| prefix.eq_ignore_ascii_case("select")).unwrap_or(false)
}
