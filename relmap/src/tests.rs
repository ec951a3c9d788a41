use crate::{client::mock::MockClient, ColumnAttr, ConnectOptions, Encode, Mapper};
use alloc::{
  string::{String, ToString},
  vec,
  vec::Vec,
};

table! {
  struct Account("account") {
    id: i32,
    name: String,
  }
}

table! {
  struct Note("note") {
    id: i32,
    body: String,
  }
}

fn connected() -> Mapper<MockClient> {
  let mut mapper = Mapper::new();
  assert!(mapper.connect(&ConnectOptions::new("localhost", "postgres", "pwd", "db")));
  mapper
}

fn ops(mapper: &Mapper<MockClient>) -> &[String] {
  &mapper.client().unwrap().ops
}

#[test]
fn connect_builds_the_session_and_reports_failures() {
  let mut mapper = Mapper::<MockClient>::new();
  assert!(!mapper.ping());
  assert!(mapper.connect(&ConnectOptions::new("localhost", "postgres", "pwd", "db")));
  assert!(mapper.ping());
  assert_eq!(mapper.client().unwrap().conn_str, "host=localhost user=postgres password=pwd dbname=db");
  mapper.disconnect();
  assert!(!mapper.ping());

  assert!(!mapper.connect(&ConnectOptions::new("invalid", "postgres", "pwd", "db")));
  assert!(mapper.has_error());
  assert!(!mapper.last_error().is_empty());
}

#[test]
fn connect_rejects_a_port_without_a_timeout() {
  let mut mapper = Mapper::<MockClient>::new();
  assert!(!mapper.connect(&ConnectOptions::new("localhost", "postgres", "pwd", "db").port(5432)));
  assert!(mapper.has_error());
  assert!(!mapper.ping());
}

#[test]
fn create_table_registers_the_auto_key_and_insert_skips_it() {
  let mut mapper = connected();
  assert!(mapper.create_table::<Account>(&[
    ColumnAttr::AutoKey("id"),
    ColumnAttr::NotNull(&["name"]),
  ]));
  assert_eq!(
    ops(&mapper),
    [
      "CREATE TABLE IF NOT EXISTS account(id serial primary key, name text NOT NULL)"
        .to_string()
    ]
  );

  let entity = Account { id: 0, name: String::from("alice") };
  assert_eq!(mapper.insert(&entity), Some(1));
  assert_eq!(
    &ops(&mapper)[1..],
    [
      "prepare:INSERT INTO account(name) VALUES($1)".to_string(),
      "exec_prepared:INSERT INTO account(name) VALUES($1)".to_string(),
    ]
  );
  assert_eq!(
    mapper.client().unwrap().params_log,
    vec![vec![Some(b"alice".to_vec())]]
  );
  assert!(!mapper.has_error());
  assert!(mapper.last_error().is_empty());
}

#[test]
fn batch_insert_rolls_back_the_whole_batch_on_the_first_failure() {
  let mut mapper = connected();
  let entities = [
    Account { id: 1, name: String::from("a") },
    Account { id: 2, name: String::from("b") },
    Account { id: 3, name: String::from("c") },
  ];
  // begin (0), prepare (1), first exec_prepared (2), second exec_prepared (3)
  mapper.client_mut().unwrap().fail_at = Some(3);
  assert_eq!(mapper.insert_many(&entities), None);
  assert!(mapper.has_error());
  let ops = ops(&mapper);
  assert_eq!(ops.first().map(String::as_str), Some("begin;"));
  assert_eq!(ops.last().map(String::as_str), Some("rollback;"));
  assert!(!ops.contains(&"commit;".to_string()));
}

#[test]
fn batch_insert_commits_and_returns_the_count() {
  let mut mapper = connected();
  let entities = [
    Account { id: 1, name: String::from("a") },
    Account { id: 2, name: String::from("b") },
  ];
  assert_eq!(mapper.insert_many(&entities), Some(2));
  let ops = ops(&mapper);
  assert_eq!(ops.first().map(String::as_str), Some("begin;"));
  assert_eq!(ops.last().map(String::as_str), Some("commit;"));
  assert!(!mapper.has_error());
}

#[test]
fn update_without_a_key_or_extras_targets_every_row_before_reinserting() {
  let mut mapper = connected();
  let entity = Note { id: 1, body: String::from("x") };
  assert_eq!(mapper.update(&entity, &[]), Some(1));
  assert_eq!(
    ops(&mapper),
    [
      "begin;".to_string(),
      "DELETE FROM note".to_string(),
      "prepare:INSERT INTO note(id,body) VALUES($1,$2)".to_string(),
      "exec_prepared:INSERT INTO note(id,body) VALUES($1,$2)".to_string(),
      "commit;".to_string(),
    ]
  );
}

#[test]
fn update_constrains_the_delete_phase_by_the_registered_key() {
  let mut mapper = connected();
  assert!(mapper.create_table::<Note>(&[ColumnAttr::PrimaryKey("id")]));
  let entity = Note { id: 9, body: String::from("x") };
  assert_eq!(mapper.update(&entity, &["body"]), Some(1));
  assert!(ops(&mapper).contains(&"DELETE FROM note WHERE id=9 AND body='x'".to_string()));
}

#[test]
fn batch_update_rolls_back_on_the_first_failing_pair() {
  let mut mapper = connected();
  assert!(mapper.create_table::<Note>(&[ColumnAttr::PrimaryKey("id")]));
  let entities = [
    Note { id: 1, body: String::from("a") },
    Note { id: 2, body: String::from("b") },
  ];
  // create table (0), begin (1), first delete (2), prepare (3), first insert (4),
  // second delete (5)
  mapper.client_mut().unwrap().fail_at = Some(5);
  assert_eq!(mapper.update_many(&entities, &[]), None);
  assert!(mapper.has_error());
  let ops = ops(&mapper);
  assert_eq!(ops.last().map(String::as_str), Some("rollback;"));
  assert!(!ops.contains(&"commit;".to_string()));
}

#[test]
fn templated_queries_fail_fast_on_placeholder_mismatch() {
  let mut mapper = connected();
  let id = 1i32;
  let name = String::from("n");
  let template = "select * from account where id=$1 and name=$2";
  let one: [&dyn Encode; 1] = [&id];
  let three: [&dyn Encode; 3] = [&id, &name, &id];
  assert_eq!(mapper.query_with::<Account>(template, &one), Vec::new());
  assert!(mapper.has_error());
  assert!(ops(&mapper).is_empty());
  assert_eq!(mapper.query_with::<Account>(template, &three), Vec::new());
  assert!(mapper.has_error());
  assert!(ops(&mapper).is_empty());
}

#[test]
fn templated_queries_bind_parameters_and_marshal_rows() {
  let mut mapper = connected();
  mapper.client_mut().unwrap().canned =
    vec![vec![vec![Some("7".to_string()), Some("alice".to_string())]]];
  let id = 7i32;
  let params: [&dyn Encode; 1] = [&id];
  let rows: Vec<(i32, String)> =
    mapper.query_with("select id,name from account where id=$1", &params);
  assert_eq!(rows, vec![(7, String::from("alice"))]);
  assert_eq!(mapper.client().unwrap().params_log, vec![vec![Some(b"7".to_vec())]]);
  assert!(!mapper.has_error());
}

#[test]
fn reflected_queries_marshal_rows_and_null_cells() {
  let mut mapper = connected();
  mapper.client_mut().unwrap().canned = vec![vec![
    vec![Some("1".to_string()), Some("alice".to_string())],
    vec![Some("2".to_string()), None],
  ]];
  let rows: Vec<Account> = mapper.query();
  assert_eq!(
    rows,
    vec![
      Account { id: 1, name: String::from("alice") },
      Account { id: 2, name: String::new() },
    ]
  );
}

#[test]
fn composite_projections_marshal_nested_records() {
  let mut mapper = connected();
  mapper.client_mut().unwrap().canned =
    vec![vec![vec![Some("1".to_string()), Some("bob".to_string()), Some("42".to_string())]]];
  let rows: Vec<(Account, i64)> =
    mapper.query_with("select id,name,total from account", &[]);
  assert_eq!(rows, vec![(Account { id: 1, name: String::from("bob") }, 42)]);
}

#[test]
fn error_state_is_set_on_failure_and_reset_by_the_next_guarded_execution() {
  let mut mapper = connected();
  mapper.client_mut().unwrap().fail_at = Some(0);
  assert!(!mapper.execute("drop table account"));
  assert!(mapper.has_error());
  assert_eq!(mapper.last_error(), "mock failure");
  assert!(mapper.execute("drop table account"));
  assert!(!mapper.has_error());
  assert!(mapper.last_error().is_empty());
}
