use crate::misc::truncate_if_ends_with_char;
use alloc::string::String;
use core::fmt::Write;

/// Parameters used to establish a session.
///
/// The generated connection string follows a fixed, order-dependent schema: `host`, `user`,
/// `password` and `dbname` always appear, `connect_timeout` appears when set and `port`
/// appears when both `port` and `connect_timeout` are set. A `port` without a
/// `connect_timeout` is a contract violation and yields no connection string at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConnectOptions<'any> {
  connect_timeout: Option<u32>,
  dbname: &'any str,
  host: &'any str,
  password: &'any str,
  port: Option<u16>,
  user: &'any str,
}

impl<'any> ConnectOptions<'any> {
  /// Creates a new instance from the four mandatory parameters.
  #[inline]
  pub const fn new(
    host: &'any str,
    user: &'any str,
    password: &'any str,
    dbname: &'any str,
  ) -> Self {
    Self { connect_timeout: None, dbname, host, password, port: None, user }
  }

  /// Driver-level connect timeout in seconds.
  #[inline]
  pub const fn connect_timeout(mut self, connect_timeout: u32) -> Self {
    self.connect_timeout = Some(connect_timeout);
    self
  }

  /// Server port. Only honored alongside [connect_timeout](Self::connect_timeout).
  #[inline]
  pub const fn port(mut self, port: u16) -> Self {
    self.port = Some(port);
    self
  }

  /// Space-separated `key=value` pairs in the fixed schema order, or `None` for parameter
  /// combinations that have no valid schema.
  #[inline]
  pub fn connection_string(&self) -> Option<String> {
    if self.port.is_some() && self.connect_timeout.is_none() {
      return None;
    }
    let mut conn_str = String::new();
    let mut push = |key: &str, value: &str| {
      let _rslt = conn_str.write_fmt(format_args!("{key}={value} "));
    };
    push("host", self.host);
    push("user", self.user);
    push("password", self.password);
    push("dbname", self.dbname);
    if let Some(connect_timeout) = self.connect_timeout {
      let _rslt = conn_str.write_fmt(format_args!("connect_timeout={connect_timeout} "));
    }
    if let Some(port) = self.port {
      let _rslt = conn_str.write_fmt(format_args!("port={port} "));
    }
    truncate_if_ends_with_char(&mut conn_str, ' ');
    Some(conn_str)
  }
}
