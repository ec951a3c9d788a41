use alloc::string::String;

/// Number of `$N` placeholder markers of a SQL template.
#[inline]
pub(crate) fn count_placeholders(cmd: &str) -> usize {
  memchr::memchr_iter(b'$', cmd.as_bytes()).count()
}

#[inline]
pub(crate) fn truncate_if_ends_with_char(buffer_cmd: &mut String, c: char) {
  if buffer_cmd.ends_with(c) {
    buffer_cmd.truncate(buffer_cmd.len().wrapping_sub(c.len_utf8()));
  }
}

#[cfg(test)]
mod tests {
  use crate::misc::count_placeholders;

  #[test]
  fn counts_every_placeholder_marker() {
    assert_eq!(count_placeholders("select * from t"), 0);
    assert_eq!(count_placeholders("select * from t where id=$1 and name=$2"), 2);
  }
}
