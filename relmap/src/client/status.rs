/// Result status reported by the driver after a statement execution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
  /// The statement completed without returning rows.
  CommandOk,
  /// The statement failed.
  Error,
  /// The statement completed and rows are available.
  TuplesOk,
}
