use crate::{
  client::{Results, Status},
  mapper_context::MapperContext,
};

/// Scoped statement guard. Construction clears the context error state; dropping captures
/// the driver error text whenever the result status differs from the expected success
/// status and then releases the result value, on every exit path.
pub(crate) struct StmtGuard<'ctx, R>
where
  R: Results,
{
  ctx: &'ctx mut MapperContext,
  expected: Status,
  results: R,
}

impl<'ctx, R> StmtGuard<'ctx, R>
where
  R: Results,
{
  #[inline]
  pub(crate) fn new(ctx: &'ctx mut MapperContext, results: R, expected: Status) -> Self {
    ctx.reset_error();
    Self { ctx, expected, results }
  }

  #[inline]
  pub(crate) fn is_expected(&self) -> bool {
    self.results.status() == self.expected
  }

  #[inline]
  pub(crate) fn results(&self) -> &R {
    &self.results
  }
}

impl<R> Drop for StmtGuard<'_, R>
where
  R: Results,
{
  #[inline]
  fn drop(&mut self) {
    if !self.is_expected() {
      let msg = self.results.error_message();
      self.ctx.set_last_error(msg);
    }
  }
}
