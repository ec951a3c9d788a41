use smallvec::SmallVec;

/// Column attribute applied by [create_table](crate::Mapper::create_table).
///
/// At most one of [PrimaryKey](ColumnAttr::PrimaryKey) and [AutoKey](ColumnAttr::AutoKey)
/// may appear per call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnAttr<'any> {
  /// Primary key whose value is assigned by the database on insert.
  AutoKey(&'any str),
  /// `NOT NULL` constraint over the named fields.
  NotNull(&'any [&'any str]),
  /// Primary key supplied by the caller.
  PrimaryKey(&'any str),
  /// The named fields compose a single trailing `UNIQUE(...)` clause.
  Unique(&'any [&'any str]),
}

impl ColumnAttr<'_> {
  #[inline]
  pub(crate) fn is_key(&self) -> bool {
    matches!(self, Self::AutoKey(_) | Self::PrimaryKey(_))
  }
}

/// Two-pass classification: key attributes first, remaining attributes afterwards, relative
/// order preserved within each group. Key attributes must be applied before the others so a
/// field's base clause is settled before constraint clauses are appended.
#[inline]
pub(crate) fn classify<'attrs, 'any>(
  attrs: &'attrs [ColumnAttr<'any>],
) -> SmallVec<[&'attrs ColumnAttr<'any>; 4]> {
  let mut rslt = SmallVec::new();
  for attr in attrs {
    if attr.is_key() {
      rslt.push(attr);
    }
  }
  for attr in attrs {
    if !attr.is_key() {
      rslt.push(attr);
    }
  }
  rslt
}

/// Whether `attrs` designates more than one key field.
#[inline]
pub(crate) fn has_conflicting_keys(attrs: &[ColumnAttr<'_>]) -> bool {
  let mut keys: usize = 0;
  for attr in attrs {
    if attr.is_key() {
      keys = keys.wrapping_add(1);
    }
  }
  keys > 1
}
