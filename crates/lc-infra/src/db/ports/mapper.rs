use anyhow::Result;

/// Domain value -> insertable row. `D` may carry extra inputs the row needs,
/// such as the write timestamp.
pub trait InsertMapper<D, R>: Sync + Send {
    fn to_row(&self, domain: &D) -> Result<R>;
}

/// Stored row -> domain value. Fails on rows the domain cannot represent,
/// for example an unparseable timestamp.
pub trait RowMapper<R, D>: Sync + Send {
    fn to_domain(&self, row: &R) -> Result<D>;
}
