use crate::{CreateSpatialIndex, DialectContext, DialectId, Result, SqlFragment};

pub const DEFAULT_PRIORITY: i32 = 0;

pub trait SpatialIndexGenerator: Send + Sync {
    fn name(&self) -> &str;

    fn supports(&self, dialect: DialectId) -> bool;

    /// Breaks ties when several generators claim the same dialect.
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Produces the ordered fragments creating `statement`. Implementations
    /// validate the statement before building any fragment.
    fn generate(
        &self,
        statement: &CreateSpatialIndex,
        context: &dyn DialectContext,
    ) -> Result<Vec<SqlFragment>>;
}
