use geoddl_core::{
    AffectedObject, CreateSpatialIndex, DialectContext, DialectId, ObjectKind, ObjectName, Result,
    SpatialIndexGenerator, SqlFragment,
};
use tracing::debug;

/// SpatiaLite builds an R*Tree virtual table named `idx_<table>_<column>`
/// itself, so the requested index name is not used.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpatialiteSpatialIndexGenerator;

impl SpatialIndexGenerator for SpatialiteSpatialIndexGenerator {
    fn name(&self) -> &str {
        "spatialite spatial index generator"
    }

    fn supports(&self, dialect: DialectId) -> bool {
        dialect == DialectId::Sqlite
    }

    fn generate(
        &self,
        statement: &CreateSpatialIndex,
        context: &dyn DialectContext,
    ) -> Result<Vec<SqlFragment>> {
        statement.validate()?;

        let table = context.correct_object_name(statement.table_name(), ObjectKind::Table);
        let column = context.correct_object_name(
            statement.first_column().unwrap_or_default(),
            ObjectKind::Column,
        );
        debug!(
            index = statement.index_name(),
            rtree = %format!("idx_{table}_{column}"),
            "spatialite derives the spatial index name"
        );

        let sql = format!(
            "SELECT CreateSpatialIndex({}, {})",
            render_string_literal(&table),
            render_string_literal(&column)
        );
        Ok(vec![SqlFragment::new(
            sql,
            AffectedObject::Table(ObjectName::table_of(statement)),
        )])
    }
}

fn render_string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
