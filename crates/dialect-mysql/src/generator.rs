use geoddl_core::{
    AffectedObject, CreateSpatialIndex, DialectContext, DialectId, Result, SpatialIndexGenerator,
    SqlFragment,
};
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlSpatialIndexGenerator;

impl SpatialIndexGenerator for MysqlSpatialIndexGenerator {
    fn name(&self) -> &str {
        "mysql spatial index generator"
    }

    fn supports(&self, dialect: DialectId) -> bool {
        dialect == DialectId::MySql
    }

    fn generate(
        &self,
        statement: &CreateSpatialIndex,
        context: &dyn DialectContext,
    ) -> Result<Vec<SqlFragment>> {
        statement.validate()?;

        // InnoDB R-trees take their extent from the data and their SRID from
        // the column definition.
        if statement.tablespace().is_some() || !statement.bounds().is_empty() {
            debug!(
                index = statement.index_name(),
                "mysql ignores tablespace and bounds on spatial indexes"
            );
        }

        let catalog = statement.table_catalog();
        let schema = statement.table_schema();
        let table = statement.table_name();
        let sql = format!(
            "CREATE SPATIAL INDEX {} ON {} ({})",
            context.escape_index_name(catalog, schema, statement.index_name()),
            context.escape_table_name(catalog, schema, table),
            context.escape_column_name(
                catalog,
                schema,
                table,
                statement.first_column().unwrap_or_default()
            ),
        );

        Ok(vec![SqlFragment::new(sql, AffectedObject::index_of(statement))])
    }
}
