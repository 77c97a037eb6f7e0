use geoddl_core::{
    AffectedObject, CreateSpatialIndex, DialectContext, DialectId, Result, SpatialIndexGenerator,
    SqlFragment,
};

/// N-dimensional operator class, used when the statement carries z bounds.
const ND_OPERATOR_CLASS: &str = "gist_geometry_ops_nd";

/// PostGIS needs no side-table metadata; a GiST index is enough.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgisSpatialIndexGenerator;

impl SpatialIndexGenerator for PostgisSpatialIndexGenerator {
    fn name(&self) -> &str {
        "postgis spatial index generator"
    }

    fn supports(&self, dialect: DialectId) -> bool {
        dialect == DialectId::Postgres
    }

    fn generate(
        &self,
        statement: &CreateSpatialIndex,
        context: &dyn DialectContext,
    ) -> Result<Vec<SqlFragment>> {
        statement.validate()?;

        Ok(vec![SqlFragment::new(
            render_create_index(statement, context),
            AffectedObject::index_of(statement),
        )])
    }
}

fn render_create_index(statement: &CreateSpatialIndex, context: &dyn DialectContext) -> String {
    let catalog = statement.table_catalog();
    let schema = statement.table_schema();
    let table = statement.table_name();
    let column = statement.first_column().unwrap_or_default();

    let mut column_sql = context.escape_column_name(catalog, schema, table, column);
    if statement.bounds().min_z.is_some() && statement.bounds().max_z.is_some() {
        column_sql.push(' ');
        column_sql.push_str(ND_OPERATOR_CLASS);
    }

    let mut sql = format!(
        "CREATE INDEX {} ON {} USING GIST ({column_sql})",
        context.escape_index_name(catalog, schema, statement.index_name()),
        context.escape_table_name(catalog, schema, table),
    );

    if let Some(tablespace) = statement
        .tablespace()
        .map(str::trim)
        .filter(|tablespace| !tablespace.is_empty())
    {
        sql.push_str(" TABLESPACE ");
        sql.push_str(&context.escape_tablespace_name(tablespace));
    }

    sql
}
