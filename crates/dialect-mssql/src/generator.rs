use std::fmt::Write as _;

use geoddl_core::{
    AffectedObject, CreateSpatialIndex, DialectContext, DialectId, Result, SpatialIndexGenerator,
    SqlFragment,
};
use tracing::debug;

const GEOMETRY_TESSELLATION: &str = "GEOMETRY_AUTO_GRID";

/// Emits `CREATE SPATIAL INDEX`. A geometry column needs the planar
/// bounding box; without one the server infers geography tessellation.
#[derive(Debug, Default, Clone, Copy)]
pub struct MssqlSpatialIndexGenerator;

impl SpatialIndexGenerator for MssqlSpatialIndexGenerator {
    fn name(&self) -> &str {
        "mssql spatial index generator"
    }

    fn supports(&self, dialect: DialectId) -> bool {
        dialect == DialectId::Mssql
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

    let mut sql = format!(
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

    let bounds = statement.bounds();
    match bounds.planar_extent() {
        Some((min_x, min_y, max_x, max_y)) => {
            write!(
                sql,
                " USING {GEOMETRY_TESSELLATION} WITH (BOUNDING_BOX = ({min_x}, {min_y}, {max_x}, {max_y}))"
            )
            .expect("writing to String should not fail");
        }
        None if !bounds.is_empty() => {
            debug!(
                index = statement.index_name(),
                "incomplete planar bounds, omitting BOUNDING_BOX"
            );
        }
        None => {}
    }

    if let Some(filegroup) = statement
        .tablespace()
        .map(str::trim)
        .filter(|filegroup| !filegroup.is_empty())
    {
        sql.push_str(" ON ");
        sql.push_str(&context.escape_tablespace_name(filegroup));
    }

    sql
}
