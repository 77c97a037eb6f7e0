use std::fmt::Write as _;

use geoddl_core::{
    AffectedObject, CreateSpatialIndex, DialectContext, DialectId, DimensionElement, ObjectKind,
    ObjectName, Result, SpatialIndexGenerator, SqlFragment,
};
use rust_decimal::Decimal;

use crate::layer_gtype;

pub const METADATA_VIEW: &str = "USER_SDO_GEOM_METADATA";
pub const SPATIAL_INDEX_TYPE: &str = "mdsys.spatial_index";

const METADATA_TABLE: &str = "user_sdo_geom_metadata";
const NULL_LITERAL: &str = "NULL";

/// Registers the dimensional metadata row, then builds the domain index.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleSpatialIndexGenerator;

impl SpatialIndexGenerator for OracleSpatialIndexGenerator {
    fn name(&self) -> &str {
        "oracle spatial index generator"
    }

    fn supports(&self, dialect: DialectId) -> bool {
        dialect == DialectId::Oracle
    }

    fn generate(
        &self,
        statement: &CreateSpatialIndex,
        context: &dyn DialectContext,
    ) -> Result<Vec<SqlFragment>> {
        statement.validate()?;

        let metadata_view = AffectedObject::View(ObjectName::named(METADATA_VIEW));
        Ok(vec![
            SqlFragment::new(
                render_delete_metadata(statement, context),
                metadata_view.clone(),
            ),
            SqlFragment::new(render_insert_metadata(statement, context), metadata_view),
            SqlFragment::new(
                render_create_index(statement, context),
                AffectedObject::index_of(statement),
            ),
        ])
    }
}

/// Clears any row left behind by an earlier partial run so the insert that
/// follows cannot collide.
fn render_delete_metadata(statement: &CreateSpatialIndex, context: &dyn DialectContext) -> String {
    let (table, column) = metadata_key(statement, context);
    format!(
        "DELETE FROM {METADATA_TABLE} WHERE table_name = {} AND column_name = {}",
        render_string_literal(&table),
        render_string_literal(&column)
    )
}

fn render_insert_metadata(statement: &CreateSpatialIndex, context: &dyn DialectContext) -> String {
    let (table, column) = metadata_key(statement, context);
    let dimensions = statement
        .dimension_elements()
        .iter()
        .map(render_dimension_element)
        .collect::<Vec<_>>()
        .join(", ");
    let srid = statement
        .srid()
        .map_or_else(|| NULL_LITERAL.to_string(), |srid| srid.to_string());

    format!(
        "INSERT INTO {METADATA_TABLE}(table_name, column_name, diminfo, srid) \
         VALUES ({}, {}, SDO_DIM_ARRAY({dimensions}), {srid})",
        render_string_literal(&table),
        render_string_literal(&column)
    )
}

fn render_create_index(statement: &CreateSpatialIndex, context: &dyn DialectContext) -> String {
    let catalog = statement.table_catalog();
    let schema = statement.table_schema();
    let table = statement.table_name();

    let mut sql = String::from("CREATE INDEX ");
    sql.push_str(&context.escape_index_name(catalog, schema, statement.index_name()));
    sql.push_str(" ON ");
    sql.push_str(&context.escape_table_name(catalog, schema, table));
    write!(
        sql,
        " ({}) INDEXTYPE IS {SPATIAL_INDEX_TYPE}",
        context.escape_column_name(catalog, schema, table, first_column(statement))
    )
    .expect("writing to String should not fail");

    let parameters = index_parameters(statement, context);
    if !parameters.is_empty() {
        write!(sql, " PARAMETERS ('{}')", parameters.join(" "))
            .expect("writing to String should not fail");
    }

    sql
}

fn index_parameters(statement: &CreateSpatialIndex, context: &dyn DialectContext) -> Vec<String> {
    let mut parameters = Vec::new();

    if let Some(geometry_type) = statement.geometry_type() {
        parameters.push(format!("layer_gtype={}", layer_gtype(geometry_type)));
    }
    if let Some(tablespace) = statement
        .tablespace()
        .map(str::trim)
        .filter(|tablespace| !tablespace.is_empty())
    {
        parameters.push(format!(
            "tablespace={}",
            context.escape_tablespace_name(tablespace)
        ));
    }

    parameters
}

fn metadata_key(statement: &CreateSpatialIndex, context: &dyn DialectContext) -> (String, String) {
    (
        context.correct_object_name(statement.table_name().trim(), ObjectKind::Table),
        context.correct_object_name(first_column(statement).trim(), ObjectKind::Column),
    )
}

fn render_dimension_element(element: &DimensionElement) -> String {
    format!(
        "SDO_DIM_ELEMENT('{}', {}, {}, {})",
        element.axis,
        render_number(element.min),
        render_number(element.max),
        render_number(element.tolerance)
    )
}

// Decimal's Display keeps the scale it was parsed with.
fn render_number(value: Option<Decimal>) -> String {
    value.map_or_else(|| NULL_LITERAL.to_string(), |value| value.to_string())
}

fn render_string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn first_column(statement: &CreateSpatialIndex) -> &str {
    // validate() has already rejected an empty column list.
    statement.first_column().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literals_double_embedded_quotes() {
        assert_eq!(render_string_literal("O'BRIEN"), "'O''BRIEN'");
    }

    #[test]
    fn absent_numbers_render_as_null() {
        assert_eq!(render_number(None), "NULL");
        assert_eq!(
            render_number(Some("0.0050000".parse().expect("decimal"))),
            "0.0050000"
        );
    }
}
