#[path = "support/fake_dialect.rs"]
mod fake_dialect;

use fake_dialect::FakeContext;
use geoddl_core::{
    AffectedObject, DialectContext, DialectId, ObjectKind, ObjectName, Renderer, SqlFragment,
};

struct BatchedContext;

impl DialectContext for BatchedContext {
    fn dialect(&self) -> DialectId {
        DialectId::Mssql
    }

    fn correct_object_name(&self, name: &str, _kind: ObjectKind) -> String {
        name.to_string()
    }

    fn escape_index_name(
        &self,
        _catalog: Option<&str>,
        _schema: Option<&str>,
        name: &str,
    ) -> String {
        name.to_string()
    }

    fn escape_table_name(
        &self,
        _catalog: Option<&str>,
        _schema: Option<&str>,
        name: &str,
    ) -> String {
        name.to_string()
    }

    fn escape_column_name(
        &self,
        _catalog: Option<&str>,
        _schema: Option<&str>,
        _table: &str,
        column: &str,
    ) -> String {
        column.to_string()
    }

    fn batch_separator(&self) -> &str {
        "GO"
    }
}

fn fragments() -> Vec<SqlFragment> {
    let table = AffectedObject::Table(ObjectName::named("roads"));
    vec![
        SqlFragment::new("DELETE FROM meta", table.clone()),
        SqlFragment::new("CREATE INDEX idx ON roads (geom)", table),
    ]
}

#[test]
fn renders_fragments_in_order_with_terminators() {
    let rendered = Renderer::new(&FakeContext::new(DialectId::Oracle)).render(&fragments());
    assert_eq!(
        rendered,
        "DELETE FROM meta;\nCREATE INDEX idx ON roads (geom);\n"
    );
}

#[test]
fn batch_separator_follows_every_fragment() {
    let rendered = Renderer::new(&BatchedContext).render(&fragments());
    assert_eq!(
        rendered,
        "DELETE FROM meta;\nGO\nCREATE INDEX idx ON roads (geom);\nGO\n"
    );
}

#[test]
fn empty_fragment_list_renders_nothing() {
    assert_eq!(Renderer::new(&BatchedContext).render(&[]), "");
}

#[test]
fn object_names_display_with_prefixes() {
    let name = ObjectName {
        catalog: Some("db".to_string()),
        schema: Some("gis".to_string()),
        name: "roads".to_string(),
    };
    assert_eq!(name.to_string(), "db.gis.roads");
    assert_eq!(ObjectName::named("roads").to_string(), "roads");
}
