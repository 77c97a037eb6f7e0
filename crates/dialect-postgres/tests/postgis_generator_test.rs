use geoddl_core::{
    AffectedObject, BoundingBox, CreateSpatialIndex, Decimal, DialectContext, DialectId,
    ObjectKind, ObjectName, QuotingPolicy, Renderer, SpatialIndexGenerator, parse_decimal,
};
use geoddl_dialect_postgres::{PostgisSpatialIndexGenerator, PostgresDialect};
use pg_query::protobuf::node::Node as NodeEnum;

fn generate_sql(statement: &CreateSpatialIndex, dialect: &PostgresDialect) -> String {
    let fragments = PostgisSpatialIndexGenerator
        .generate(statement, dialect)
        .expect("postgis generation should succeed");
    assert_eq!(fragments.len(), 1);
    fragments[0].sql.clone()
}

fn bound(raw: &str) -> Decimal {
    parse_decimal("bound", raw).expect("decimal")
}

#[test]
fn emits_single_gist_index() {
    let statement = CreateSpatialIndex::builder("idx_geom", "roads")
        .column("geom")
        .srid(4326)
        .geometry_type("LineString")
        .build();

    let fragments = PostgisSpatialIndexGenerator
        .generate(&statement, &PostgresDialect::new())
        .expect("postgis generation should succeed");

    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].sql, "CREATE INDEX idx_geom ON roads USING GIST (geom)");
    assert_eq!(
        fragments[0].affected,
        AffectedObject::Index {
            index: ObjectName::named("idx_geom"),
            table: ObjectName::named("roads"),
        }
    );
}

#[test]
fn schema_qualifies_table_only_and_tablespace_is_appended() {
    let statement = CreateSpatialIndex::builder("idx_geom", "roads")
        .catalog("gisdb")
        .schema("gis")
        .column("geom")
        .tablespace("fast_ssd")
        .build();

    assert_eq!(
        generate_sql(&statement, &PostgresDialect::new()),
        "CREATE INDEX idx_geom ON gis.roads USING GIST (geom) TABLESPACE fast_ssd"
    );
}

#[test]
fn z_bounds_select_nd_operator_class() {
    let statement = CreateSpatialIndex::builder("idx_geom", "terrain")
        .column("surface")
        .bounding_box(
            BoundingBox::xy(bound("0"), bound("10"), bound("0"), bound("10"))
                .with_z(bound("-5"), bound("5")),
        )
        .tolerance(bound("0.01"))
        .build();

    assert_eq!(
        generate_sql(&statement, &PostgresDialect::new()),
        "CREATE INDEX idx_geom ON terrain USING GIST (surface gist_geometry_ops_nd)"
    );
}

#[test]
fn reserved_and_mixed_case_names_are_quoted() {
    let statement = CreateSpatialIndex::builder("Idx Geom", "user")
        .column("\"Geom\"")
        .build();

    assert_eq!(
        generate_sql(&statement, &PostgresDialect::new()),
        "CREATE INDEX \"idx geom\" ON \"user\" USING GIST (\"Geom\")"
    );
    assert_eq!(
        PostgresDialect::new().correct_object_name("ROADS", ObjectKind::Table),
        "roads"
    );
}

#[test]
fn quote_all_policy_quotes_every_identifier() {
    let statement = CreateSpatialIndex::builder("idx_geom", "roads")
        .schema("gis")
        .column("geom")
        .build();

    assert_eq!(
        generate_sql(&statement, &PostgresDialect::with_quoting(QuotingPolicy::Always)),
        "CREATE INDEX \"idx_geom\" ON \"gis\".\"roads\" USING GIST (\"geom\")"
    );
}

#[test]
fn quote_all_policy_folds_unquoted_names_to_lowercase() {
    let statement = CreateSpatialIndex::builder("Idx_Geom", "Roads")
        .column("GEOM")
        .build();
    let dialect = PostgresDialect::with_quoting(QuotingPolicy::Always);

    assert_eq!(
        generate_sql(&statement, &dialect),
        "CREATE INDEX \"idx_geom\" ON \"roads\" USING GIST (\"geom\")"
    );
    assert_eq!(dialect.correct_object_name("Roads", ObjectKind::Table), "roads");
}

#[test]
fn rendered_script_parses_as_index_statement() {
    let statement = CreateSpatialIndex::builder("idx_geom", "roads")
        .schema("gis")
        .column("geom")
        .tablespace("fast_ssd")
        .build();
    let dialect = PostgresDialect::new();
    let fragments = PostgisSpatialIndexGenerator
        .generate(&statement, &dialect)
        .expect("postgis generation should succeed");
    let script = Renderer::new(&dialect).render(&fragments);

    let parsed = pg_query::parse(&script).expect("script should parse");
    assert_eq!(parsed.protobuf.stmts.len(), 1);
    let node = parsed.protobuf.stmts[0]
        .stmt
        .as_ref()
        .and_then(|stmt| stmt.node.as_ref());
    let Some(NodeEnum::IndexStmt(index)) = node else {
        panic!("expected IndexStmt, got {node:?}");
    };

    assert_eq!(index.idxname, "idx_geom");
    assert_eq!(index.access_method, "gist");
    assert_eq!(index.table_space, "fast_ssd");
    let relation = index.relation.as_ref().expect("relation");
    assert_eq!(relation.schemaname, "gis");
    assert_eq!(relation.relname, "roads");
}

#[test]
fn claims_only_postgres() {
    let generator = PostgisSpatialIndexGenerator;
    assert!(generator.supports(DialectId::Postgres));
    assert!(!generator.supports(DialectId::Oracle));
    assert_eq!(PostgresDialect::new().statement_terminator(), ";");
}
