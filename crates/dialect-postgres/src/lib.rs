mod generator;

use geoddl_core::{
    DialectContext, DialectId, GeneratorRegistry, IdentifierRules, NameCase, ObjectKind,
    Qualification, QuoteStyle, QuotingPolicy,
};

pub use generator::PostgisSpatialIndexGenerator;

const RESERVED_WORDS: &[&str] = &[
    "ALL", "ANALYSE", "ANALYZE", "AND", "ANY", "ARRAY", "AS", "ASC", "ASYMMETRIC", "BOTH", "CASE",
    "CAST", "CHECK", "COLLATE", "COLUMN", "CONSTRAINT", "CREATE", "CURRENT_DATE", "CURRENT_ROLE",
    "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER", "DEFAULT", "DEFERRABLE", "DESC",
    "DISTINCT", "DO", "ELSE", "END", "EXCEPT", "FALSE", "FETCH", "FOR", "FOREIGN", "FROM", "GRANT",
    "GROUP", "HAVING", "IN", "INITIALLY", "INTERSECT", "INTO", "LATERAL", "LEADING", "LIMIT",
    "LOCALTIME", "LOCALTIMESTAMP", "NOT", "NULL", "OFFSET", "ON", "ONLY", "OR", "ORDER", "PLACING",
    "PRIMARY", "REFERENCES", "RETURNING", "SELECT", "SESSION_USER", "SOME", "SYMMETRIC", "TABLE",
    "THEN", "TO", "TRAILING", "TRUE", "UNION", "UNIQUE", "USER", "USING", "VARIADIC", "WHEN",
    "WHERE", "WINDOW", "WITH",
];

pub const IDENTIFIER_RULES: IdentifierRules = IdentifierRules {
    case: NameCase::Lower,
    quotes: QuoteStyle::DoubleQuote,
    policy: QuotingPolicy::WhenNeeded,
    qualification: Qualification::SchemaOnly,
    reserved: RESERVED_WORDS,
};

#[derive(Debug, Clone, Copy)]
pub struct PostgresDialect {
    rules: IdentifierRules,
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl PostgresDialect {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: IDENTIFIER_RULES,
        }
    }

    #[must_use]
    pub const fn with_quoting(policy: QuotingPolicy) -> Self {
        Self {
            rules: IDENTIFIER_RULES.with_policy(policy),
        }
    }
}

impl DialectContext for PostgresDialect {
    fn dialect(&self) -> DialectId {
        DialectId::Postgres
    }

    fn correct_object_name(&self, name: &str, _kind: ObjectKind) -> String {
        self.rules.correct(name)
    }

    // Postgres creates the index in the table's schema; a qualified index
    // name is rejected.
    fn escape_index_name(
        &self,
        _catalog: Option<&str>,
        _schema: Option<&str>,
        name: &str,
    ) -> String {
        self.rules.quote(name)
    }

    fn escape_table_name(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        name: &str,
    ) -> String {
        self.rules.qualify(catalog, schema, name)
    }

    fn escape_column_name(
        &self,
        _catalog: Option<&str>,
        _schema: Option<&str>,
        _table: &str,
        column: &str,
    ) -> String {
        self.rules.quote(column)
    }
}

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register(Box::new(PostgisSpatialIndexGenerator));
}
