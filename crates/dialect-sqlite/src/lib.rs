mod generator;

use geoddl_core::{
    DialectContext, DialectId, GeneratorRegistry, IdentifierRules, NameCase, ObjectKind,
    Qualification, QuoteStyle, QuotingPolicy,
};

pub use generator::SpatialiteSpatialIndexGenerator;

const RESERVED_WORDS: &[&str] = &[
    "ABORT", "ADD", "ALL", "ALTER", "AND", "AS", "ASC", "BETWEEN", "BY", "CASE", "CHECK",
    "COLLATE", "COLUMN", "CONSTRAINT", "CREATE", "CROSS", "DEFAULT", "DELETE", "DESC", "DISTINCT",
    "DROP", "ELSE", "END", "ESCAPE", "EXCEPT", "EXISTS", "FROM", "GROUP", "HAVING", "IN", "INDEX",
    "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "LIMIT", "NOT", "NULL", "ON", "OR", "ORDER",
    "PRIMARY", "REFERENCES", "SELECT", "SET", "TABLE", "THEN", "TO", "UNION", "UNIQUE", "UPDATE",
    "USING", "VALUES", "WHEN", "WHERE",
];

pub const IDENTIFIER_RULES: IdentifierRules = IdentifierRules {
    case: NameCase::Preserve,
    quotes: QuoteStyle::DoubleQuote,
    policy: QuotingPolicy::WhenNeeded,
    qualification: Qualification::SchemaOnly,
    reserved: RESERVED_WORDS,
};

#[derive(Debug, Clone, Copy)]
pub struct SqliteDialect {
    rules: IdentifierRules,
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SqliteDialect {
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

impl DialectContext for SqliteDialect {
    fn dialect(&self) -> DialectId {
        DialectId::Sqlite
    }

    fn correct_object_name(&self, name: &str, _kind: ObjectKind) -> String {
        self.rules.correct(name)
    }

    fn escape_index_name(
        &self,
        _catalog: Option<&str>,
        schema: Option<&str>,
        name: &str,
    ) -> String {
        self.rules.qualify(None, schema, name)
    }

    fn escape_table_name(
        &self,
        _catalog: Option<&str>,
        schema: Option<&str>,
        name: &str,
    ) -> String {
        self.rules.qualify(None, schema, name)
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
    registry.register(Box::new(SpatialiteSpatialIndexGenerator));
}
