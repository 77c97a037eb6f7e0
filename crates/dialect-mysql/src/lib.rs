mod generator;

use geoddl_core::{
    DialectContext, DialectId, GeneratorRegistry, IdentifierRules, NameCase, ObjectKind,
    Qualification, QuoteStyle, QuotingPolicy,
};

pub use generator::MysqlSpatialIndexGenerator;

const RESERVED_WORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "AS", "ASC", "BETWEEN", "BY", "CASE", "CHECK", "COLUMN",
    "CONSTRAINT", "CREATE", "CROSS", "DATABASE", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP",
    "ELSE", "EXISTS", "FALSE", "FOR", "FOREIGN", "FROM", "FULLTEXT", "GROUP", "HAVING", "IN",
    "INDEX", "INNER", "INSERT", "INTO", "IS", "JOIN", "KEY", "KEYS", "LEFT", "LIKE", "LIMIT",
    "NOT", "NULL", "ON", "OR", "ORDER", "PRIMARY", "REFERENCES", "RIGHT", "SCHEMA", "SELECT",
    "SET", "SPATIAL", "TABLE", "THEN", "TO", "TRUE", "UNION", "UNIQUE", "UPDATE", "USING",
    "VALUES", "WHEN", "WHERE", "WITH",
];

pub const IDENTIFIER_RULES: IdentifierRules = IdentifierRules {
    case: NameCase::Preserve,
    quotes: QuoteStyle::Backtick,
    policy: QuotingPolicy::WhenNeeded,
    qualification: Qualification::CatalogAsSchema,
    reserved: RESERVED_WORDS,
};

#[derive(Debug, Clone, Copy)]
pub struct MysqlDialect {
    rules: IdentifierRules,
}

impl Default for MysqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl MysqlDialect {
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

impl DialectContext for MysqlDialect {
    fn dialect(&self) -> DialectId {
        DialectId::MySql
    }

    fn correct_object_name(&self, name: &str, _kind: ObjectKind) -> String {
        self.rules.correct(name)
    }

    // Index names are scoped to their table in MySQL.
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
    registry.register(Box::new(MysqlSpatialIndexGenerator));
}
