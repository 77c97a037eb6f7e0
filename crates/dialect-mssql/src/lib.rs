mod generator;

use geoddl_core::{
    DialectContext, DialectId, GeneratorRegistry, IdentifierRules, NameCase, ObjectKind,
    Qualification, QuoteStyle, QuotingPolicy,
};

pub use generator::MssqlSpatialIndexGenerator;

const BATCH_SEPARATOR: &str = "GO";

pub const IDENTIFIER_RULES: IdentifierRules = IdentifierRules {
    case: NameCase::Preserve,
    quotes: QuoteStyle::Bracket,
    policy: QuotingPolicy::Always,
    qualification: Qualification::CatalogAndSchema,
    reserved: &[],
};

#[derive(Debug, Clone, Copy)]
pub struct MssqlDialect {
    rules: IdentifierRules,
}

impl Default for MssqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl MssqlDialect {
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

impl DialectContext for MssqlDialect {
    fn dialect(&self) -> DialectId {
        DialectId::Mssql
    }

    fn correct_object_name(&self, name: &str, _kind: ObjectKind) -> String {
        self.rules.correct(name)
    }

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

    fn escape_tablespace_name(&self, name: &str) -> String {
        self.rules.quote(name)
    }

    fn batch_separator(&self) -> &str {
        BATCH_SEPARATOR
    }
}

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register(Box::new(MssqlSpatialIndexGenerator));
}
