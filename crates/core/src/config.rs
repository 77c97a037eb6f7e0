#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
    Upper,
    Lower,
    Preserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    DoubleQuote,
    Backtick,
    Bracket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuotingPolicy {
    #[default]
    WhenNeeded,
    Always,
}

/// How catalog and schema prefixes combine into a qualified name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualification {
    SchemaOnly,
    /// The catalog stands in for the schema when no schema is given.
    CatalogAsSchema,
    CatalogAndSchema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierRules {
    pub case: NameCase,
    pub quotes: QuoteStyle,
    pub policy: QuotingPolicy,
    pub qualification: Qualification,
    pub reserved: &'static [&'static str],
}

impl IdentifierRules {
    #[must_use]
    pub const fn with_policy(mut self, policy: QuotingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Applies the case folding rule. A name wrapped in the dialect's quotes
    /// is taken literally with the quotes removed.
    #[must_use]
    pub fn correct(&self, name: &str) -> String {
        let name = name.trim();
        if let Some(inner) = self.strip_quotes(name) {
            return inner.to_string();
        }

        self.fold(name)
    }

    /// Quotes `name` when the policy asks for it. A name that arrives already
    /// quoted stays quoted so its exact case survives; any other name is
    /// folded first so the quoted form names the object `correct` returns.
    #[must_use]
    pub fn quote(&self, name: &str) -> String {
        let name = name.trim();
        if let Some(inner) = self.strip_quotes(name) {
            return self.wrap(inner);
        }
        if self.policy == QuotingPolicy::WhenNeeded && !self.needs_quoting(name) {
            return name.to_string();
        }

        self.wrap(&self.fold(name))
    }

    fn fold(&self, name: &str) -> String {
        match self.case {
            NameCase::Upper => name.to_uppercase(),
            NameCase::Lower => name.to_lowercase(),
            NameCase::Preserve => name.to_string(),
        }
    }

    fn wrap(&self, name: &str) -> String {
        let (open, close) = self.quote_chars();
        let escaped = name.replace(close, &format!("{close}{close}"));
        format!("{open}{escaped}{close}")
    }

    #[must_use]
    pub fn qualify(&self, catalog: Option<&str>, schema: Option<&str>, name: &str) -> String {
        let catalog = non_blank(catalog);
        let schema = non_blank(schema);

        let prefixes: Vec<&str> = match self.qualification {
            Qualification::SchemaOnly => schema.into_iter().collect(),
            Qualification::CatalogAsSchema => schema.or(catalog).into_iter().collect(),
            Qualification::CatalogAndSchema => match (catalog, schema) {
                (Some(catalog), Some(schema)) => vec![catalog, schema],
                // Two dots keep the default schema when only the database is named.
                (Some(catalog), None) => vec![catalog, ""],
                (None, Some(schema)) => vec![schema],
                (None, None) => Vec::new(),
            },
        };

        let mut parts: Vec<String> = prefixes
            .into_iter()
            .map(|prefix| {
                if prefix.is_empty() {
                    String::new()
                } else {
                    self.quote(prefix)
                }
            })
            .collect();
        parts.push(self.quote(name));
        parts.join(".")
    }

    fn needs_quoting(&self, name: &str) -> bool {
        !is_plain_identifier(name)
            || self
                .reserved
                .iter()
                .any(|word| word.eq_ignore_ascii_case(name))
    }

    fn quote_chars(&self) -> (char, char) {
        match self.quotes {
            QuoteStyle::DoubleQuote => ('"', '"'),
            QuoteStyle::Backtick => ('`', '`'),
            QuoteStyle::Bracket => ('[', ']'),
        }
    }

    fn strip_quotes<'a>(&self, name: &'a str) -> Option<&'a str> {
        let (open, close) = self.quote_chars();
        name.strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
            .filter(|inner| !inner.is_empty())
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '$' | '#'))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
