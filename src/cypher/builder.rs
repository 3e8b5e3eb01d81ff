//! Fluent builder for Cypher statements
//!
//! Clauses are rendered in call order, one per line. `RETURN`, `ORDER BY`,
//! `SKIP` and `LIMIT` always close the statement, so `.return_("m").limit(10)`
//! and `.limit(10).return_("m")` render the same text.

use super::error::{GraphError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// A statement ready to be submitted: query text, named parameters and the
/// names of the returned columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub text: String,
    pub parameters: Map<String, Value>,
    #[serde(skip)]
    pub columns: Vec<String>,
}

impl Statement {
    /// Statement without a RETURN clause
    pub fn is_write_only(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Builder for Cypher queries with `$name` parameters
#[derive(Debug, Clone, Default)]
pub struct CypherQuery {
    clauses: Vec<String>,
    returns: Vec<String>,
    distinct: bool,
    order_by: Vec<String>,
    skip: Option<u64>,
    limit: Option<u64>,
    parameters: Map<String, Value>,
    param_error: Option<String>,
}

impl CypherQuery {
    pub fn new() -> Self {
        Self::default()
    }

    fn clause(mut self, keyword: &str, body: impl AsRef<str>) -> Self {
        self.clauses.push(format!("{} {}", keyword, body.as_ref().trim()));
        self
    }

    /// `MATCH pattern`
    pub fn match_(self, pattern: impl AsRef<str>) -> Self {
        self.clause("MATCH", pattern)
    }

    /// `MATCH p1, p2, ...` for several comma-separated patterns
    pub fn match_all<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.clause("MATCH", joined)
    }

    pub fn optional_match(self, pattern: impl AsRef<str>) -> Self {
        self.clause("OPTIONAL MATCH", pattern)
    }

    pub fn where_(self, predicate: impl AsRef<str>) -> Self {
        self.clause("WHERE", predicate)
    }

    pub fn with(self, items: impl AsRef<str>) -> Self {
        self.clause("WITH", items)
    }

    pub fn create(self, pattern: impl AsRef<str>) -> Self {
        self.clause("CREATE", pattern)
    }

    pub fn merge(self, pattern: impl AsRef<str>) -> Self {
        self.clause("MERGE", pattern)
    }

    pub fn set(self, assignment: impl AsRef<str>) -> Self {
        self.clause("SET", assignment)
    }

    pub fn delete(self, items: impl AsRef<str>) -> Self {
        self.clause("DELETE", items)
    }

    pub fn detach_delete(self, items: impl AsRef<str>) -> Self {
        self.clause("DETACH DELETE", items)
    }

    /// Add a RETURN item. Repeated calls extend the same RETURN clause.
    /// An item may carry an alias (`collect(m) AS movies`), which becomes
    /// the column name.
    pub fn return_(mut self, item: impl AsRef<str>) -> Self {
        self.returns.push(item.as_ref().trim().to_string());
        self
    }

    /// Like [`CypherQuery::return_`], rendering `RETURN DISTINCT`
    pub fn return_distinct(mut self, item: impl AsRef<str>) -> Self {
        self.distinct = true;
        self.return_(item)
    }

    pub fn order_by(mut self, expr: impl AsRef<str>) -> Self {
        self.order_by.push(expr.as_ref().trim().to_string());
        self
    }

    pub fn skip(mut self, n: u64) -> Self {
        self.skip = Some(n);
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Bind `$name` to a value. Binding the same name again replaces it.
    pub fn with_param<V: Serialize>(mut self, name: impl Into<String>, value: V) -> Self {
        let name = name.into();
        match serde_json::to_value(value) {
            Ok(v) => {
                self.parameters.insert(name, v);
            }
            Err(e) => {
                if self.param_error.is_none() {
                    self.param_error = Some(format!("{}: {}", name, e));
                }
            }
        }
        self
    }

    /// Render the query text without validating it
    pub fn text(&self) -> String {
        let mut lines = self.clauses.clone();
        if !self.returns.is_empty() {
            let keyword = if self.distinct {
                "RETURN DISTINCT"
            } else {
                "RETURN"
            };
            lines.push(format!("{} {}", keyword, self.returns.join(", ")));
        }
        if !self.order_by.is_empty() {
            lines.push(format!("ORDER BY {}", self.order_by.join(", ")));
        }
        if let Some(n) = self.skip {
            lines.push(format!("SKIP {}", n));
        }
        if let Some(n) = self.limit {
            lines.push(format!("LIMIT {}", n));
        }
        lines.join("\n")
    }

    /// Validate the query and produce a [`Statement`]
    pub fn build(self) -> Result<Statement> {
        if self.clauses.is_empty() && self.returns.is_empty() {
            return Err(GraphError::EmptyQuery);
        }
        if let Some(err) = self.param_error.clone() {
            return Err(GraphError::Parameter(err));
        }
        if let Some(bad) = self.parameters.keys().find(|k| !is_identifier(k)) {
            return Err(GraphError::InvalidParameterName(bad.clone()));
        }

        let text = self.text();
        for name in parameter_references(&text) {
            if !self.parameters.contains_key(&name) {
                return Err(GraphError::UnboundParameter(name));
            }
        }

        let columns = self.returns.iter().map(|r| column_name(r)).collect();

        Ok(Statement {
            text,
            parameters: self.parameters,
            columns,
        })
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Column name of a RETURN item: the alias after the last `AS` keyword outside
/// string literals, or the item itself
fn column_name(item: &str) -> String {
    let bytes = item.as_bytes();
    let mut quote: Option<u8> = None;
    let mut alias_at = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 1;
            } else if b == q {
                quote = None;
            }
        } else if matches!(b, b'\'' | b'"' | b'`') {
            quote = Some(b);
        } else if i > 0
            && bytes[i - 1].is_ascii_whitespace()
            && i + 2 < bytes.len()
            && bytes[i..i + 2].eq_ignore_ascii_case(b"as")
            && bytes[i + 2].is_ascii_whitespace()
        {
            alias_at = Some(i + 2);
        }
        i += 1;
    }

    match alias_at {
        Some(idx) => item[idx..].trim().trim_matches('`').to_string(),
        None => item.trim().to_string(),
    }
}

/// Names of all `$param` references outside string literals, in order of appearance
pub(crate) fn parameter_references(text: &str) -> Vec<String> {
    let mut refs: Vec<String> = Vec::new();
    let mut quote: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            if c == '\\' {
                chars.next();
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '$' => {
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '_' {
                        name.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if !name.is_empty() && !refs.contains(&name) {
                    refs.push(name);
                }
            }
            _ => {}
        }
    }
    refs
}
