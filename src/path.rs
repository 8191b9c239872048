//! Backend path rendering.
//!
//! Each proxy route owns a fixed template such as `/projects/{projectId}/pages`.
//! Rendering substitutes route parameters verbatim; the values were already
//! percent-decoded by the router and are not re-encoded here.

use std::fmt;

/// A rendered backend path, optionally carrying a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendPath(String);

impl BackendPath {
    /// Substitute `{name}` placeholders in `template` with the matching values.
    ///
    /// Substitution is single-pass: inserted values are never scanned for
    /// placeholders. Unknown placeholders are kept as written.
    pub fn render(template: &str, params: &[(&str, &str)]) -> Self {
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match params.iter().find(|(key, _)| *key == name) {
                        Some((_, value)) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);

        Self(out)
    }

    /// Append the raw query string, if there is one.
    ///
    /// `None` and `Some("")` both leave the path untouched, so a bare `?` is
    /// never produced.
    #[must_use]
    pub fn with_query(mut self, query: Option<&str>) -> Self {
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            self.0.push('?');
            self.0.push_str(query);
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BackendPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
