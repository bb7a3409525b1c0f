//! PostgREST query strings: column filters, ordering and limits.

use std::fmt::Display;

/// Query parameters for a table request, kept in insertion order.
///
/// ```ignore
/// let query = Query::new()
///     .select("*,categories(name,color)")
///     .eq("user_id", &user.id)
///     .gte("date", start)
///     .order("date", false);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(self, columns: &str) -> Self {
        self.set("select", columns.to_string())
    }

    pub fn eq(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "eq", value)
    }

    pub fn gte(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "gte", value)
    }

    pub fn lt(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "lt", value)
    }

    /// Adds a sort key. Repeated calls add tie-breakers.
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let key = format!("{}.{}", column, if ascending { "asc" } else { "desc" });
        if let Some((_, value)) = self.pairs.iter_mut().find(|(k, _)| k == "order") {
            value.push(',');
            value.push_str(&key);
        } else {
            self.pairs.push(("order".to_string(), key));
        }
        self
    }

    pub fn limit(self, limit: usize) -> Self {
        self.set("limit", limit.to_string())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    fn filter(mut self, column: &str, operator: &str, value: impl Display) -> Self {
        self.pairs
            .push((column.to_string(), format!("{}.{}", operator, value)));
        self
    }

    fn set(mut self, key: &str, value: String) -> Self {
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.push((key.to_string(), value));
        self
    }
}
