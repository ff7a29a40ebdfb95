//! SELECT statement builder.

/// Fluent accumulator of raw SQL clause fragments.
///
/// Clause sequences are append-only; there is no removal operation. The
/// builder never fails: every fragment is accepted as-is, and the caller is
/// responsible for sanitizing anything derived from user input.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    /// Emit the rendered statement to the log on every `render()`
    debug: bool,
    /// SELECT list fragments (empty renders as `*`)
    select_clauses: Vec<String>,
    /// FROM fragments
    from_clauses: Vec<String>,
    /// WHERE conditions; each is an independent boolean condition
    where_clauses: Vec<String>,
    /// ORDER BY fragments
    order_clauses: Vec<String>,
    /// LIMIT
    limit: Option<i64>,
    /// OFFSET (only rendered alongside LIMIT, and only when non-zero)
    offset: Option<i64>,
}

impl QueryBuilder {
    /// Create a new query builder.
    ///
    /// With `debug` enabled, every `render()` also emits the statement as a
    /// `tracing` debug event labelled `Executing:`.
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            select_clauses: Vec::new(),
            from_clauses: Vec::new(),
            where_clauses: Vec::new(),
            order_clauses: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Append a fragment to the SELECT list.
    pub fn select(&mut self, fragment: &str) -> &mut Self {
        self.select_clauses.push(fragment.to_string());
        self
    }

    /// Append a FROM fragment.
    pub fn from(&mut self, fragment: &str) -> &mut Self {
        self.from_clauses.push(fragment.to_string());
        self
    }

    /// Append a WHERE condition. Conditions are ANDed together at render time,
    /// each wrapped in its own parentheses.
    pub fn and_where(&mut self, fragment: &str) -> &mut Self {
        self.where_clauses.push(fragment.to_string());
        self
    }

    /// Append an ORDER BY fragment.
    pub fn order_by(&mut self, fragment: &str) -> &mut Self {
        self.order_clauses.push(fragment.to_string());
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based; a negative page is treated as page 1. Note that
    /// `page = 0` is deliberately *not* corrected and produces a negative
    /// offset, matching the behavior callers already depend on.
    ///
    /// A `per_page` of `None` or `Some(0)` leaves the query unpaged.
    pub fn paged(&mut self, page: i64, per_page: impl Into<Option<i64>>) -> &mut Self {
        let page = if page < 0 { 1 } else { page };
        if let Some(per_page) = per_page.into().filter(|n| *n != 0) {
            self.limit = Some(per_page);
            self.offset = Some((page - 1) * per_page);
        }
        self
    }

    /// Render the accumulated clauses into a newline-joined SELECT statement.
    ///
    /// Read-only and idempotent: repeated calls with no intervening mutation
    /// return identical strings.
    pub fn render(&self) -> String {
        let mut sql = Vec::new();

        let select_list = if self.select_clauses.is_empty() {
            "*".to_string()
        } else {
            self.select_clauses.join(", ")
        };
        sql.push(format!("SELECT {}", select_list));
        sql.push(format!("FROM {}", self.from_clauses.join(",\n ")));

        if !self.where_clauses.is_empty() {
            let conditions: Vec<String> = self
                .where_clauses
                .iter()
                .map(|c| format!("({})", c))
                .collect();
            sql.push(format!("WHERE {}", conditions.join(" AND ")));
        }

        if !self.order_clauses.is_empty() {
            sql.push(format!("ORDER BY {}", self.order_clauses.join(", ")));
        }

        if let Some(limit) = self.limit {
            sql.push(format!("LIMIT {}", limit));

            // A zero offset is suppressed, not rendered as `OFFSET 0`.
            if let Some(offset) = self.offset.filter(|o| *o != 0) {
                sql.push(format!("OFFSET {}", offset));
            }
        }

        let statement = sql.join("\n");

        if self.debug {
            tracing::debug!(target: "apphelper::sql", "Executing: {}", statement);
        }

        statement
    }
}
