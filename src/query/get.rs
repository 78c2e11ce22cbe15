use serde_json::{json, Value};

use super::{quote_string, render_args};

/// A `Get` object-retrieval request.
///
/// Clause values other than `tenant` are pre-serialized GraphQL substrings
/// and pass through unmodified; the composer performs no validation of
/// clause compatibility (e.g. `near_text` together with `near_vector` is
/// forwarded as-is and left to the server to reject).
#[derive(Debug, Clone, Default)]
pub struct GetRequest {
    pub class_name: String,
    pub fields: String,
    pub after: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub autocut: Option<i64>,
    pub sort: Option<String>,
    pub where_filter: Option<String>,
    pub near_text: Option<String>,
    pub near_vector: Option<String>,
    pub near_object: Option<String>,
    pub near_image: Option<String>,
    pub hybrid: Option<String>,
    pub bm25: Option<String>,
    pub ask: Option<String>,
    pub group_by: Option<String>,
    pub tenant: Option<String>,
}

impl GetRequest {
    pub fn new(class_name: impl Into<String>, fields: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: fields.into(),
            ..Self::default()
        }
    }

    /// Cursor token for cursor-based pagination.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn autocut(mut self, autocut: i64) -> Self {
        self.autocut = Some(autocut);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Filter predicate, e.g. `{path: ["title"], operator: Like, valueText: "wine*"}`.
    pub fn where_filter(mut self, filter: impl Into<String>) -> Self {
        self.where_filter = Some(filter.into());
        self
    }

    pub fn near_text(mut self, near_text: impl Into<String>) -> Self {
        self.near_text = Some(near_text.into());
        self
    }

    pub fn near_vector(mut self, near_vector: impl Into<String>) -> Self {
        self.near_vector = Some(near_vector.into());
        self
    }

    pub fn near_object(mut self, near_object: impl Into<String>) -> Self {
        self.near_object = Some(near_object.into());
        self
    }

    /// See [`crate::query::near_image`] for building the clause value from
    /// raw image bytes.
    pub fn near_image(mut self, near_image: impl Into<String>) -> Self {
        self.near_image = Some(near_image.into());
        self
    }

    pub fn hybrid(mut self, hybrid: impl Into<String>) -> Self {
        self.hybrid = Some(hybrid.into());
        self
    }

    pub fn bm25(mut self, bm25: impl Into<String>) -> Self {
        self.bm25 = Some(bm25.into());
        self
    }

    pub fn ask(mut self, ask: impl Into<String>) -> Self {
        self.ask = Some(ask.into());
        self
    }

    pub fn group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = Some(group_by.into());
        self
    }

    /// Tenant name; quoted by the composer.
    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// Composes the GraphQL query string. Pagination is bound to declared
    /// variables rather than inlined; optional clauses appear only when set,
    /// in a fixed canonical order.
    pub(crate) fn compose(&self) -> String {
        let args = render_args(vec![
            ("after", Some("$after".to_string())),
            ("limit", Some("$limit".to_string())),
            ("offset", Some("$offset".to_string())),
            ("autocut", self.autocut.map(|n| n.to_string())),
            ("nearText", self.near_text.clone()),
            ("nearVector", self.near_vector.clone()),
            ("nearObject", self.near_object.clone()),
            ("nearImage", self.near_image.clone()),
            ("hybrid", self.hybrid.clone()),
            ("bm25", self.bm25.clone()),
            ("ask", self.ask.clone()),
            ("where", self.where_filter.clone()),
            ("sort", self.sort.clone()),
            ("groupBy", self.group_by.clone()),
            ("tenant", self.tenant.as_deref().map(quote_string)),
        ]);

        format!(
            "query($after: String, $limit: Int, $offset: Int) {{\n  Get {{\n    {}({}) {{\n      {}\n    }}\n  }}\n}}",
            self.class_name, args, self.fields
        )
    }

    pub(crate) fn variables(&self) -> Value {
        json!({
            "after": self.after,
            "limit": self.limit,
            "offset": self.offset,
        })
    }
}
