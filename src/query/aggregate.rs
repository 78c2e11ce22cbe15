use serde_json::{json, Value};

use super::{quote_string, render_args};

/// An `Aggregate` request over a collection.
///
/// `group_by` and `object_limit` are bound as variables; search and filter
/// clauses are pre-serialized substrings passed through unmodified.
#[derive(Debug, Clone, Default)]
pub struct AggregateRequest {
    pub class_name: String,
    pub fields: String,
    pub group_by: Option<Vec<String>>,
    pub object_limit: Option<i64>,
    pub near_text: Option<String>,
    pub near_vector: Option<String>,
    pub near_object: Option<String>,
    pub near_image: Option<String>,
    pub where_filter: Option<String>,
    pub tenant: Option<String>,
}

impl AggregateRequest {
    pub fn new(class_name: impl Into<String>, fields: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: fields.into(),
            ..Self::default()
        }
    }

    pub fn group_by(mut self, properties: Vec<String>) -> Self {
        self.group_by = Some(properties);
        self
    }

    pub fn object_limit(mut self, object_limit: i64) -> Self {
        self.object_limit = Some(object_limit);
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

    pub fn near_image(mut self, near_image: impl Into<String>) -> Self {
        self.near_image = Some(near_image.into());
        self
    }

    pub fn where_filter(mut self, filter: impl Into<String>) -> Self {
        self.where_filter = Some(filter.into());
        self
    }

    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub(crate) fn compose(&self) -> String {
        let args = render_args(vec![
            ("objectLimit", Some("$object_limit".to_string())),
            ("groupBy", Some("$group_by".to_string())),
            ("nearText", self.near_text.clone()),
            ("nearVector", self.near_vector.clone()),
            ("nearObject", self.near_object.clone()),
            ("nearImage", self.near_image.clone()),
            ("where", self.where_filter.clone()),
            ("tenant", self.tenant.as_deref().map(quote_string)),
        ]);

        format!(
            "query($group_by: [String], $object_limit: Int) {{\n  Aggregate {{\n    {}({}) {{\n      {}\n    }}\n  }}\n}}",
            self.class_name, args, self.fields
        )
    }

    pub(crate) fn variables(&self) -> Value {
        json!({
            "group_by": self.group_by,
            "object_limit": self.object_limit,
        })
    }
}
