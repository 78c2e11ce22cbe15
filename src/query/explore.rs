use serde_json::{json, Value};

use super::render_args;

/// An `Explore` request. Explore is cross-collection, so there is no class
/// name; `fields` selects from the beacon result shape, e.g.
/// `beacon certainty className`.
#[derive(Debug, Clone, Default)]
pub struct ExploreRequest {
    pub fields: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub near_text: Option<String>,
    pub near_vector: Option<String>,
    pub near_object: Option<String>,
}

impl ExploreRequest {
    pub fn new(fields: impl Into<String>) -> Self {
        Self {
            fields: fields.into(),
            ..Self::default()
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
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

    pub(crate) fn compose(&self) -> String {
        let args = render_args(vec![
            ("limit", Some("$limit".to_string())),
            ("offset", Some("$offset".to_string())),
            ("nearText", self.near_text.clone()),
            ("nearVector", self.near_vector.clone()),
            ("nearObject", self.near_object.clone()),
        ]);

        format!(
            "query($limit: Int, $offset: Int) {{\n  Explore({}) {{\n    {}\n  }}\n}}",
            args, self.fields
        )
    }

    pub(crate) fn variables(&self) -> Value {
        json!({
            "limit": self.limit,
            "offset": self.offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compose_has_no_collection() {
        let query = ExploreRequest::new("beacon certainty className")
            .near_text("{concepts: [\"wine\"]}")
            .compose();
        assert!(query.contains("Explore(limit: $limit, offset: $offset, nearText: {concepts: [\"wine\"]})"));
        assert!(query.contains("beacon certainty className"));
        assert!(!query.contains("Get"));
        assert!(!query.contains("Aggregate"));
    }

    #[test]
    fn test_compose_elides_unset_clauses() {
        let query = ExploreRequest::new("beacon").compose();
        assert!(!query.contains("nearText:"));
        assert!(!query.contains("nearVector:"));
        assert!(!query.contains("nearObject:"));
    }

    #[test]
    fn test_pagination_stays_variable_bound() {
        let request = ExploreRequest::new("beacon").limit(3);
        let query = request.compose();
        assert!(query.contains("limit: $limit"));
        assert!(!query.contains("limit: 3"));
        assert_eq!(request.variables(), json!({"limit": 3, "offset": null}));
    }
}
