//! Request path and query construction.

use std::fmt::Display;

use crate::signing::uri_encode;

/// Path and query of one operation call.
///
/// Segments are appended in call order. Literals go in verbatim; parameter
/// segments are percent-encoded, including `/`.
///
/// ```
/// use aws_services::operation::RequestUri;
///
/// let uri = RequestUri::new()
///     .literal("/domains/")
///     .param(&Some("d/1"))
///     .literal("/cases");
/// assert_eq!(uri.path(), "/domains/d%2F1/cases");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestUri {
    path: String,
    query: Vec<(String, String)>,
}

impl RequestUri {
    /// Empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a literal path.
    pub fn from_literal(path: &str) -> Self {
        Self::new().literal(path)
    }

    /// Append a literal segment as-is.
    pub fn literal(mut self, segment: &str) -> Self {
        self.path.push_str(segment);
        self
    }

    /// Append an encoded parameter segment.
    ///
    /// Required parameters are checked by `validate` before the path is
    /// built; an unset value appends nothing.
    pub fn param<T: Display>(mut self, value: &Option<T>) -> Self {
        if let Some(value) = value {
            self.path.push_str(&uri_encode(&value.to_string(), true));
        }
        self
    }

    /// Append an encoded segment from a plain value.
    pub fn segment(mut self, value: &str) -> Self {
        self.path.push_str(&uri_encode(value, true));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: &str, value: impl Display) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter when the value is set.
    pub fn query_opt<T: Display>(self, key: &str, value: &Option<T>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Add one query parameter per element, repeating `key`.
    pub fn query_list<T: Display>(mut self, key: &str, values: &Option<Vec<T>>) -> Self {
        for value in values.iter().flatten() {
            self = self.query(key, value);
        }
        self
    }

    /// The encoded path, `/` when nothing was appended.
    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            "/"
        } else {
            &self.path
        }
    }

    /// Raw query pairs in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Split into path and query.
    pub fn into_parts(self) -> (String, Vec<(String, String)>) {
        let path = if self.path.is_empty() {
            "/".to_string()
        } else {
            self.path
        };
        (path, self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_in_order() {
        let uri = RequestUri::new()
            .literal("/v1/registries/name/")
            .param(&Some("my registry"))
            .literal("/schemas/name/")
            .param(&Some("aws.events@Order"))
            .literal("/language/")
            .param(&Some("Java8"))
            .literal("/source");
        assert_eq!(
            uri.path(),
            "/v1/registries/name/my%20registry/schemas/name/aws.events%40Order/language/Java8/source"
        );
    }

    #[test]
    fn test_arn_parameter_is_fully_encoded() {
        let arn = Some("arn:aws:cases:us-east-1:123456789012:domain/d-1".to_string());
        let uri = RequestUri::from_literal("/tags/").param(&arn);
        assert_eq!(
            uri.path(),
            "/tags/arn%3Aaws%3Acases%3Aus-east-1%3A123456789012%3Adomain%2Fd-1"
        );
    }

    #[test]
    fn test_query_helpers() {
        let keys = Some(vec!["a".to_string(), "b".to_string()]);
        let uri = RequestUri::from_literal("/tags/x")
            .query_list("tagKeys", &keys)
            .query_opt("nextToken", &None::<String>)
            .query_opt("maxResults", &Some(25));
        assert_eq!(
            uri.query_pairs(),
            &[
                ("tagKeys".to_string(), "a".to_string()),
                ("tagKeys".to_string(), "b".to_string()),
                ("maxResults".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_path_is_root() {
        assert_eq!(RequestUri::new().path(), "/");
        assert_eq!(RequestUri::new().into_parts().0, "/");
    }
}
