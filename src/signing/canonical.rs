//! Canonical request components for SigV4.

use http::HeaderMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

/// Unreserved characters plus `/`, which stays literal in paths.
const URI_PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// RFC 3986 unreserved characters only.
const UNRESERVED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode `input`; `/` is encoded only when `encode_slash` is set.
///
/// ```
/// use aws_services::signing::uri_encode;
///
/// assert_eq!(uri_encode("/a b/c", false), "/a%20b/c");
/// assert_eq!(uri_encode("a/b", true), "a%2Fb");
/// ```
pub fn uri_encode(input: &str, encode_slash: bool) -> String {
    if encode_slash {
        utf8_percent_encode(input, UNRESERVED_SET).to_string()
    } else {
        utf8_percent_encode(input, URI_PATH_SET).to_string()
    }
}

/// Collapse empty and `.` segments, resolve `..`, keep a trailing slash.
///
/// ```
/// use aws_services::signing::normalize_uri_path;
///
/// assert_eq!(normalize_uri_path("/foo//bar/../baz/"), "/foo/baz/");
/// assert_eq!(normalize_uri_path(""), "/");
/// ```
pub fn normalize_uri_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut result = format!("/{}", segments.join("/"));
    if path.ends_with('/') && result.len() > 1 {
        result.push('/');
    }
    result
}

/// Canonical URI for a path that is already percent-encoded on the wire.
///
/// Non-S3 services sign the path encoded a second time, so `%2F` in the
/// request line becomes `%252F` here.
pub fn canonical_uri(encoded_path: &str) -> String {
    uri_encode(&normalize_uri_path(encoded_path), false)
}

/// Encode, then sort by name and value, then join with `&`.
///
/// ```
/// use aws_services::signing::canonical_query_string;
///
/// let params = vec![
///     ("tagKeys".to_string(), "b".to_string()),
///     ("operation".to_string(), "add".to_string()),
///     ("tagKeys".to_string(), "a".to_string()),
/// ];
/// assert_eq!(canonical_query_string(&params), "operation=add&tagKeys=a&tagKeys=b");
/// ```
pub fn canonical_query_string(query_params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = query_params
        .iter()
        .map(|(k, v)| (uri_encode(k, true), uri_encode(v, true)))
        .collect();
    encoded.sort();

    encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build `(canonical_headers, signed_headers)` from the signable headers.
pub fn canonical_headers(headers: &HeaderMap) -> (String, String) {
    let mut by_name: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (name, value) in headers {
        let name = name.as_str().to_ascii_lowercase();
        if !should_sign_header(&name) {
            continue;
        }
        let value = value
            .to_str()
            .unwrap_or_default()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        by_name.entry(name).or_default().push(value);
    }

    let canonical = by_name
        .iter()
        .map(|(name, values)| format!("{}:{}\n", name, values.join(",")))
        .collect::<String>();
    let signed = by_name.keys().cloned().collect::<Vec<_>>().join(";");

    (canonical, signed)
}

/// `host`, `x-amz-*` and the content headers are signed; nothing else.
pub fn should_sign_header(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name == "host"
        || name.starts_with("x-amz-")
        || matches!(
            name.as_str(),
            "content-type" | "content-md5" | "content-length"
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_encode_reserved() {
        assert_eq!(uri_encode("arn:aws:cases", true), "arn%3Aaws%3Acases");
        assert_eq!(uri_encode("a~b-c_d.e", true), "a~b-c_d.e");
        assert_eq!(uri_encode("ü", true), "%C3%BC");
    }

    #[test]
    fn test_canonical_uri_double_encodes() {
        assert_eq!(
            canonical_uri("/tags/arn%3Aaws%3Acases%3A%3Adomain%2Fd1"),
            "/tags/arn%253Aaws%253Acases%253A%253Adomain%252Fd1"
        );
        assert_eq!(canonical_uri("/"), "/");
    }

    #[test]
    fn test_normalize_keeps_trailing_slash() {
        assert_eq!(
            normalize_uri_path("/domains/d/cases/c/related-items/"),
            "/domains/d/cases/c/related-items/"
        );
        assert_eq!(normalize_uri_path("/./a/./b"), "/a/b");
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(canonical_query_string(&[]), "");
    }

    #[test]
    fn test_query_values_encoded() {
        let params = vec![("keywords".to_string(), "a b/c".to_string())];
        assert_eq!(canonical_query_string(&params), "keywords=a%20b%2Fc");
    }

    #[test]
    fn test_canonical_headers_filters_and_sorts() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amz-date", "20150830T123600Z".parse().unwrap());
        headers.insert("host", "glacier.us-east-1.amazonaws.com".parse().unwrap());
        headers.insert("user-agent", "test".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());
        headers.insert("x-amz-glacier-version", "2012-06-01".parse().unwrap());

        let (canonical, signed) = canonical_headers(&headers);
        assert_eq!(
            signed,
            "content-type;host;x-amz-date;x-amz-glacier-version"
        );
        assert!(canonical.starts_with("content-type:application/json\n"));
        assert!(!canonical.contains("user-agent"));
    }

    #[test]
    fn test_header_whitespace_collapsed() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amz-archive-description", "  my   archive ".parse().unwrap());
        let (canonical, _) = canonical_headers(&headers);
        assert_eq!(canonical, "x-amz-archive-description:my archive\n");
    }
}
