//! AWS Signature Version 4.
//!
//! The signing process:
//! 1. Build the canonical request (method, canonical URI, canonical query,
//!    canonical headers, signed headers, payload hash).
//! 2. Build the string to sign from the timestamp, the credential scope and
//!    the hash of the canonical request.
//! 3. Derive the signing key from the secret, date, region and signing name.
//! 4. Write `Authorization` with the hex HMAC of the string to sign.
//!
//! Reference: <https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html>

use super::cache::SigningKeyCache;
use super::canonical::{canonical_headers, canonical_query_string, canonical_uri};
use super::error::SigningError;
use crate::credentials::AwsCredentials;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use http::{HeaderMap, HeaderValue};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// SigV4 algorithm identifier.
pub const AWS_ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Credentials and scope used to sign one request.
#[derive(Clone)]
pub struct SigningParams {
    /// Signing region.
    pub region: String,
    /// Signing name of the service (e.g. `glacier`, `ssm-incidents`).
    pub service: String,
    /// Access key id.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Session token for temporary credentials.
    pub session_token: Option<String>,
    /// Whether to send `x-amz-content-sha256`.
    pub payload_checksum_header: bool,
}

impl SigningParams {
    /// Scope without credentials.
    pub fn new(region: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            service: service.into(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            session_token: None,
            payload_checksum_header: true,
        }
    }

    /// Scope filled from resolved credentials.
    pub fn from_credentials(
        region: impl Into<String>,
        service: impl Into<String>,
        credentials: &AwsCredentials,
    ) -> Self {
        let mut params = Self::new(region, service)
            .with_access_key(credentials.access_key_id())
            .with_secret_key(credentials.secret_access_key());
        if let Some(token) = credentials.session_token() {
            params = params.with_session_token(token);
        }
        params
    }

    /// Set the access key id.
    pub fn with_access_key(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = access_key_id.into();
        self
    }

    /// Set the secret access key.
    pub fn with_secret_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = secret_access_key.into();
        self
    }

    /// Set the session token.
    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(session_token.into());
        self
    }

    /// Toggle the `x-amz-content-sha256` header.
    pub fn with_payload_checksum_header(mut self, enabled: bool) -> Self {
        self.payload_checksum_header = enabled;
        self
    }
}

impl std::fmt::Debug for SigningParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningParams")
            .field("region", &self.region)
            .field("service", &self.service)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("session_token", &self.session_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// The parts of a request that enter the signature.
#[derive(Debug, Clone, Copy)]
pub struct SignableRequest<'a> {
    /// HTTP method.
    pub method: &'a str,
    /// Path as it appears on the wire (already percent-encoded).
    pub path: &'a str,
    /// Raw, unencoded query pairs.
    pub query: &'a [(String, String)],
    /// Request body.
    pub payload: Option<&'a [u8]>,
}

/// Lower-case hex SHA-256 of `data`.
///
/// ```
/// use aws_services::signing::sha256_hex;
///
/// assert_eq!(
///     sha256_hex(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, SigningError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| SigningError::SigningFailed {
        message: format!("invalid HMAC key: {}", e),
    })?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Derive the SigV4 signing key.
pub fn derive_signing_key(
    secret_key: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> Result<Vec<u8>, SigningError> {
    let k_date = hmac_sha256(format!("AWS4{}", secret_key).as_bytes(), date_stamp.as_bytes())?;
    let k_region = hmac_sha256(&k_date, region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, service.as_bytes())?;
    hmac_sha256(&k_service, b"aws4_request")
}

/// `YYYYMMDD'T'HHMMSS'Z'`
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// `YYYYMMDD`
pub fn format_date_stamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%d").to_string()
}

/// `{date}/{region}/{service}/aws4_request`
pub fn build_credential_scope(date_stamp: &str, region: &str, service: &str) -> String {
    format!("{}/{}/{}/aws4_request", date_stamp, region, service)
}

fn build_canonical_request(
    request: &SignableRequest<'_>,
    headers: &HeaderMap,
    payload_hash: &str,
) -> (String, String) {
    let (canonical_headers, signed_headers) = canonical_headers(headers);
    let canonical_request = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        request.method.to_ascii_uppercase(),
        canonical_uri(request.path),
        canonical_query_string(request.query),
        canonical_headers,
        signed_headers,
        payload_hash
    );
    (canonical_request, signed_headers)
}

fn header_value(value: &str, header: &'static str) -> Result<HeaderValue, SigningError> {
    HeaderValue::from_str(value).map_err(|_| SigningError::InvalidHeaderValue { header })
}

/// Sign a request in place.
///
/// Adds `x-amz-date`, `x-amz-content-sha256` (unless disabled),
/// `x-amz-security-token` for temporary credentials, and `authorization`.
/// `headers` must already contain `host`.
pub fn sign_request(
    request: &SignableRequest<'_>,
    headers: &mut HeaderMap,
    params: &SigningParams,
    timestamp: &DateTime<Utc>,
    cache: Option<&SigningKeyCache>,
) -> Result<(), SigningError> {
    if params.access_key_id.is_empty() {
        return Err(SigningError::SigningFailed {
            message: "Access key ID is required".to_string(),
        });
    }
    if params.secret_access_key.is_empty() {
        return Err(SigningError::SigningFailed {
            message: "Secret access key is required".to_string(),
        });
    }
    if !headers.contains_key(http::header::HOST) {
        return Err(SigningError::MissingHeader {
            header: "host".to_string(),
        });
    }

    let date_stamp = format_date_stamp(timestamp);
    let amz_date = format_datetime(timestamp);
    let payload_hash = sha256_hex(request.payload.unwrap_or_default());

    headers.insert("x-amz-date", header_value(&amz_date, "x-amz-date")?);
    if params.payload_checksum_header {
        headers.insert(
            "x-amz-content-sha256",
            header_value(&payload_hash, "x-amz-content-sha256")?,
        );
    }
    if let Some(token) = &params.session_token {
        headers.insert(
            "x-amz-security-token",
            header_value(token, "x-amz-security-token")?,
        );
    }

    let (canonical_request, signed_headers) =
        build_canonical_request(request, headers, &payload_hash);
    let credential_scope = build_credential_scope(&date_stamp, &params.region, &params.service);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        AWS_ALGORITHM,
        amz_date,
        credential_scope,
        sha256_hex(canonical_request.as_bytes())
    );

    let cached = cache.and_then(|c| {
        c.get(
            &params.access_key_id,
            &params.region,
            &params.service,
            &date_stamp,
        )
    });
    let signing_key = match cached {
        Some(key) => key,
        None => {
            let key = derive_signing_key(
                &params.secret_access_key,
                &date_stamp,
                &params.region,
                &params.service,
            )?;
            if let Some(c) = cache {
                c.put(
                    &params.access_key_id,
                    &params.region,
                    &params.service,
                    &date_stamp,
                    key.clone(),
                );
            }
            key
        }
    };

    let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes())?);
    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        AWS_ALGORITHM, params.access_key_id, credential_scope, signed_headers, signature
    );
    headers.insert("authorization", header_value(&authorization, "authorization")?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn suite_params() -> SigningParams {
        SigningParams::new("us-east-1", "service")
            .with_access_key("AKIDEXAMPLE")
            .with_secret_key("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
    }

    fn suite_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap()
    }

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            sha256_hex(b"hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_format_timestamps() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 15, 10, 30, 45).unwrap();
        assert_eq!(format_datetime(&dt), "20231215T103045Z");
        assert_eq!(format_date_stamp(&dt), "20231215");
    }

    #[test]
    fn test_credential_scope() {
        assert_eq!(
            build_credential_scope("20240101", "eu-west-1", "ssm-incidents"),
            "20240101/eu-west-1/ssm-incidents/aws4_request"
        );
    }

    #[test]
    fn test_derive_signing_key_deterministic() {
        let a = derive_signing_key("secret", "20240101", "us-east-1", "glacier").unwrap();
        let b = derive_signing_key("secret", "20240101", "us-east-1", "glacier").unwrap();
        let c = derive_signing_key("secret", "20240101", "us-east-1", "wafv2").unwrap();
        assert_eq!(a.len(), 32);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_aws_suite_get_vanilla() {
        let mut headers = HeaderMap::new();
        headers.insert("host", "example.amazonaws.com".parse().unwrap());
        let request = SignableRequest {
            method: "GET",
            path: "/",
            query: &[],
            payload: None,
        };

        sign_request(
            &request,
            &mut headers,
            &suite_params().with_payload_checksum_header(false),
            &suite_time(),
            None,
        )
        .unwrap();

        assert_eq!(
            headers.get("authorization").unwrap().to_str().unwrap(),
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert_eq!(headers.get("x-amz-date").unwrap(), "20150830T123600Z");
    }

    #[test]
    fn test_sign_adds_payload_hash_and_token() {
        let mut headers = HeaderMap::new();
        headers.insert("host", "cases.us-east-1.amazonaws.com".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());
        let payload = br#"{"name":"support"}"#;
        let request = SignableRequest {
            method: "POST",
            path: "/domains",
            query: &[],
            payload: Some(payload),
        };

        sign_request(
            &request,
            &mut headers,
            &suite_params().with_session_token("SESSION"),
            &suite_time(),
            None,
        )
        .unwrap();

        assert_eq!(
            headers.get("x-amz-content-sha256").unwrap().to_str().unwrap(),
            sha256_hex(payload)
        );
        assert_eq!(headers.get("x-amz-security-token").unwrap(), "SESSION");
        let auth = headers.get("authorization").unwrap().to_str().unwrap();
        assert!(auth.contains(
            "SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date;x-amz-security-token"
        ));
    }

    #[test]
    fn test_sign_uses_cache() {
        let cache = SigningKeyCache::new();
        for _ in 0..3 {
            let mut headers = HeaderMap::new();
            headers.insert("host", "example.amazonaws.com".parse().unwrap());
            let request = SignableRequest {
                method: "GET",
                path: "/",
                query: &[],
                payload: None,
            };
            sign_request(&request, &mut headers, &suite_params(), &suite_time(), Some(&cache))
                .unwrap();
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_and_uncached_signatures_match() {
        let cache = SigningKeyCache::new();
        let sign = |cache: Option<&SigningKeyCache>| {
            let mut headers = HeaderMap::new();
            headers.insert("host", "example.amazonaws.com".parse().unwrap());
            let request = SignableRequest {
                method: "GET",
                path: "/",
                query: &[],
                payload: None,
            };
            sign_request(&request, &mut headers, &suite_params(), &suite_time(), cache).unwrap();
            headers.get("authorization").unwrap().clone()
        };
        let first = sign(Some(&cache));
        let second = sign(Some(&cache));
        assert_eq!(first, second);
        assert_eq!(first, sign(None));
    }

    #[test]
    fn test_missing_host() {
        let mut headers = HeaderMap::new();
        let request = SignableRequest {
            method: "GET",
            path: "/",
            query: &[],
            payload: None,
        };
        let err = sign_request(&request, &mut headers, &suite_params(), &suite_time(), None)
            .unwrap_err();
        assert!(matches!(err, SigningError::MissingHeader { .. }));
    }

    #[test]
    fn test_missing_keys() {
        let mut headers = HeaderMap::new();
        headers.insert("host", "example.amazonaws.com".parse().unwrap());
        let request = SignableRequest {
            method: "GET",
            path: "/",
            query: &[],
            payload: None,
        };
        let params = SigningParams::new("us-east-1", "service").with_secret_key("x");
        assert!(sign_request(&request, &mut headers, &params, &suite_time(), None).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", suite_params());
        assert!(!debug.contains("wJalrXUtnFEMI"));
    }
}
