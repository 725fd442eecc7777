//! Cache for derived SigV4 signing keys.
//!
//! A signing key depends on the secret, date, region and signing name, so
//! one key serves every request a client sends during a UTC day.

use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    access_key_id: String,
    region: String,
    service: String,
    date_stamp: String,
}

/// Thread-safe signing key cache keyed by access key, region, service and date.
#[derive(Debug, Default)]
pub struct SigningKeyCache {
    entries: RwLock<HashMap<CacheKey, Vec<u8>>>,
}

impl SigningKeyCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(access_key_id: &str, region: &str, service: &str, date_stamp: &str) -> CacheKey {
        CacheKey {
            access_key_id: access_key_id.to_string(),
            region: region.to_string(),
            service: service.to_string(),
            date_stamp: date_stamp.to_string(),
        }
    }

    /// Look up a key.
    pub fn get(
        &self,
        access_key_id: &str,
        region: &str,
        service: &str,
        date_stamp: &str,
    ) -> Option<Vec<u8>> {
        self.entries
            .read()
            .get(&Self::key(access_key_id, region, service, date_stamp))
            .cloned()
    }

    /// Store a key, dropping entries from other dates first.
    pub fn put(
        &self,
        access_key_id: &str,
        region: &str,
        service: &str,
        date_stamp: &str,
        signing_key: Vec<u8>,
    ) {
        let mut entries = self.entries.write();
        entries.retain(|k, _| k.date_stamp == date_stamp);
        entries.insert(
            Self::key(access_key_id, region, service, date_stamp),
            signing_key,
        );
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached key, e.g. after rotating credentials.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
