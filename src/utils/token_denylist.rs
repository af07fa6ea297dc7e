use moka::future::Cache;
use std::time::Duration;

/// Token ids revoked by logout. Entries expire with the token itself, so
/// the TTL matches the access token lifetime. There is no size bound: an
/// evicted id would make its token valid again.
#[derive(Clone)]
pub struct TokenDenylist {
    revoked: Cache<String, ()>,
}

impl TokenDenylist {
    pub fn new(token_ttl_secs: u64) -> Self {
        Self {
            revoked: Cache::builder()
                .time_to_live(Duration::from_secs(token_ttl_secs.max(1)))
                .build(),
        }
    }

    /// Revoke a token id. Revoking twice is harmless.
    pub async fn revoke(&self, jti: &str) {
        self.revoked.insert(jti.to_string(), ()).await;
    }

    pub fn is_revoked(&self, jti: &str) -> bool {
        self.revoked.contains_key(jti)
    }
}
