use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::Claims;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

fn now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

/// Token issuance belongs to the external auth service; this helper exists for
/// test fixtures and local tooling only.
pub fn generate_access_token(actor_id: &str, role: u8, secret: &str, ttl: usize) -> String {
    let claims = Claims {
        sub: actor_id.to_string(),
        role,
        exp: now() + ttl,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_claims() {
        let token = generate_access_token("tl-1", 2, "secret", 60);
        let claims = verify_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, "tl-1");
        assert_eq!(claims.role, 2);
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = generate_access_token("tl-1", 2, "secret", 60);
        assert!(verify_token(&token, "other").is_err());
    }
}
