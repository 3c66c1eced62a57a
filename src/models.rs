use serde::{Deserialize, Serialize};

/// JWT claims issued by the external authentication service. This core only
/// verifies them; it never issues tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Actor id (team leader or manager).
    pub sub: String,
    /// Role id, see `model::role::Role::from_id`.
    pub role: u8,
    pub exp: usize,
    pub jti: String,
}
