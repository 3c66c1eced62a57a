use crate::error::ApiError;
use crate::model::role::{Capability, Role};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures::future::{Ready, ready};

/// Authenticated actor, placed in request extensions by the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub actor_id: String,
    pub role: Role,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(req.extensions().get::<AuthUser>().cloned().ok_or_else(|| {
            ApiError::Unauthenticated("Missing authenticated identity".into()).into()
        }))
    }
}

impl AuthUser {
    pub fn can(&self, cap: Capability) -> bool {
        self.role.allows(cap)
    }

    /// Single authorization gate: fails with `Forbidden` when the actor's role
    /// lacks the capability.
    pub fn require(&self, cap: Capability) -> Result<(), ApiError> {
        if self.can(cap) {
            Ok(())
        } else {
            Err(ApiError::Forbidden(
                "Insufficient role for this operation".into(),
            ))
        }
    }

    /// Capability check plus ownership predicate: managers holding `cap` act
    /// on any resource, team leaders only on resources they own.
    pub fn require_owned(&self, cap: Capability, owner: &str) -> Result<(), ApiError> {
        self.require(cap)?;
        if self.role == Role::TeamLeader && owner != self.actor_id {
            return Err(ApiError::Forbidden(
                "Not authorized to access this resource".into(),
            ));
        }
        Ok(())
    }

    /// Owner filter a list query is allowed to use: team leaders are always
    /// pinned to themselves, managers keep whatever they requested.
    pub fn scoped_owner(&self, requested: Option<String>) -> Option<String> {
        match self.role {
            Role::Manager => requested,
            Role::TeamLeader => Some(self.actor_id.clone()),
        }
    }
}
