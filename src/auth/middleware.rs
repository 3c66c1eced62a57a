use crate::auth::auth::AuthUser;
use crate::auth::jwt::verify_token;
use crate::config::Config;
use crate::error::ApiError;
use crate::model::role::Role;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, ResponseError,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
};

fn reject(req: ServiceRequest, message: &str) -> Result<ServiceResponse<BoxBody>, Error> {
    let resp = ApiError::Unauthenticated(message.to_string()).error_response();
    Ok(req.into_response(resp))
}

/// Verifies the bearer token issued by the external auth service and places an
/// `AuthUser` in request extensions for the handlers' extractor.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?;

    let header_value = match req.headers().get("Authorization") {
        Some(h) => match h.to_str() {
            Ok(v) => v,
            Err(_) => return reject(req, "Invalid Authorization header encoding"),
        },
        None => return reject(req, "Missing Authorization header"),
    };

    let token = match header_value.strip_prefix("Bearer ") {
        Some(t) => t.to_string(),
        None => return reject(req, "Authorization header must start with Bearer"),
    };

    let claims = match verify_token(&token, &config.jwt_secret) {
        Ok(c) => c,
        Err(_) => return reject(req, "Invalid or expired token"),
    };

    let role = match Role::from_id(claims.role) {
        Some(role) => role,
        None => return reject(req, "Invalid role"),
    };

    req.extensions_mut().insert(AuthUser {
        actor_id: claims.sub,
        role,
    });

    next.call(req).await
}
