//! Principal resolution middleware.
//!
//! Decodes the bearer token and attaches `Option<Principal>` to the request.
//! Requests with no or invalid credentials still reach the handler: public
//! reads are served, and authenticated operations deny through the policy so
//! the 401-before-404 ordering is preserved.

use crate::domain::models::Role;
use crate::domain::policy::Principal;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user id
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Expiration, seconds since the epoch
    pub exp: usize,
}

/// Token validation material, shared across requests.
#[derive(Clone)]
pub struct AuthKeys {
    decoding: DecodingKey,
    validation: Validation,
}

impl AuthKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Decode and validate an access token into a [Principal].
    fn resolve(&self, token: &str) -> Option<Principal> {
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| {
                tracing::trace!(error = ?e, "unable to decode access token");
            })
            .ok()?
            .claims;

        Some(Principal {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        })
    }
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolves the request's principal, if any, and attaches it to the request
/// extensions for handlers to consume.
pub async fn attach_principal(
    State(keys): State<AuthKeys>,
    mut req: Request,
    next: Next,
) -> Response {
    let principal: Option<Principal> =
        extract_bearer_token(&req).and_then(|token| keys.resolve(token));

    req.extensions_mut().insert(principal);
    next.run(req).await
}
