// src/presentation/http/extractors.rs
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use percent_encoding::percent_decode_str;
use std::convert::Infallible;

/// Credential presented for a privileged operation: a bearer token, or the
/// `secret` query parameter on the manual/ops GET variants. Verification
/// happens against the write capability, not here.
#[derive(Debug, Clone)]
pub struct WriteCredential(pub Option<String>);

impl WriteCredential {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for WriteCredential {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string);

        // Reserved characters in the secret arrive percent-encoded on the
        // query variant; decode so both transport paths compare equal.
        let credential = bearer.or_else(|| {
            parts
                .uri
                .query()
                .and_then(|query| {
                    query.split('&').find_map(|pair| {
                        pair.strip_prefix("secret=").map(|value| {
                            percent_decode_str(value).decode_utf8_lossy().into_owned()
                        })
                    })
                })
        });

        Ok(Self(credential))
    }
}
