//! Types for extracting the [`PageLocation`] from requests.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use derive_more::{Display, Error};
use goqldom_playground::PageLocation;

/// Header set by reverse proxies to report the scheme the client used.
pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Extractor for [`axum`] to derive the [`PageLocation`] of the requested page,
/// as the browser will see it in `document.location`.
///
/// The scheme is taken from the [`X_FORWARDED_PROTO`] header (`http` unless
/// it says `https`), the authority from the `Host` header (or the request URI
/// when the header is absent), and the path from the [`OriginalUri`], so
/// nested routers still report the full path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestLocation(pub PageLocation);

/// Rejection used for [`RequestLocation`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum PageLocationRejection {
    /// Neither a `Host` header nor an absolute request URI was provided.
    #[display("Missing `Host` header")]
    MissingHost,

    /// `Host` header is not valid UTF-8.
    #[display("`Host` header is not a valid HTTP header string")]
    InvalidHost,
}

impl IntoResponse for PageLocationRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl<S> FromRequestParts<S> for RequestLocation
where
    S: Send + Sync,
{
    type Rejection = PageLocationRejection;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let scheme = match parts.headers.get(X_FORWARDED_PROTO) {
            Some(proto) if proto.as_bytes().eq_ignore_ascii_case(b"https") => "https",
            _ => "http",
        };

        let host = match parts.headers.get(header::HOST) {
            Some(host) => host.to_str().map_err(|_| {
                tracing::warn!("rejecting playground request with non UTF-8 `Host` header");
                PageLocationRejection::InvalidHost
            })?,
            None => parts
                .uri
                .authority()
                .map(|a| a.as_str())
                .ok_or_else(|| {
                    tracing::warn!("rejecting playground request without `Host` header");
                    PageLocationRejection::MissingHost
                })?,
        };

        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.path(), |uri| uri.path());

        Ok(Self(PageLocation::from_parts(scheme, host, path)))
    }
}
