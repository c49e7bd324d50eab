//! Publish authorization endpoint.
//!
//! `POST /auth` is the callback an ingest server fires before admitting a
//! publisher. The body is `application/x-www-form-urlencoded`; the only field
//! that matters is `key`. The `Content-Type` header is not inspected, the
//! body is decoded as form data unconditionally.
//!
//! Responses never carry a body:
//!
//! | Outcome | Status |
//! |---------|--------|
//! | `key` matches the configured stream key exactly | `200` |
//! | `key` missing or different | `403` |
//! | body larger than `server.max_body_bytes` | `413` |
//! | body stream failed mid-read | `400` |

use axum::extract::{Request, State};
use axum::http::StatusCode;
use tracing::{debug, warn};

use crate::body::{self, BodyError};
use crate::{auth, form, AppState};

/// `POST /auth`: validate a publisher's stream key.
///
/// Accumulates the full body first (it may arrive in any number of chunks),
/// then decodes it and compares the `key` field against the configured
/// secret. Authorization is all-or-nothing; there is no partial outcome and
/// no retry semantics.
pub async fn authorize(State(state): State<AppState>, request: Request) -> StatusCode {
    let limit = state.config.server.max_body_bytes;
    let bytes = match body::collect(request.into_body(), limit).await {
        Ok(bytes) => bytes,
        Err(err @ BodyError::TooLarge { .. }) => {
            warn!("{err}");
            return StatusCode::PAYLOAD_TOO_LARGE;
        }
        Err(err @ BodyError::Read(_)) => {
            debug!("{err}");
            return StatusCode::BAD_REQUEST;
        }
    };
    debug!(bytes = bytes.len(), "auth callback body received");

    let fields = form::parse(&bytes);
    if auth::verify_key(&state.config.auth.key, form::last_value(&fields, "key")) {
        StatusCode::OK
    } else {
        StatusCode::FORBIDDEN
    }
}
