//! HTTP route handlers.
//!
//! The service exposes exactly one route, `POST /auth` (see [`authorize`]).
//! Everything else, wrong path or wrong method alike, falls through to the
//! 404 fallback wired up in [`crate::server`].

pub mod authorize;
