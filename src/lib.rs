#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_async)]

//! pubgate library: the building blocks of the publish authorization
//! callback, exposed for the binary and for tests.
//!
//! - `auth` - stream-key comparison
//! - `body` - bounded request-body accumulation
//! - `config` - configuration loading
//! - `form` - URL-encoded form decoding
//! - `routes` - HTTP route handlers
//! - `server` - router assembly and serve loop
//! - `state` - shared application state

pub mod auth;
pub mod body;
pub mod config;
pub mod form;
pub mod routes;
pub mod server;
pub mod state;

// Re-export key types at crate root for convenience.
pub use config::Config;
pub use state::AppState;
