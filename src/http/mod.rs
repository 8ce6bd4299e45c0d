//! Read-only HTTP query endpoint.
//!
//! Serves the current program as JSON. Every request recomputes the
//! program from the repository snapshot; nothing is cached or persisted.
//!
//! # Routes
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/health` | [`HealthResponse`](dto::HealthResponse) |
//! | GET | `/v1/program` | [`Program`](crate::program::Program) |
//! | GET | `/v1/program/catalog` | Sample program, one slot per regulation |
//! | GET | `/v1/program/item-counts` | [`ItemCountsResponse`](dto::ItemCountsResponse) |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
