//! The puzzle service operations: solve and check.
//!
//! This crate packages [`ninefold_core`] parsing and [`ninefold_solver`]
//! search behind the two operations a transport exposes, together with the
//! user-visible error strings ([`ApiError`]) and the JSON-shaped request and
//! response bodies ([`SolveRequest`], [`SolveResponse`], [`CheckRequest`],
//! [`CheckResponse`]). Transports themselves (HTTP routing, body decoding)
//! stay outside this crate; callers hand in the raw optional fields exactly
//! as they arrived.
//!
//! # Examples
//!
//! ```
//! use ninefold_api::{CheckResponse, SolveResponse};
//!
//! let response = SolveResponse::from(ninefold_api::solve(Some(
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.",
//! )));
//! assert!(matches!(response, SolveResponse::Solution { .. }));
//!
//! // A missing puzzle is rejected, never a panic.
//! let response = CheckResponse::from(ninefold_api::check(None, Some("A2"), Some("7")));
//! assert!(matches!(response, CheckResponse::Error { .. }));
//! ```

pub use self::{dto::*, error::*, ops::*};

mod dto;
mod error;
mod ops;
