//! Serializable request and response bodies.
//!
//! Responses are untagged: a body is a solution, a verdict, or an error, and
//! the fields present decide which. Requests keep every field optional so
//! that missing-field handling happens in the operations, not in the decoder.

use serde::{Deserialize, Serialize};

use ninefold_core::Grid;
use ninefold_solver::Placement;

use crate::ApiError;

/// Body of a solve request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// The puzzle string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<String>,
}

impl SolveRequest {
    /// Runs [`solve`](crate::solve) on this request.
    #[must_use]
    pub fn respond(&self) -> SolveResponse {
        crate::solve(self.puzzle.as_deref()).into()
    }
}

/// Body of a solve response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// The puzzle was solved.
    Solution {
        /// The completed grid as an 81-character string.
        solution: String,
    },
    /// The request was rejected.
    Error {
        /// The rejection message.
        error: String,
    },
}

impl From<Result<Grid, ApiError>> for SolveResponse {
    fn from(result: Result<Grid, ApiError>) -> Self {
        match result {
            Ok(grid) => Self::Solution {
                solution: grid.to_string(),
            },
            Err(err) => Self::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Body of a check request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The puzzle string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<String>,
    /// The cell to check, as a row letter and column digit such as `"A2"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<String>,
    /// The digit to place, `"1"`-`"9"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl CheckRequest {
    /// Runs [`check`](crate::check) on this request.
    #[must_use]
    pub fn respond(&self) -> CheckResponse {
        crate::check(
            self.puzzle.as_deref(),
            self.coordinate.as_deref(),
            self.value.as_deref(),
        )
        .into()
    }
}

/// Body of a check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The placement clashes with existing digits.
    ///
    /// Must stay ahead of [`Valid`](Self::Valid): untagged deserialization
    /// tries variants in order, and a conflict-carrying body also satisfies
    /// the `Valid` shape.
    Invalid {
        /// Always `false`.
        valid: bool,
        /// Violated groups, in `row`, `column`, `region` order.
        conflict: Vec<String>,
    },
    /// The placement violates nothing.
    Valid {
        /// Always `true`.
        valid: bool,
    },
    /// The request was rejected.
    Error {
        /// The rejection message.
        error: String,
    },
}

impl From<Result<Placement, ApiError>> for CheckResponse {
    fn from(result: Result<Placement, ApiError>) -> Self {
        match result {
            Ok(Placement::Valid) => Self::Valid { valid: true },
            Ok(Placement::Conflicting(conflicts)) => Self::Invalid {
                valid: false,
                conflict: conflicts.kinds().map(|kind| kind.to_string()).collect(),
            },
            Err(err) => Self::Error {
                error: err.to_string(),
            },
        }
    }
}
