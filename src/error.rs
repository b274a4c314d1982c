// Copyright 2026 the Bezarc Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The error type shared by the fallible operations.

use core::fmt;

/// Errors reported by the sampling, solving, and rectification
/// operations.
///
/// Numerical failure is signaled through this type rather than logged or
/// papered over: an unconverged solve or a degenerate curve is the
/// caller's decision to accept or reject.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// An argument was structurally invalid, such as a zero step count or
    /// a non-positive total length. The message names the offender.
    InvalidArgument(&'static str),
    /// Newton iteration hit [`MAX_NEWTON_ITERS`] without the parameter
    /// settling within [`NEWTON_TOLERANCE`].
    ///
    /// [`MAX_NEWTON_ITERS`]: crate::MAX_NEWTON_ITERS
    /// [`NEWTON_TOLERANCE`]: crate::NEWTON_TOLERANCE
    ConvergenceFailure {
        /// The last parameter value computed. It may still be a usable
        /// approximation; that judgment belongs to the caller.
        t: f64,
        /// Iterations performed before giving up.
        iterations: usize,
    },
    /// The input collapses in a way that leaves the operation undefined:
    /// a zero-speed point on the curve where the Newton step would divide
    /// by it, or an empty sample sequence for a distance table.
    DegenerateInput,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Error::ConvergenceFailure { t, iterations } => write!(
                f,
                "no convergence after {iterations} iterations (last parameter {t})"
            ),
            Error::DegenerateInput => write!(f, "degenerate input"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_names_the_failure() {
        let message = Error::ConvergenceFailure {
            t: 0.5,
            iterations: 1001,
        }
        .to_string();
        assert!(message.contains("1001"));
        assert!(message.contains("0.5"));
        assert_eq!(
            Error::InvalidArgument("steps must be at least 1").to_string(),
            "invalid argument: steps must be at least 1"
        );
    }
}
