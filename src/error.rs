// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for model construction

use crate::geometry::Axis;
use thiserror::Error;

/// Errors raised while building a model.
///
/// Every construction operation validates its input before touching the
/// model, so an `Err` always leaves the model exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrthoError {
    /// A plate would have a zero-length side.
    #[error("plate dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u64, height: u64 },

    /// A stiffener offset places it outside the footprint.
    #[error("offset {offset} along {axis} lies outside the footprint (limit {limit})")]
    OffsetOutOfBounds { axis: Axis, offset: u64, limit: u64 },

    /// An elevated plate sub-span runs past the footprint.
    #[error("span {offset}+{width} along {axis} exceeds the footprint (limit {limit})")]
    SpanOutOfBounds {
        axis: Axis,
        offset: u64,
        width: u64,
        limit: u64,
    },

    /// Plane name not one of `xy`, `yz`, `zx`.
    #[error("unknown plane `{0}`")]
    UnknownPlane(String),

    /// Orientation name not one of `x`, `y`.
    #[error("unknown orientation `{0}`")]
    UnknownOrientation(String),
}

/// Result type alias for model construction.
pub type OrthoResult<T> = Result<T, OrthoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrthoError::OffsetOutOfBounds {
            axis: Axis::Y,
            offset: 1300,
            limit: 1200,
        };
        assert_eq!(
            err.to_string(),
            "offset 1300 along Y lies outside the footprint (limit 1200)"
        );

        let err = OrthoError::ZeroDimension {
            width: 0,
            height: 10,
        };
        assert!(err.to_string().contains("0x10"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OrthoError>();
    }
}
