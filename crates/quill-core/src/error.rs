//! # Error Types
//!
//! Domain-specific error types for quill-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError                                                              │
//! │  ├── InvalidAmount    - shillings/pence out of range after carrying     │
//! │  └── InvalidDiscount  - percentage discount outside [0, 1]              │
//! │                                                                         │
//! │  Both are raised synchronously and handled by the immediate caller.     │
//! │  A failing operation never leaves partial state behind: validation      │
//! │  runs before any field is written.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A Money field is still out of range after carry normalization.
    ///
    /// ## When This Occurs
    /// Normal construction paths never hit this: excess pence carry into
    /// shillings and excess shillings into pounds before the check runs.
    /// Triggering it requires pathological input, such as a large negative
    /// shillings or pence value that carrying cannot bring into range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidAmount {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    /// A percentage discount is outside the closed interval [0, 1].
    ///
    /// ## When This Occurs
    /// - `with_percentage_discount(1.5)` (more than 100% off)
    /// - `with_percentage_discount(-0.1)` (negative discount)
    #[error("discount must be between 0 and 1, got {fraction}")]
    InvalidDiscount { fraction: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
