//! # Validation Module
//!
//! Business rule validation for quill-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Money::new(p, s, d)                                                    │
//! │  ├── carry normalization runs FIRST (pence → shillings → pounds)       │
//! │  └── THIS MODULE: post-check that shillings/pence landed in range      │
//! │                                                                         │
//! │  InvoiceBuilder::with_percentage_discount(f)                            │
//! │  └── THIS MODULE: fraction must be inside [0, 1] before any mutation   │
//! │                                                                         │
//! │  Descriptions and quantities are deliberately unvalidated: the          │
//! │  builder accepts whatever the caller accumulated.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::{PENCE_PER_SHILLING, SHILLINGS_PER_POUND};

// =============================================================================
// Currency Field Validators
// =============================================================================

/// Validates a shillings field after carry normalization.
///
/// ## Rules
/// - Must be between 0 and 19 inclusive
///
/// ## Example
/// ```rust
/// use quill_core::validation::validate_shillings;
///
/// assert!(validate_shillings(19).is_ok());
/// assert!(validate_shillings(-3).is_err());
/// ```
pub fn validate_shillings(shillings: i64) -> CoreResult<()> {
    if !(0..SHILLINGS_PER_POUND).contains(&shillings) {
        return Err(CoreError::InvalidAmount {
            field: "shillings",
            min: 0,
            max: SHILLINGS_PER_POUND - 1,
            value: shillings,
        });
    }

    Ok(())
}

/// Validates a pence field after carry normalization.
///
/// ## Rules
/// - Must be between 0 and 11 inclusive
///
/// ## Example
/// ```rust
/// use quill_core::validation::validate_pence;
///
/// assert!(validate_pence(11).is_ok());
/// assert!(validate_pence(-1).is_err());
/// ```
pub fn validate_pence(pence: i64) -> CoreResult<()> {
    if !(0..PENCE_PER_SHILLING).contains(&pence) {
        return Err(CoreError::InvalidAmount {
            field: "pence",
            min: 0,
            max: PENCE_PER_SHILLING - 1,
            value: pence,
        });
    }

    Ok(())
}

// =============================================================================
// Discount Validators
// =============================================================================

/// Validates a percentage discount fraction.
///
/// ## Rules
/// - Must be inside the closed interval [0, 1]
/// - 0.0 (no discount) and 1.0 (everything free) are both allowed
pub fn validate_discount_fraction(fraction: f64) -> CoreResult<()> {
    if fraction < 0.0 || fraction > 1.0 {
        return Err(CoreError::InvalidDiscount { fraction });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
