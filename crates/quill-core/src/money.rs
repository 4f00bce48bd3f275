//! # Money Module
//!
//! Provides the `Money` type for pre-decimal British currency
//! (pounds / shillings / pence).
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  It gets worse in a mixed-radix system:                                 │
//! │    1 pound = 20 shillings, 1 shilling = 12 pence                        │
//! │    3s 10d as "0.191666... pounds" loses pence immediately               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Total Pence                                      │
//! │    3s 10d = 46 pence, 5s = 60 pence, sum = 106 pence exactly            │
//! │    Floats appear only at the single discount-rounding step,             │
//! │    and the result is rounded straight back to integer pence             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quill_core::money::Money;
//!
//! // Overflowing fields carry upward during construction
//! let price = Money::new(0, 4, 12)?; // 4s 12d
//! assert_eq!(price, Money::new(0, 5, 0)?); // = 5s exactly
//!
//! // Percentage math goes through total pence with banker's rounding
//! let discount = price.percentage_of(0.10)?;
//! assert_eq!(discount.total_pence(), 6);
//! # Ok::<(), quill_core::CoreError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::validation::{validate_pence, validate_shillings};
use crate::{PENCE_PER_POUND, PENCE_PER_SHILLING, SHILLINGS_PER_POUND};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in pounds, shillings, and pence.
///
/// ## Invariants (after construction)
/// - `0 <= shillings <= 19`
/// - `0 <= pence <= 11`
/// - pounds is unconstrained and absorbs all upward carries
///
/// ## Design Decisions
/// - **Three i64 fields**: the mixed radix (base-20, base-12) makes a single
///   backing integer awkward to read back; fields are normalized instead
/// - **Private fields**: immutable after construction, no way to break the
///   range invariant from outside
/// - **Copy**: three machine words, cheap to pass by value
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  InvoiceLine.unit_price ──► line total pence ──► builder total          │
/// │                                                        │                │
/// │                              percentage_of ◄───────────┘                │
/// │                                    │                                    │
/// │                                    ▼                                    │
/// │                            Invoice.discount                             │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    pounds: i64,
    shillings: i64,
    pence: i64,
}

impl Money {
    /// The shared zero amount (£0 0s 0d).
    pub const ZERO: Money = Money {
        pounds: 0,
        shillings: 0,
        pence: 0,
    };

    /// Creates a normalized Money value from pounds, shillings, and pence.
    ///
    /// ## Normalization
    /// Carries run before the range check, smaller units first:
    /// excess pence (>= 12) roll into shillings, then excess shillings
    /// (>= 20) roll into pounds. Division and remainder truncate toward
    /// zero, so negative fields are NOT carried downward; they fall through
    /// to the range check instead.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidAmount`](crate::CoreError::InvalidAmount)
    /// if shillings or pence are still out of range after carrying. Normal
    /// construction paths always satisfy the check; only pathological input
    /// (e.g. `Money::new(0, -40, 0)`) can fail.
    ///
    /// ## Example
    /// ```rust
    /// use quill_core::money::Money;
    ///
    /// let price = Money::new(0, 4, 12)?; // 12d carries into 1s
    /// assert_eq!(price.shillings(), 5);
    /// assert_eq!(price.pence(), 0);
    /// # Ok::<(), quill_core::CoreError>(())
    /// ```
    pub fn new(pounds: i64, shillings: i64, pence: i64) -> CoreResult<Self> {
        let mut pounds = pounds;
        let mut shillings = shillings;
        let mut pence = pence;

        // Carry pence into shillings, then shillings into pounds
        if pence >= PENCE_PER_SHILLING {
            shillings += pence / PENCE_PER_SHILLING;
            pence %= PENCE_PER_SHILLING;
        }
        if shillings >= SHILLINGS_PER_POUND {
            pounds += shillings / SHILLINGS_PER_POUND;
            shillings %= SHILLINGS_PER_POUND;
        }

        validate_shillings(shillings)?;
        validate_pence(pence)?;

        Ok(Money {
            pounds,
            shillings,
            pence,
        })
    }

    /// Reconstructs a normalized Money value from a total pence count.
    ///
    /// ## Errors
    /// Negative totals decompose into negative fields and fail the range
    /// check with `InvalidAmount`, the same as passing them to [`Money::new`].
    ///
    /// ## Example
    /// ```rust
    /// use quill_core::money::Money;
    ///
    /// let amount = Money::from_total_pence(106)?;
    /// assert_eq!(amount, Money::new(0, 8, 10)?);
    /// # Ok::<(), quill_core::CoreError>(())
    /// ```
    pub fn from_total_pence(total: i64) -> CoreResult<Self> {
        let pounds = total / PENCE_PER_POUND;
        let remainder = total % PENCE_PER_POUND;
        let shillings = remainder / PENCE_PER_SHILLING;
        let pence = remainder % PENCE_PER_SHILLING;

        Money::new(pounds, shillings, pence)
    }

    /// Returns the zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Money::ZERO
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.pounds == 0 && self.shillings == 0 && self.pence == 0
    }

    /// Returns the pounds field.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.pounds
    }

    /// Returns the shillings field (always 0-19).
    #[inline]
    pub const fn shillings(&self) -> i64 {
        self.shillings
    }

    /// Returns the pence field (always 0-11).
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.pence
    }

    /// Returns the amount as a total pence count.
    ///
    /// ## Why Total Pence?
    /// Total pence is the integer lingua franca of the crate: sums and
    /// percentages operate on it exactly, then reconstruct pounds/shillings/
    /// pence at the edge. No drift, guaranteed round-trip.
    ///
    /// ## Example
    /// ```rust
    /// use quill_core::money::Money;
    ///
    /// let amount = Money::new(0, 3, 10)?;
    /// assert_eq!(amount.total_pence(), 46); // 3×12 + 10
    /// # Ok::<(), quill_core::CoreError>(())
    /// ```
    #[inline]
    pub const fn total_pence(&self) -> i64 {
        self.pounds * PENCE_PER_POUND + self.shillings * PENCE_PER_SHILLING + self.pence
    }

    /// Calculates a percentage of this amount using Bankers Rounding.
    ///
    /// ## Bankers Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  BANKERS ROUNDING (Round Half to Even)                              │
    /// │                                                                     │
    /// │  Standard rounding always rounds 0.5 UP, causing systematic bias:   │
    /// │    25.5 → 26, 26.5 → 27, 27.5 → 28 (always up = +bias)             │
    /// │                                                                     │
    /// │  Bankers Rounding rounds 0.5 to the nearest EVEN number:            │
    /// │    25.5 → 26, 26.5 → 26, 27.5 → 28 (alternates = no bias)          │
    /// │                                                                     │
    /// │  Over many discounts this prevents systematic loss/gain.            │
    /// │  Watch for it on exact half-pence: 25% of 106d = 26.5d → 26d        │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// Converts to total pence, multiplies by `fraction`, rounds ties to
    /// even, and reconstructs a new normalized Money. The receiver is not
    /// mutated.
    ///
    /// ## Example
    /// ```rust
    /// use quill_core::money::Money;
    ///
    /// let total = Money::new(0, 8, 10)?; // 106d
    /// let discount = total.percentage_of(0.10)?;
    /// assert_eq!(discount, Money::new(0, 0, 11)?); // round(10.6) = 11d
    /// # Ok::<(), quill_core::CoreError>(())
    /// ```
    pub fn percentage_of(&self, fraction: f64) -> CoreResult<Money> {
        let scaled = self.total_pence() as f64 * fraction;
        Money::from_total_pence(scaled.round_ties_even() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display in conventional £sd notation, e.g. `£0 3s 10d`.
///
/// ## Note
/// This rendering is for receipts and debugging; it is free-form and not a
/// stable contract.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{} {}s {}d", self.pounds, self.shillings, self.pence)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_new_in_range() {
        let money = Money::new(1, 3, 10).unwrap();
        assert_eq!(money.pounds(), 1);
        assert_eq!(money.shillings(), 3);
        assert_eq!(money.pence(), 10);
    }

    #[test]
    fn test_pence_carry_into_shillings() {
        // 12 pence = 1 shilling
        let money = Money::new(0, 4, 12).unwrap();
        assert_eq!(money, Money::new(0, 5, 0).unwrap());
    }

    #[test]
    fn test_double_carry() {
        // 30d = 2s 6d, pushing shillings to 21 = £1 1s
        let money = Money::new(0, 19, 30).unwrap();
        assert_eq!(money.pounds(), 1);
        assert_eq!(money.shillings(), 1);
        assert_eq!(money.pence(), 6);
    }

    #[test]
    fn test_normalization_preserves_total_pence() {
        let cases = [(0, 0, 0), (0, 4, 12), (0, 19, 30), (2, 45, 100), (0, 0, 999)];
        for (p, s, d) in cases {
            let raw_total = p * 240 + s * 12 + d;
            let money = Money::new(p, s, d).unwrap();
            assert_eq!(money.total_pence(), raw_total);
            assert!((0..=19).contains(&money.shillings()));
            assert!((0..=11).contains(&money.pence()));
        }
    }

    #[test]
    fn test_negative_fields_are_rejected() {
        // Negative values are never carried downward; they fail the post-check
        let err = Money::new(0, -40, 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidAmount {
                field: "shillings",
                value: -40,
                ..
            }
        ));

        let err = Money::new(0, 0, -3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidAmount {
                field: "pence",
                value: -3,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_pounds_pass_the_check() {
        // Only shillings and pence are range-checked; pounds absorbs anything
        let money = Money::new(-5, 0, 0).unwrap();
        assert_eq!(money.pounds(), -5);
    }

    #[test]
    fn test_from_total_pence() {
        let money = Money::from_total_pence(106).unwrap();
        assert_eq!(money, Money::new(0, 8, 10).unwrap());

        let money = Money::from_total_pence(240).unwrap();
        assert_eq!(money, Money::new(1, 0, 0).unwrap());

        assert!(Money::from_total_pence(-46).is_err());
    }

    #[test]
    fn test_total_pence() {
        assert_eq!(Money::new(0, 3, 10).unwrap().total_pence(), 46);
        assert_eq!(Money::new(1, 0, 0).unwrap().total_pence(), 240);
        assert_eq!(Money::ZERO.total_pence(), 0);
    }

    #[test]
    fn test_percentage_of_full_amount_is_identity() {
        let amount = Money::new(0, 3, 10).unwrap();
        assert_eq!(amount.percentage_of(1.0).unwrap(), amount);
    }

    #[test]
    fn test_percentage_of_zero_is_zero() {
        for fraction in [0.0, 0.1, 0.5, 1.0, 2.0, -1.0] {
            assert_eq!(Money::ZERO.percentage_of(fraction).unwrap(), Money::ZERO);
        }
    }

    #[test]
    fn test_percentage_of_rounds_half_to_even() {
        // 106d × 25% = 26.5d: ties go to the even neighbour, 26d
        let total = Money::from_total_pence(106).unwrap();
        let discount = total.percentage_of(0.25).unwrap();
        assert_eq!(discount.total_pence(), 26);
        assert_eq!(discount, Money::new(0, 2, 2).unwrap());

        // 110d × 25% = 27.5d: even neighbour is 28d
        let total = Money::from_total_pence(110).unwrap();
        assert_eq!(total.percentage_of(0.25).unwrap().total_pence(), 28);
    }

    #[test]
    fn test_percentage_of_rounds_to_nearest() {
        // 106d × 10% = 10.6d → 11d
        let total = Money::from_total_pence(106).unwrap();
        let discount = total.percentage_of(0.10).unwrap();
        assert_eq!(discount, Money::new(0, 0, 11).unwrap());
    }

    #[test]
    fn test_zero_constant() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::ZERO);
        assert_eq!(Money::ZERO, Money::new(0, 0, 0).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(0, 3, 10).unwrap()), "£0 3s 10d");
        assert_eq!(format!("{}", Money::new(2, 0, 6).unwrap()), "£2 0s 6d");
        assert_eq!(format!("{}", Money::ZERO), "£0 0s 0d");
    }
}
