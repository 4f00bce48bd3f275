//! # Invoice Builder
//!
//! Fluent accumulation of invoice state with fork and snapshot semantics.
//!
//! ## Builder Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    InvoiceBuilder Operations                            │
//! │                                                                         │
//! │  new() ──► with_line() ──► with_recipient() ──► with_*_discount()       │
//! │                │                                      │                 │
//! │                │              ┌───────────────────────┤                 │
//! │                ▼              ▼                       ▼                 │
//! │            but() ──► independent copy           build() ──► Invoice     │
//! │                      (lines cloned)             (lines cloned)          │
//! │                                                                         │
//! │  There is NO closed state. The builder stays open for mutation after    │
//! │  every build(); each Invoice is an independent frozen snapshot.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fluent Discipline
//! Setters consume and return the builder by value (one consistent
//! discipline), so chains read naturally and the borrow checker rules out
//! accidental aliasing of the line list. `but()` and `build()` take `&self`
//! and copy: the fork and the snapshot never share storage with the source.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Invoice, InvoiceLine, InvoiceLines, Recipient};
use crate::validation::validate_discount_fraction;

// =============================================================================
// Invoice Builder
// =============================================================================

/// Mutable, transient accumulator for building [`Invoice`] values.
///
/// ## Invariants
/// - Lines are kept in insertion order
/// - The recipient defaults to the printable sentinel
/// - The discount defaults to zero
/// - A percentage discount is computed from the total *at call time*; it is
///   not recomputed when more lines are added or when `build()` runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceBuilder {
    lines: Vec<InvoiceLine>,
    recipient: Recipient,
    discount: Money,
}

impl InvoiceBuilder {
    /// Creates an empty builder: no lines, sentinel recipient, zero discount.
    pub fn new() -> Self {
        InvoiceBuilder {
            lines: Vec::new(),
            recipient: Recipient::default(),
            discount: Money::ZERO,
        }
    }

    /// Appends a quantity-1 line. Always succeeds.
    ///
    /// ## Example
    /// ```rust
    /// use quill_core::{InvoiceBuilder, Money};
    ///
    /// let builder = InvoiceBuilder::new()
    ///     .with_line("Deerstalker Hat", Money::new(0, 3, 10)?);
    /// assert_eq!(builder.lines().len(), 1);
    /// # Ok::<(), quill_core::CoreError>(())
    /// ```
    pub fn with_line(self, description: impl Into<String>, unit_price: Money) -> Self {
        self.with_line_qty(description, unit_price, 1)
    }

    /// Appends a line with an explicit quantity. Always succeeds.
    ///
    /// Neither the description nor the quantity is validated; the builder
    /// accumulates exactly what it is given.
    pub fn with_line_qty(
        mut self,
        description: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        self.lines.push(InvoiceLine::new(description, quantity, unit_price));
        self
    }

    /// Replaces the current recipient. Always succeeds.
    pub fn with_recipient(mut self, recipient: Recipient) -> Self {
        self.recipient = recipient;
        self
    }

    /// Sets the discount to a fixed amount, bypassing percentage math.
    /// Always succeeds.
    pub fn with_discount(mut self, discount: Money) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the discount to `fraction` of the current total.
    ///
    /// ## Point-in-Time Capture
    /// The total is computed from the lines present *now*. Calling this
    /// again after appending more lines captures a new, larger total; the
    /// discount is never silently recomputed at build time.
    ///
    /// ## Errors
    /// [`CoreError::InvalidDiscount`](crate::CoreError::InvalidDiscount) if
    /// `fraction` is outside [0, 1]. The check runs before any mutation, so
    /// a failed call leaves the builder exactly as it was.
    ///
    /// ## Example
    /// ```rust
    /// use quill_core::{InvoiceBuilder, Money};
    ///
    /// let invoice = InvoiceBuilder::new()
    ///     .with_line("Deerstalker Hat", Money::new(0, 3, 10)?) // 46d
    ///     .with_line("Tweed Cape", Money::new(0, 4, 12)?)      // 60d
    ///     .with_percentage_discount(0.10)?                     // 10% of 106d
    ///     .build();
    /// assert_eq!(invoice.discount(), Money::new(0, 0, 11)?);
    /// # Ok::<(), quill_core::CoreError>(())
    /// ```
    pub fn with_percentage_discount(mut self, fraction: f64) -> CoreResult<Self> {
        validate_discount_fraction(fraction)?;

        let total = self.total()?;
        self.discount = total.percentage_of(fraction)?;
        Ok(self)
    }

    /// Calculates the current total of all lines (quantity × unit price,
    /// summed in integer pence).
    pub fn total(&self) -> CoreResult<Money> {
        let total_pence: i64 = self.lines.iter().map(InvoiceLine::line_total_pence).sum();
        Money::from_total_pence(total_pence)
    }

    /// Forks the builder: a brand-new, independent builder pre-seeded with
    /// the current recipient, a copy of the current lines, and the current
    /// discount.
    ///
    /// ## Why Fork?
    /// Several invoice variants can share a common base line set without one
    /// variant's later changes affecting another: the fork copies the line
    /// list, so mutating either builder never reaches the other.
    ///
    /// ## Example
    /// ```rust
    /// use quill_core::{InvoiceBuilder, Money};
    ///
    /// let base = InvoiceBuilder::new()
    ///     .with_line("Deerstalker Hat", Money::new(0, 3, 10)?)
    ///     .with_line("Tweed Cape", Money::new(0, 4, 12)?);
    ///
    /// let ten_off = base.but().with_percentage_discount(0.10)?.build();
    /// let quarter_off = base.but().with_percentage_discount(0.25)?.build();
    ///
    /// assert_eq!(ten_off.lines().len(), quarter_off.lines().len());
    /// assert_ne!(ten_off.discount(), quarter_off.discount());
    /// # Ok::<(), quill_core::CoreError>(())
    /// ```
    pub fn but(&self) -> Self {
        InvoiceBuilder {
            lines: self.lines.clone(),
            recipient: self.recipient.clone(),
            discount: self.discount,
        }
    }

    /// Snapshots the current state into an immutable [`Invoice`].
    ///
    /// The line list is copied into the invoice, and the builder stays open:
    /// it can be mutated further and built again, and every invoice it has
    /// already produced is unaffected.
    pub fn build(&self) -> Invoice {
        Invoice::new(
            self.recipient.clone(),
            InvoiceLines::new(self.lines.clone()),
            self.discount,
        )
    }

    /// Returns the accumulated lines, read-only.
    #[inline]
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Returns the current recipient.
    #[inline]
    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Returns the current discount.
    #[inline]
    pub fn discount(&self) -> Money {
        self.discount
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::RecipientBuilder;

    fn base_builder() -> InvoiceBuilder {
        InvoiceBuilder::new()
            .with_line("Deerstalker Hat", Money::new(0, 3, 10).unwrap())
            .with_line("Tweed Cape", Money::new(0, 4, 12).unwrap())
    }

    #[test]
    fn test_new_builder_defaults() {
        let builder = InvoiceBuilder::new();
        assert!(builder.lines().is_empty());
        assert_eq!(builder.recipient().name(), "Default Name");
        assert!(builder.discount().is_zero());
    }

    #[test]
    fn test_with_line_preserves_insertion_order() {
        let builder = base_builder();
        let descriptions: Vec<&str> =
            builder.lines().iter().map(|l| l.description()).collect();
        assert_eq!(descriptions, vec!["Deerstalker Hat", "Tweed Cape"]);
    }

    #[test]
    fn test_total_sums_in_pence() {
        // 46d + 60d (4s 12d normalizes to 5s) = 106d = 8s 10d
        let total = base_builder().total().unwrap();
        assert_eq!(total, Money::new(0, 8, 10).unwrap());
    }

    #[test]
    fn test_total_respects_quantity() {
        let builder = InvoiceBuilder::new().with_line_qty(
            "Deerstalker Hat",
            Money::new(0, 3, 10).unwrap(),
            3,
        );
        assert_eq!(builder.total().unwrap().total_pence(), 138);
    }

    #[test]
    fn test_ten_percent_discount() {
        // 10% of 106d = 10.6d → 11d
        let invoice = base_builder()
            .with_percentage_discount(0.10)
            .unwrap()
            .build();
        assert_eq!(invoice.discount(), Money::new(0, 0, 11).unwrap());
    }

    #[test]
    fn test_twenty_five_percent_discount_rounds_half_to_even() {
        // 25% of 106d = 26.5d → 26d = 2s 2d
        let invoice = base_builder()
            .with_percentage_discount(0.25)
            .unwrap()
            .build();
        assert_eq!(invoice.discount(), Money::new(0, 2, 2).unwrap());
    }

    #[test]
    fn test_percentage_discount_out_of_range() {
        let err = base_builder().with_percentage_discount(1.5).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDiscount { .. }));

        let err = base_builder().with_percentage_discount(-0.1).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDiscount { .. }));

        // Boundary values are allowed
        assert!(base_builder().with_percentage_discount(0.0).is_ok());
        assert!(base_builder().with_percentage_discount(1.0).is_ok());
    }

    #[test]
    fn test_percentage_discount_captured_at_call_time() {
        let invoice = base_builder()
            .with_percentage_discount(0.10)
            .unwrap()
            .with_line("Meerschaum Pipe", Money::new(0, 10, 0).unwrap())
            .build();

        // The later line does not change the already-captured discount
        assert_eq!(invoice.discount(), Money::new(0, 0, 11).unwrap());
        assert_eq!(invoice.lines().len(), 3);
    }

    #[test]
    fn test_fixed_discount_bypasses_percentage_math() {
        let invoice = base_builder()
            .with_discount(Money::new(0, 1, 6).unwrap())
            .build();
        assert_eq!(invoice.discount(), Money::new(0, 1, 6).unwrap());
    }

    #[test]
    fn test_with_recipient_replaces_current() {
        let recipient = RecipientBuilder::new()
            .with_name("Sherlock Holmes")
            .with_address("221B Baker Street")
            .build();
        let invoice = base_builder().with_recipient(recipient.clone()).build();
        assert_eq!(invoice.recipient(), &recipient);
    }

    #[test]
    fn test_fork_copies_current_state() {
        let recipient = RecipientBuilder::new().with_name("Sherlock Holmes").build();
        let base = base_builder()
            .with_recipient(recipient.clone())
            .with_discount(Money::new(0, 1, 0).unwrap());

        let fork = base.but();
        assert_eq!(fork.lines(), base.lines());
        assert_eq!(fork.recipient(), &recipient);
        assert_eq!(fork.discount(), Money::new(0, 1, 0).unwrap());
    }

    #[test]
    fn test_fork_independence() {
        let base = base_builder();
        let fork = base
            .but()
            .with_line("Meerschaum Pipe", Money::new(0, 10, 0).unwrap());

        // Only the fork sees the third line
        assert_eq!(base.build().lines().len(), 2);
        assert_eq!(fork.build().lines().len(), 3);
    }

    #[test]
    fn test_forked_variants_diverge_on_discount() {
        let base = base_builder();

        let ten_off = base.but().with_percentage_discount(0.10).unwrap().build();
        let quarter_off = base.but().with_percentage_discount(0.25).unwrap().build();

        assert_eq!(ten_off.discount(), Money::new(0, 0, 11).unwrap());
        assert_eq!(quarter_off.discount(), Money::new(0, 2, 2).unwrap());
        // The base itself was never given a discount
        assert!(base.build().discount().is_zero());
    }

    #[test]
    fn test_build_is_idempotent_without_mutation() {
        let builder = base_builder().with_percentage_discount(0.10).unwrap();
        let first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_does_not_freeze_the_builder() {
        let builder = base_builder();
        let first = builder.build();

        let builder = builder.with_line("Meerschaum Pipe", Money::new(0, 10, 0).unwrap());
        let second = builder.build();

        // Earlier snapshot unaffected; later snapshot includes everything
        assert_eq!(first.lines().len(), 2);
        assert_eq!(second.lines().len(), 3);
        assert_eq!(second.lines().as_slice()[..2], *first.lines().as_slice());
    }

    #[test]
    fn test_failed_discount_leaves_builder_unchanged() {
        let builder = base_builder().with_discount(Money::new(0, 1, 0).unwrap());
        let snapshot = builder.clone();

        let err = builder.clone().with_percentage_discount(2.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDiscount { .. }));
        assert_eq!(builder.build(), snapshot.build());
    }

    #[test]
    fn test_empty_builder_builds_empty_invoice() {
        let invoice = InvoiceBuilder::new().build();
        assert!(invoice.lines().is_empty());
        assert!(invoice.discount().is_zero());
        assert_eq!(invoice.recipient().name(), "Default Name");
        assert_eq!(invoice.total().unwrap(), Money::ZERO);
    }
}
