//! # Domain Types
//!
//! Core domain types for Quill invoicing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Recipient     │   │  InvoiceLine    │   │    Invoice      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  description    │   │  recipient      │       │
//! │  │  address        │   │  quantity       │   │  lines          │       │
//! │  │                 │   │  unit_price     │   │  discount       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Everything here is IMMUTABLE once constructed. Mutation lives in       │
//! │  the builders; an Invoice is a frozen point-in-time snapshot.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::{DEFAULT_RECIPIENT_ADDRESS, DEFAULT_RECIPIENT_NAME};

// =============================================================================
// Recipient
// =============================================================================

/// The party an invoice is addressed to.
///
/// Immutable; built through [`RecipientBuilder`]. The default recipient is a
/// printable sentinel, not an absent state, so an invoice built without ever
/// setting a recipient still renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipient {
    name: String,
    address: String,
}

impl Recipient {
    /// Returns the recipient's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the recipient's address.
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Default recipient is the sentinel ("Default Name" / "Default Address").
impl Default for Recipient {
    fn default() -> Self {
        RecipientBuilder::new().build()
    }
}

// =============================================================================
// Recipient Builder
// =============================================================================

/// Fluent builder for [`Recipient`].
///
/// Two setters with string defaults, no validation.
///
/// ## Example
/// ```rust
/// use quill_core::RecipientBuilder;
///
/// let recipient = RecipientBuilder::new()
///     .with_name("Sherlock Holmes")
///     .with_address("221B Baker Street")
///     .build();
/// assert_eq!(recipient.name(), "Sherlock Holmes");
/// ```
#[derive(Debug, Clone)]
pub struct RecipientBuilder {
    name: String,
    address: String,
}

impl RecipientBuilder {
    /// Creates a builder seeded with the sentinel defaults.
    pub fn new() -> Self {
        RecipientBuilder {
            name: DEFAULT_RECIPIENT_NAME.to_string(),
            address: DEFAULT_RECIPIENT_ADDRESS.to_string(),
        }
    }

    /// Replaces the name. Always succeeds.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the address. Always succeeds.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Produces an immutable Recipient from the current state.
    ///
    /// Non-consuming: the builder can keep producing recipients.
    pub fn build(&self) -> Recipient {
        Recipient {
            name: self.name.clone(),
            address: self.address.clone(),
        }
    }
}

impl Default for RecipientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Invoice Line
// =============================================================================

/// A single line item on an invoice.
///
/// ## Design Notes
/// - `quantity` is positive by intent but deliberately unvalidated: the
///   builder appends whatever the caller hands it
/// - Immutable once constructed; the builder stores lines by value so a
///   line can never change after it is appended
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceLine {
    description: String,
    quantity: i64,
    unit_price: Money,
}

impl InvoiceLine {
    /// Creates a new line item.
    pub fn new(description: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        InvoiceLine {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns the line description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the quantity.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns the unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Calculates the line total in pence (unit price × quantity).
    #[inline]
    pub fn line_total_pence(&self) -> i64 {
        self.unit_price.total_pence() * self.quantity
    }
}

// =============================================================================
// Invoice Lines
// =============================================================================

/// An ordered, immutable sequence of invoice lines, exposed read-only.
///
/// Constructed by the builder's snapshot step from a copy of its line list,
/// so no two invoices (and no invoice and builder) ever share line storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLines(Vec<InvoiceLine>);

impl InvoiceLines {
    pub(crate) fn new(lines: Vec<InvoiceLine>) -> Self {
        InvoiceLines(lines)
    }

    /// Returns the number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether there are no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, InvoiceLine> {
        self.0.iter()
    }

    /// Returns the lines as a read-only slice.
    #[inline]
    pub fn as_slice(&self) -> &[InvoiceLine] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a InvoiceLines {
    type Item = &'a InvoiceLine;
    type IntoIter = std::slice::Iter<'a, InvoiceLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A fully built invoice: recipient, ordered lines, and discount.
///
/// ## Snapshot Semantics
/// An Invoice is a frozen point-in-time copy of its builder's state. The
/// constructor is crate-private, so the only way to obtain one is
/// [`InvoiceBuilder::build`](crate::InvoiceBuilder::build), which copies the
/// line list. Later mutation of the builder can never reach into an invoice
/// it already produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    recipient: Recipient,
    lines: InvoiceLines,
    discount: Money,
}

impl Invoice {
    pub(crate) fn new(recipient: Recipient, lines: InvoiceLines, discount: Money) -> Self {
        Invoice {
            recipient,
            lines,
            discount,
        }
    }

    /// Returns the recipient.
    #[inline]
    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Returns the line items.
    #[inline]
    pub fn lines(&self) -> &InvoiceLines {
        &self.lines
    }

    /// Returns the discount amount.
    #[inline]
    pub fn discount(&self) -> Money {
        self.discount
    }

    /// Calculates the pre-discount total in pence.
    pub fn total_pence(&self) -> i64 {
        self.lines.iter().map(InvoiceLine::line_total_pence).sum()
    }

    /// Calculates the pre-discount total as Money.
    pub fn total(&self) -> CoreResult<Money> {
        Money::from_total_pence(self.total_pence())
    }
}

/// Free-form, human-readable rendering. Not a stable contract.
impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invoice for {}, {}", self.recipient.name, self.recipient.address)?;
        for line in &self.lines {
            writeln!(
                f,
                "  {:<24} {:>3} x {}",
                line.description(),
                line.quantity(),
                line.unit_price()
            )?;
        }
        write!(f, "  Discount: {}", self.discount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
