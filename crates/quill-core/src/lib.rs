//! # quill-core: Pure Business Logic for Quill
//!
//! This crate is the **heart** of Quill. It contains all business logic for
//! building invoices in pre-decimal British currency, as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Quill Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       apps/cli (binary)                         │   │
//! │  │        builds demo invoices, renders them, logs via tracing     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quill-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   types   │  │  builder  │  │ validation│  │   │
//! │  │   │   Money   │  │  Invoice  │  │  Invoice  │  │   range   │  │   │
//! │  │   │  £/s/d    │  │ Recipient │  │  Builder  │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type for pounds/shillings/pence with integer arithmetic
//! - [`types`] - Domain types (Invoice, InvoiceLine, Recipient, builders)
//! - [`builder`] - Fluent InvoiceBuilder with fork and snapshot semantics
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary math runs through total pence (i64),
//!    never through floating-point amounts
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use quill_core::{InvoiceBuilder, Money};
//!
//! let invoice = InvoiceBuilder::new()
//!     .with_line("Deerstalker Hat", Money::new(0, 3, 10)?)
//!     .with_line("Tweed Cape", Money::new(0, 4, 12)?) // 4s 12d normalizes to 5s
//!     .with_percentage_discount(0.10)?
//!     .build();
//!
//! // 106d total, 10% discount rounds to 11d
//! assert_eq!(invoice.discount(), Money::new(0, 0, 11)?);
//! # Ok::<(), quill_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quill_core::Money` instead of
// `use quill_core::money::Money`

pub use builder::InvoiceBuilder;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Pence per shilling in the pre-decimal system.
pub const PENCE_PER_SHILLING: i64 = 12;

/// Shillings per pound in the pre-decimal system.
pub const SHILLINGS_PER_POUND: i64 = 20;

/// Pence per pound (20 shillings × 12 pence).
///
/// ## Why a constant?
/// Total pence is the integer lingua franca of this crate: every sum,
/// discount, and reconstruction goes through it, so the mixed-radix
/// factors live in one place.
pub const PENCE_PER_POUND: i64 = SHILLINGS_PER_POUND * PENCE_PER_SHILLING;

/// Name used for a recipient that was never set on a builder.
///
/// ## Why a sentinel?
/// An unset recipient is printable, not an error. Representing "no recipient"
/// as an explicit default value keeps every invoice renderable without an
/// absent/null state.
pub const DEFAULT_RECIPIENT_NAME: &str = "Default Name";

/// Address used for a recipient that was never set on a builder.
pub const DEFAULT_RECIPIENT_ADDRESS: &str = "Default Address";
