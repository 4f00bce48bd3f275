//! # Quill CLI
//!
//! Demo binary for the quill-core invoicing library.
//!
//! ## What It Shows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Demo Walkthrough                                │
//! │                                                                         │
//! │  1. Two invoices built from scratch, same lines, 10% vs 25% discount    │
//! │                                                                         │
//! │  2. The same two invoices derived from ONE shared base builder via      │
//! │     but(): the fork copies the line list, so each variant diverges      │
//! │     on discount without touching the shared base                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! cargo run -p quill-cli
//! ```

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use quill_core::{CoreError, Invoice, InvoiceBuilder, Money, RecipientBuilder};

fn print_invoice(label: &str, invoice: &Invoice) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- {label} ---");
    println!("{invoice}");
    println!("  (as JSON: {})", serde_json::to_string(invoice)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Building sample invoices...");

    let recipient = RecipientBuilder::new()
        .with_name("Sherlock Holmes")
        .with_address("221B Baker Street, London")
        .build();

    let hat = Money::new(0, 3, 10)?;
    let cape = Money::new(0, 4, 12)?; // 4s 12d normalizes to 5s

    // Two invoices built independently from scratch
    let invoice_10 = InvoiceBuilder::new()
        .with_recipient(recipient.clone())
        .with_line("Deerstalker Hat", hat)
        .with_line("Tweed Cape", cape)
        .with_percentage_discount(0.10)?
        .build();

    let invoice_25 = InvoiceBuilder::new()
        .with_recipient(recipient.clone())
        .with_line("Deerstalker Hat", hat)
        .with_line("Tweed Cape", cape)
        .with_percentage_discount(0.25)?
        .build();

    print_invoice("Invoice with 10% discount", &invoice_10)?;
    print_invoice("Invoice with 25% discount", &invoice_25)?;

    // Same result, but the shared base lines are accumulated once and each
    // variant forks off with but() before setting its own discount
    let products = InvoiceBuilder::new()
        .with_recipient(recipient)
        .with_line("Deerstalker Hat", hat)
        .with_line("Tweed Cape", cape);

    info!(total = %products.total()?, "shared base builder ready");

    let forked_10 = products.but().with_percentage_discount(0.10)?.build();
    let forked_25 = products.but().with_percentage_discount(0.25)?.build();

    print_invoice("Forked invoice with 10% discount", &forked_10)?;
    print_invoice("Forked invoice with 25% discount", &forked_25)?;

    // Forking copied the lines, so the variants match the scratch-built ones
    assert_eq!(forked_10, invoice_10);
    assert_eq!(forked_25, invoice_25);
    info!("forked variants match the scratch-built invoices");

    // A discount out of range is rejected before any state changes
    match products.but().with_percentage_discount(1.5) {
        Err(CoreError::InvalidDiscount { fraction }) => {
            info!(fraction, "rejected out-of-range discount as expected");
        }
        Err(other) => return Err(other.into()),
        Ok(_) => return Err("150% discount was not rejected".into()),
    }

    Ok(())
}
