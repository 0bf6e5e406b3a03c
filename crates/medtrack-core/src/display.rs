//! # Display Rows
//!
//! Stable, presentation-ready rendering of records as plain strings.
//!
//! The core owns the field order and value formats (expiry as zero-padded
//! `MM/YYYY`, quantities and prices as plain integers, flags as `Y`/`N`);
//! the shell owns nothing but the act of printing. Column widths here are
//! a convenience for the console table, not a contract.
//!
//! Field order, everywhere: id, name, company, quantity, expiry, price,
//! available, prescription.

use std::fmt::Write;

use crate::types::Medicine;

/// One record, one field per line, in the stable field order.
///
/// ```text
/// ID: 101
/// Name: Paracetamol
/// Company: HealCo
/// Quantity: 120
/// Expiry: 11/2025
/// Price: 5
/// Flags: Available
/// ```
pub fn record_details(medicine: &Medicine) -> String {
    let mut out = String::new();

    // write! to a String cannot fail; errors are ignored deliberately
    let _ = writeln!(out, "ID: {}", medicine.id);
    let _ = writeln!(out, "Name: {}", medicine.name);
    let _ = writeln!(out, "Company: {}", medicine.company);
    let _ = writeln!(out, "Quantity: {}", medicine.quantity);
    let _ = writeln!(out, "Expiry: {}", medicine.expiry);
    let _ = writeln!(out, "Price: {}", medicine.price);
    let _ = writeln!(out, "Flags: {}", flags_label(medicine));

    out
}

/// A fixed-column table over a record slice, one row per record, rows in
/// slice order. Returns the header alone for an empty slice.
pub fn inventory_table(records: &[Medicine]) -> String {
    let mut out = String::from(
        "No  ID     Name                 Company          Qty  Expiry    Price  Avl Pres\n",
    );

    for (i, m) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<3} {:<6} {:<20} {:<15} {:<4}  {}  {:<5}  {}   {}",
            i + 1,
            m.id,
            m.name,
            m.company,
            m.quantity,
            m.expiry,
            m.price,
            yn(m.is_available()),
            yn(m.prescription_required()),
        );
    }

    out
}

fn flags_label(medicine: &Medicine) -> String {
    let mut label = if medicine.is_available() {
        String::from("Available")
    } else {
        String::from("NotAvailable")
    };
    if medicine.prescription_required() {
        label.push_str(" | Prescription");
    }
    label
}

fn yn(flag: bool) -> char {
    if flag {
        'Y'
    } else {
        'N'
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
