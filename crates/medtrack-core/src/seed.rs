//! # Seed Data
//!
//! Sample records for quick interactive testing and test fixtures.
//!
//! The shell exposes these behind menu entries so a fresh session can be
//! populated in one keystroke. The branch sample intentionally shares one
//! name with the main sample (`Paracetamol`) so the merge path has a
//! duplicate to suppress.

use crate::types::{ExpiryDate, Medicine};

/// Five representative main-store records, ids 101 through 105.
pub fn sample_inventory() -> Vec<Medicine> {
    vec![
        Medicine::new(101, "Paracetamol", "HealCo", 120, ExpiryDate::new(11, 2025), 5, false),
        Medicine::new(102, "Ibuprofen", "CureLabs", 60, ExpiryDate::new(4, 2024), 8, true),
        Medicine::new(103, "Cetirizine", "Allergix", 10, ExpiryDate::new(2, 2024), 3, false),
        Medicine::new(104, "Amoxicillin", "BioPharm", 0, ExpiryDate::new(8, 2023), 12, false),
        Medicine::new(105, "VitaminC", "NutriPlus", 200, ExpiryDate::new(6, 2026), 2, false),
    ]
}

/// Three branch-store records, ids 201 through 203. `Paracetamol`
/// duplicates a main sample name on purpose.
pub fn sample_branch() -> Vec<Medicine> {
    vec![
        Medicine::new(201, "Dolo650", "MediCorp", 50, ExpiryDate::new(12, 2025), 6, false),
        Medicine::new(202, "Paracetamol", "HealCo", 30, ExpiryDate::new(10, 2024), 5, false),
        Medicine::new(203, "Zincovit", "NutraLife", 90, ExpiryDate::new(6, 2026), 15, false),
    ]
}
