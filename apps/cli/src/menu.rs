//! # Main Menu
//!
//! The interactive menu loop: one core operation per iteration.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Menu Loop                                   │
//! │                                                                     │
//! │  print menu ──► read choice (0..=16) ──► dispatch one handler       │
//! │       ▲                                        │                    │
//! │       │                                        ▼                    │
//! │       │          handler prompts for its inputs, calls exactly      │
//! │       │          one core operation, prints the outcome             │
//! │       │                                        │                    │
//! │       └────────── StoreError rendered as a message ──────────┘      │
//! │                                                                     │
//! │  Nothing here mutates a record directly: every domain change goes   │
//! │  through medtrack_core::Store / merge_into.                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use chrono::Datelike;
use tracing::debug;

use medtrack_core::report::{self, ExpiryFilter};
use medtrack_core::{
    display, merge_into, seed, validation, ExpiryDate, FieldUpdate, Medicine, Store,
    MAX_COMPANY_LEN, MAX_EXPIRY_YEAR, MAX_NAME_LEN, MAX_UNITS, MIN_EXPIRY_YEAR,
};

use crate::demos;
use crate::input::{read_bounded_int, read_token};

/// The two stores a session operates on. Created empty, discarded on
/// exit; there is no persistence.
struct App {
    main: Store,
    branch: Store,
}

/// Runs the menu loop until the user exits or stdin closes.
pub fn run() -> io::Result<()> {
    let mut app = App {
        main: Store::main(),
        branch: Store::branch(),
    };

    println!("Smart Medicine Reminder & Stock Tracker");
    println!("First, you may populate sample data (option 0) for quick testing.");

    loop {
        print_menu();
        let choice = read_bounded_int("Enter choice: ", 0, 16)?;
        debug!(choice, "menu selection");

        match choice {
            0 => app.populate_sample(),
            1 => app.add_medicines()?,
            2 => app.display_all(),
            3 => app.update_by_id()?,
            4 => app.delete_by_id()?,
            5 => app.search_by_name()?,
            6 => app.search_by_expiry()?,
            7 => app.low_stock_reminder()?,
            8 => app.expiry_reminder()?,
            9 => app.sort_by_expiry(),
            10 => app.sort_by_name(),
            11 => app.toggle_availability()?,
            12 => app.merge_branch(),
            13 => app.seed_branch(),
            14 => demos::run_swap_demo()?,
            15 => demos::run_bitwise_demo()?,
            16 => {
                println!("Exiting program.");
                return Ok(());
            }
            _ => unreachable!("choice is clamped to 0..=16"),
        }
    }
}

fn print_menu() {
    println!();
    println!("Main Menu");
    println!("0. Populate sample data (quick test)");
    println!("1. Add medicines");
    println!("2. Display all medicines");
    println!("3. Update medicine by id");
    println!("4. Delete medicine by id");
    println!("5. Search by name");
    println!("6. Search by expiry month/year");
    println!("7. Low-stock reminder");
    println!("8. Expiry reminder (by year)");
    println!("9. Sort by expiry date (soonest)");
    println!("10. Sort by name (A-Z)");
    println!("11. Toggle availability");
    println!("12. Merge branch data into main");
    println!("13. Add branch sample data (for merge)");
    println!("14. Swap without third variable demo");
    println!("15. Bitwise AND/OR/XOR demo");
    println!("16. Exit");
}

impl App {
    // =========================================================================
    // Seeding
    // =========================================================================

    fn populate_sample(&mut self) {
        if !self.main.is_empty() {
            println!("Sample data already present; not adding.");
            return;
        }
        for med in seed::sample_inventory() {
            // The main store is empty and the sample ids are unique, so
            // these inserts cannot fail; surface anything unexpected
            if let Err(err) = self.main.insert(med) {
                println!("Could not add sample record: {err}");
            }
        }
        println!(
            "Added {} sample medicines (IDs: 101..105).",
            self.main.len()
        );
    }

    fn seed_branch(&mut self) {
        // Re-seeding replaces the branch wholesale, matching the one-shot
        // nature of the sample
        self.branch = Store::branch();
        for med in seed::sample_branch() {
            if let Err(err) = self.branch.insert(med) {
                println!("Could not add branch sample record: {err}");
            }
        }
        println!("Branch sample data added ({} items).", self.branch.len());
    }

    // =========================================================================
    // Record Entry
    // =========================================================================

    fn add_medicines(&mut self) -> io::Result<()> {
        let free_slots = self.main.capacity() - self.main.len();
        if free_slots == 0 {
            println!("Medicine database full; cannot add more.");
            return Ok(());
        }

        let n = read_bounded_int("How many medicines to add? ", 1, free_slots as i64)?;
        let mut added = 0;
        while added < n {
            if self.main.is_full() {
                println!("Medicine database full; cannot add more.");
                break;
            }

            let id = read_bounded_int("Enter medicine id (integer): ", 1, MAX_UNITS as i64)? as u32;
            if self.main.find_by_id(id).is_some() {
                // Retry the same slot rather than losing it
                println!("ID already exists. Skipping this entry.");
                continue;
            }

            let Some(name) = self.prompt_name("Enter medicine name (no spaces): ")? else {
                continue;
            };
            let Some(company) = self.prompt_company("Enter company name (no spaces): ")? else {
                continue;
            };

            let quantity =
                read_bounded_int("Enter quantity in stock: ", 0, MAX_UNITS as i64)? as u32;
            let expiry = self.prompt_expiry()?;
            let price =
                read_bounded_int("Enter price per unit (integer): ", 0, MAX_UNITS as i64)? as u32;
            let prescription =
                read_bounded_int("Is this prescription-only? 1=Yes 0=No: ", 0, 1)? == 1;

            let medicine = Medicine::new(id, name, company, quantity, expiry, price, prescription);
            match self.main.insert(medicine) {
                Ok(()) => {
                    added += 1;
                    debug!(id, "medicine added");
                    println!(
                        "Medicine added. Current total medicines: {}",
                        self.main.len()
                    );
                }
                Err(err) => println!("Could not add medicine: {err}"),
            }
        }
        Ok(())
    }

    /// Prompts for a name token and runs it through the domain validator.
    /// Returns `None` (after a message) if validation rejects it.
    fn prompt_name(&self, prompt: &str) -> io::Result<Option<String>> {
        let name = read_token(prompt, MAX_NAME_LEN)?;
        match validation::validate_name(&name) {
            Ok(()) => Ok(Some(name)),
            Err(err) => {
                println!("{err}");
                Ok(None)
            }
        }
    }

    fn prompt_company(&self, prompt: &str) -> io::Result<Option<String>> {
        let company = read_token(prompt, MAX_COMPANY_LEN)?;
        match validation::validate_company(&company) {
            Ok(()) => Ok(Some(company)),
            Err(err) => {
                println!("{err}");
                Ok(None)
            }
        }
    }

    fn prompt_expiry(&self) -> io::Result<ExpiryDate> {
        let month = read_bounded_int("Enter expiry month (1-12): ", 1, 12)? as u8;
        let year = read_bounded_int(
            "Enter expiry year (e.g., 2025): ",
            MIN_EXPIRY_YEAR as i64,
            MAX_EXPIRY_YEAR as i64,
        )? as u16;
        Ok(ExpiryDate::new(month, year))
    }

    // =========================================================================
    // Display
    // =========================================================================

    fn display_all(&self) {
        if self.main.is_empty() {
            println!("No medicines in database.");
            return;
        }
        print!("{}", display::inventory_table(self.main.records()));
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    fn update_by_id(&mut self) -> io::Result<()> {
        if self.main.is_empty() {
            println!("No medicines to update.");
            return Ok(());
        }

        let id = read_bounded_int("Enter medicine id to update: ", 1, MAX_UNITS as i64)? as u32;
        let Some(current) = self.main.get(id) else {
            println!("Medicine with id {id} not found.");
            return Ok(());
        };
        println!("Updating medicine ID {} ({})", current.id, current.name);

        let choice = read_bounded_int(
            "Which field? 1:Name 2:Company 3:Quantity 4:Expiry 5:Price 6:Toggle Prescription 7:Back : ",
            1,
            7,
        )?;

        let update = match choice {
            1 => match self.prompt_name("Enter new name: ")? {
                Some(name) => FieldUpdate::Name(name),
                None => return Ok(()),
            },
            2 => match self.prompt_company("Enter new company: ")? {
                Some(company) => FieldUpdate::Company(company),
                None => return Ok(()),
            },
            3 => {
                let q = read_bounded_int("Enter new quantity: ", 0, MAX_UNITS as i64)? as u32;
                FieldUpdate::Quantity(q)
            }
            4 => {
                let month = read_bounded_int("Enter new expiry month (1-12): ", 1, 12)? as u8;
                let year = read_bounded_int(
                    "Enter new expiry year: ",
                    MIN_EXPIRY_YEAR as i64,
                    MAX_EXPIRY_YEAR as i64,
                )? as u16;
                FieldUpdate::Expiry(ExpiryDate::new(month, year))
            }
            5 => {
                let p = read_bounded_int("Enter new price: ", 0, MAX_UNITS as i64)? as u32;
                FieldUpdate::Price(p)
            }
            6 => FieldUpdate::TogglePrescription,
            _ => {
                println!("Back to menu.");
                return Ok(());
            }
        };

        match self.main.update(id, update) {
            Ok(()) => {
                debug!(id, "medicine updated");
                println!("Update complete for id {id}.");
            }
            Err(err) => println!("{err}"),
        }
        Ok(())
    }

    fn delete_by_id(&mut self) -> io::Result<()> {
        if self.main.is_empty() {
            println!("No medicines to delete.");
            return Ok(());
        }

        let id = read_bounded_int("Enter medicine id to delete: ", 1, MAX_UNITS as i64)? as u32;
        match self.main.delete(id) {
            Ok(()) => {
                debug!(id, "medicine deleted");
                println!("Medicine id {id} deleted.");
            }
            Err(err) => println!("{err}"),
        }
        Ok(())
    }

    fn toggle_availability(&mut self) -> io::Result<()> {
        if self.main.is_empty() {
            println!("No medicines.");
            return Ok(());
        }

        let id =
            read_bounded_int("Enter medicine id to toggle availability: ", 1, MAX_UNITS as i64)?
                as u32;
        match self.main.toggle_availability(id) {
            Ok(available) => {
                let label = if available { "Available" } else { "Not Available" };
                println!("Toggled availability for id {id}. Now {label}");
            }
            Err(err) => println!("{err}"),
        }
        Ok(())
    }

    // =========================================================================
    // Searches and Reminders
    // =========================================================================

    fn search_by_name(&self) -> io::Result<()> {
        if self.main.is_empty() {
            println!("Database empty.");
            return Ok(());
        }

        let name = read_token("Enter exact name to search: ", MAX_NAME_LEN)?;
        match report::search_exact_name(&self.main, &name) {
            Some(medicine) => print!("{}", display::record_details(medicine)),
            None => println!("Medicine '{name}' not found."),
        }
        Ok(())
    }

    fn search_by_expiry(&self) -> io::Result<()> {
        if self.main.is_empty() {
            println!("Database empty.");
            return Ok(());
        }

        let month = read_bounded_int("Enter expiry month (1-12) or 0 to skip month: ", 0, 12)?;
        let year = read_bounded_int(
            "Enter expiry year (e.g., 2024) or 0 to skip year: ",
            0,
            MAX_EXPIRY_YEAR as i64,
        )?;
        let filter = ExpiryFilter::from_raw(month as u8, year as u16);

        let mut found = false;
        for medicine in report::search_by_expiry(&self.main, filter) {
            print!("{}", display::record_details(medicine));
            found = true;
        }
        if !found {
            println!("No medicines match the expiry filter.");
        }
        Ok(())
    }

    fn low_stock_reminder(&self) -> io::Result<()> {
        if self.main.is_empty() {
            println!("Database empty.");
            return Ok(());
        }

        let threshold =
            read_bounded_int("Enter low-stock threshold (e.g., 20): ", 0, MAX_UNITS as i64)? as u32;

        let mut found = false;
        for medicine in report::low_stock(&self.main, threshold) {
            println!(
                "Low stock: ID {} Name {} Qty {}",
                medicine.id, medicine.name, medicine.quantity
            );
            found = true;
        }
        if !found {
            println!("No medicines with quantity <= {threshold}");
        }
        Ok(())
    }

    fn expiry_reminder(&self) -> io::Result<()> {
        if self.main.is_empty() {
            println!("Database empty.");
            return Ok(());
        }

        let current_year = chrono::Utc::now().year();
        let year = read_bounded_int(
            &format!("Enter year to check expiry on/before (e.g., {current_year}): "),
            MIN_EXPIRY_YEAR as i64,
            MAX_EXPIRY_YEAR as i64,
        )? as u16;

        let mut found = false;
        for medicine in report::expiring_on_or_before(&self.main, year) {
            println!(
                "Expiring on/before {}: ID {} Name {} Expiry {}",
                year, medicine.id, medicine.name, medicine.expiry
            );
            found = true;
        }
        if !found {
            println!("No medicines expiring on/before {year}");
        }
        Ok(())
    }

    // =========================================================================
    // Sorts and Merge
    // =========================================================================

    fn sort_by_expiry(&mut self) {
        if self.main.len() < 2 {
            println!("Not enough medicines to sort.");
            return;
        }
        self.main.sort_by_expiry();
        println!("Sorted by expiry date (soonest first).");
    }

    fn sort_by_name(&mut self) {
        if self.main.len() < 2 {
            println!("Not enough medicines to sort.");
            return;
        }
        self.main.sort_by_name();
        println!("Sorted by name (A-Z).");
    }

    fn merge_branch(&mut self) {
        if self.branch.is_empty() {
            println!("Branch list empty. Use branch sample add first.");
            return;
        }

        let report = merge_into(&mut self.main, &self.branch);
        debug!(
            merged = report.merged_count(),
            duplicates = report.skipped_duplicate_count(),
            capacity = report.skipped_capacity_count(),
            "merge finished"
        );

        for name in &report.skipped_duplicate {
            println!("Duplicate '{name}' skipped.");
        }
        for name in &report.skipped_capacity {
            println!("No room for '{name}'; main DB full.");
        }
        for name in &report.merged {
            println!("Merged '{name}' into main DB.");
        }
        println!("Merge complete. Main med count: {}", self.main.len());
    }
}
