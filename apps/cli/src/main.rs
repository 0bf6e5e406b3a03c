//! # MedTrack Console Application Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        MedTrack Console                             │
//! │                                                                     │
//! │  main.rs ────► Sets up logging, hands control to the menu loop      │
//! │                                                                     │
//! │  menu.rs ────► One core operation per menu iteration                │
//! │                                                                     │
//! │  input.rs ───► readBounded-style prompts: re-prompt on garbage,     │
//! │                clamp out-of-range integers, truncate long tokens    │
//! │                                                                     │
//! │  demos.rs ───► Pedagogical asides (integer swap, bitwise showcase)  │
//! │                                                                     │
//! │                         │ validated primitives                      │
//! │                         ▼                                           │
//! │  medtrack-core ──► Store / reports / merge (pure, no I/O)           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, stderr so the menu stays clean)
//! 2. Create the empty main and branch stores
//! 3. Run the menu loop until the user exits or stdin closes

mod demos;
mod input;
mod menu;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    info!("Starting MedTrack console");

    if let Err(err) = menu::run() {
        // Only I/O failures on stdin/stdout land here; domain errors are
        // rendered inside the loop and never escape it
        eprintln!("terminal error: {err}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=medtrack=trace` - Show trace for medtrack crates only
/// - Default: WARN, so prompts and tables stay uncluttered
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,medtrack=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
