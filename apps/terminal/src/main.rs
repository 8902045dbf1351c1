//! # Isoko POS Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (defaults + `ISOKO_*` env overrides)
//! 3. Seed the in-memory store with the demo catalog
//! 4. Run the login screen, then the role-gated view loop

fn main() -> std::io::Result<()> {
    // The actual setup is in lib.rs for better testability
    isoko_terminal::run()
}
