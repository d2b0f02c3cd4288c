//! Menu domain actions - entry-point business logic
//!
//! Called directly from the HTTP routes. Each action re-reads the CSV
//! artifact; nothing is cached between calls.

pub mod analyze;
pub mod days;

pub use analyze::analyze_menu;
pub use days::list_available_days;
