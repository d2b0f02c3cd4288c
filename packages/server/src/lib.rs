// Dining Menu Advisor - API Core
//
// Scrapes the weekly dining-hall menu into a CSV artifact and serves
// LLM-filtered recommendations over it.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
