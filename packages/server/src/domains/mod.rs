// Business domains
pub mod menu;
