//! Read-only inspection of GalaxyData token traits.

pub mod app;
pub mod blockchain;
pub mod cli;
pub mod config;
pub mod galaxy;
pub mod observability;

pub use app::{execute, Outcome};
pub use config::Config;
pub use galaxy::{GalaxyData, TraitReader};
