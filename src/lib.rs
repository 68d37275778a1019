pub mod core;
pub mod server;
pub mod tools;

// --- Primary core exports ---
pub use core::error::ScoutError;
pub use core::types;
pub use core::types::*;
pub use core::AppState;

// --- Pipeline entry points ---
pub use tools::analyze::analyze_competitors;
pub use tools::classify::classify_site;
pub use tools::normalize::normalize;
pub use tools::suggest::suggest_competitors;
