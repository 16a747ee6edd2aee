//! CLI command handlers

pub mod categories;
pub mod route;
pub mod run;

pub use categories::run_categories;
pub use route::run_route;
pub use run::run_run;
