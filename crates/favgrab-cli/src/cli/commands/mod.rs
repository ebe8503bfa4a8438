//! CLI command handlers. Each command is in its own file.

mod report;
mod run;
mod scan;

pub use report::run_report;
pub use run::run_fetch;
pub use scan::run_scan;
