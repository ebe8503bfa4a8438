pub mod collect;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod mockdata;
pub mod report;
pub mod retry;
pub mod run;
