//! `favgrab scan` – show the icon tasks without touching the network.

use anyhow::Result;
use favgrab_core::config::FavgrabConfig;
use favgrab_core::{collect, mockdata};

pub fn run_scan(cfg: &FavgrabConfig) -> Result<()> {
    let data = match mockdata::extract_mock_data(&cfg.input_file) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("extraction failed: {e}");
            println!("cannot load mock data: {e}");
            return Ok(());
        }
    };

    let tasks = collect::collect_icon_tasks(&data);
    if tasks.is_empty() {
        println!("no HTTP icons referenced by {}", cfg.input_file.display());
        return Ok(());
    }

    println!("{:<30} {:<24} URL", "FILE", "SITE");
    for task in &tasks {
        println!("{:<30} {:<24} {}", task.filename, task.site_name, task.url);
    }
    println!("{} task(s)", tasks.len());
    Ok(())
}
