//! `favgrab run` – the full extract → collect → download → report pipeline.

use anyhow::{Context, Result};
use favgrab_core::config::FavgrabConfig;
use favgrab_core::{collect, mockdata, report, run};
use std::fs;

/// Runs the whole pipeline.
///
/// A missing or unparseable input file is a fatal setup error but not a
/// process failure: it is reported and the command returns Ok, exit 0.
pub fn run_fetch(cfg: &FavgrabConfig, refresh: bool) -> Result<()> {
    fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("create output dir: {}", cfg.output_dir.display()))?;
    println!("output directory: {}", cfg.output_dir.display());

    let data = match mockdata::extract_mock_data(&cfg.input_file) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("extraction failed: {e}");
            println!("cannot load mock data: {e}");
            return Ok(());
        }
    };

    let tasks = collect::collect_icon_tasks(&data);
    println!("found {} HTTP icon(s)", tasks.len());
    if tasks.is_empty() {
        println!("nothing to download");
        return Ok(());
    }

    let summary = run::download_all(&tasks, &cfg.output_dir, cfg, refresh);

    println!();
    println!(
        "done: {} succeeded, {} failed (of {})",
        summary.success,
        summary.failed,
        summary.total()
    );

    let icons = report::list_icons(&cfg.output_dir)?;
    if !icons.is_empty() {
        println!();
        println!("{} icon file(s) in {}:", icons.len(), cfg.output_dir.display());
        for icon in icons {
            println!("  {} ({} bytes)", icon.name, icon.size);
        }
    }
    Ok(())
}
