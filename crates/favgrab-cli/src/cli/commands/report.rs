//! `favgrab report` – list the icons currently on disk.

use anyhow::Result;
use favgrab_core::config::FavgrabConfig;
use favgrab_core::report;

pub fn run_report(cfg: &FavgrabConfig) -> Result<()> {
    let icons = report::list_icons(&cfg.output_dir)?;
    if icons.is_empty() {
        println!("no icons in {}", cfg.output_dir.display());
        return Ok(());
    }
    for icon in &icons {
        println!("{} ({} bytes)", icon.name, icon.size);
    }
    println!("{} icon file(s)", icons.len());
    Ok(())
}
