//! Sequential download loop.
//!
//! One task at a time, one shared curl handle, a fixed throttle delay after
//! every task whether it succeeded or not. Per-item failures are counted,
//! never propagated.

use std::path::Path;
use std::time::Duration;

use crate::collect::IconTask;
use crate::config::FavgrabConfig;
use crate::fetch::{FetchError, FetchOutcome, IconFetcher};
use crate::report::RunSummary;

/// Downloads every task into `out_dir`, returning the tally.
pub fn download_all(
    tasks: &[IconTask],
    out_dir: &Path,
    cfg: &FavgrabConfig,
    refresh: bool,
) -> RunSummary {
    let mut fetcher = IconFetcher::new(cfg);
    let delay = Duration::from_millis(cfg.delay_ms);
    process(tasks, delay, |task| fetcher.fetch(task, out_dir, refresh))
}

fn process<F>(tasks: &[IconTask], delay: Duration, mut fetch: F) -> RunSummary
where
    F: FnMut(&IconTask) -> Result<FetchOutcome, FetchError>,
{
    let mut summary = RunSummary::default();
    let total = tasks.len();
    for (i, task) in tasks.iter().enumerate() {
        let n = i + 1;
        match fetch(task) {
            Ok(FetchOutcome::Skipped) => {
                println!("[{n}/{total}] {} already present, skipped", task.filename);
                summary.record(true);
            }
            Ok(FetchOutcome::Downloaded(bytes)) => {
                println!(
                    "[{n}/{total}] {} -> {} ({bytes} bytes)",
                    task.site_name, task.filename
                );
                summary.record(true);
            }
            Err(e) => {
                tracing::warn!(url = %task.url, "download failed: {e}");
                println!("[{n}/{total}] {} failed: {e}", task.filename);
                summary.record(false);
            }
        }
        // Throttle between requests; applies to failures and skips too.
        std::thread::sleep(delay);
    }
    summary
}
