//! Fetching one icon: conditional GET, size sanity check, atomic write.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::collect::IconTask;
use crate::config::FavgrabConfig;
use crate::retry::{is_transport_error, run_with_retry, RetryPolicy};

/// Temporary file suffix used before atomic rename.
const TEMP_SUFFIX: &str = ".part";

/// Per-item failure. The run never aborts on these; they are logged and
/// counted by the caller.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    #[error("HTTP {0}")]
    Http(u32),
    #[error("response too small, likely an error page: {size} bytes (minimum {min})")]
    TooSmall { size: usize, min: usize },
    #[error("write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Target file already present; no request was made.
    Skipped,
    /// Body written to the target file, with its size in bytes.
    Downloaded(u64),
}

/// One curl handle reused across all requests of a run, so keep-alive
/// connections are shared. Not for concurrent use.
pub struct IconFetcher<'a> {
    easy: curl::easy::Easy,
    cfg: &'a FavgrabConfig,
}

impl<'a> IconFetcher<'a> {
    pub fn new(cfg: &'a FavgrabConfig) -> Self {
        Self {
            easy: curl::easy::Easy::new(),
            cfg,
        }
    }

    /// Fetches one icon into `<out_dir>/<task.filename>`.
    ///
    /// An existing target short-circuits to `Skipped` unless `refresh` is
    /// set; repeated runs converge without re-fetching. Transport failures
    /// are retried per the configured budget; HTTP status errors are not.
    pub fn fetch(
        &mut self,
        task: &IconTask,
        out_dir: &Path,
        refresh: bool,
    ) -> Result<FetchOutcome, FetchError> {
        let target = out_dir.join(&task.filename);
        if !refresh && target.exists() {
            return Ok(FetchOutcome::Skipped);
        }

        let policy = RetryPolicy {
            max_retries: self.cfg.max_retries,
        };
        let body = run_with_retry(
            &policy,
            |e| matches!(e, FetchError::Curl(ce) if is_transport_error(ce)),
            || self.get_body(&task.url),
        )?;

        if body.len() < self.cfg.min_icon_bytes {
            return Err(FetchError::TooSmall {
                size: body.len(),
                min: self.cfg.min_icon_bytes,
            });
        }

        write_atomic(&target, &body)?;
        Ok(FetchOutcome::Downloaded(body.len() as u64))
    }

    /// Single GET returning the full body. Non-2xx is an error.
    fn get_body(&mut self, url: &str) -> Result<Vec<u8>, FetchError> {
        let easy = &mut self.easy;
        easy.url(url)?;
        easy.useragent(&self.cfg.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.timeout(Duration::from_secs(self.cfg.timeout_secs))?;

        let mut list = curl::easy::List::new();
        list.append(&format!("Accept: {}", self.cfg.accept))?;
        easy.http_headers(list)?;

        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        Ok(body)
    }
}

/// Whole-file atomic write: `.part` temp in the same directory, then rename.
/// An interrupted run can therefore never leave a truncated icon behind.
fn write_atomic(target: &Path, body: &[u8]) -> Result<(), FetchError> {
    let mut tmp_name = target.as_os_str().to_os_string();
    tmp_name.push(TEMP_SUFFIX);
    let tmp = PathBuf::from(tmp_name);

    let io_err = |source| FetchError::Io {
        path: target.to_path_buf(),
        source,
    };
    std::fs::write(&tmp, body).map_err(io_err)?;
    std::fs::rename(&tmp, target).map_err(io_err)?;
    Ok(())
}
