//! Transport-level retry.
//!
//! Mirrors the automatic retry a pooled HTTP adapter performs: a fixed
//! number of immediate re-attempts for connection-class failures, with no
//! backoff. HTTP status errors are never retried here.

/// Retry parameters. `max_retries` counts re-attempts beyond the first try.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 3 }
    }
}

/// True for curl failures worth an immediate re-attempt: timeouts and
/// connection-level errors. Everything else is a hard failure.
pub fn is_transport_error(e: &curl::Error) -> bool {
    e.is_operation_timedout()
        || e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
}

/// Runs `f` until it succeeds, fails non-retryably, or the retry budget is
/// spent. `retryable` decides which errors qualify.
pub fn run_with_retry<T, E, F, R>(policy: &RetryPolicy, mut retryable: R, mut f: F) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut() -> Result<T, E>,
    R: FnMut(&E) -> bool,
{
    let mut retries_left = policy.max_retries;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                if retries_left == 0 || !retryable(&e) {
                    return Err(e);
                }
                retries_left -= 1;
                tracing::debug!("transport error, retrying ({retries_left} left): {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_first_success() {
        let mut calls = 0;
        let r: Result<u32, &str> = run_with_retry(
            &RetryPolicy::default(),
            |_| true,
            || {
                calls += 1;
                Ok(7)
            },
        );
        assert_eq!(r, Ok(7));
        assert_eq!(calls, 1);
    }

    #[test]
    fn retries_until_budget_spent() {
        let mut calls = 0;
        let r: Result<u32, &str> = run_with_retry(
            &RetryPolicy { max_retries: 3 },
            |_| true,
            || {
                calls += 1;
                Err("down")
            },
        );
        assert_eq!(r, Err("down"));
        assert_eq!(calls, 4); // first try + 3 retries
    }

    #[test]
    fn non_retryable_fails_immediately() {
        let mut calls = 0;
        let r: Result<u32, &str> = run_with_retry(
            &RetryPolicy { max_retries: 3 },
            |_| false,
            || {
                calls += 1;
                Err("HTTP 404")
            },
        );
        assert_eq!(r, Err("HTTP 404"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn recovers_after_transient_failures() {
        let mut calls = 0;
        let r: Result<u32, &str> = run_with_retry(
            &RetryPolicy { max_retries: 3 },
            |_| true,
            || {
                calls += 1;
                if calls < 3 {
                    Err("reset")
                } else {
                    Ok(42)
                }
            },
        );
        assert_eq!(r, Ok(42));
        assert_eq!(calls, 3);
    }
}
