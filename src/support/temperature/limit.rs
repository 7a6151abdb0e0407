use std::sync::OnceLock;

use thiserror::Error;

/// Upper limit applied when none has been configured.
pub const DEFAULT_UPPER_LIMIT: u64 = 10_000;

static UPPER_LIMIT: OnceLock<u64> = OnceLock::new();

/// Returned by [`set_upper_limit`] once the limit is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("temperature upper limit already fixed at {current}")]
pub struct LimitAlreadySet {
    /// The limit in effect.
    pub current: u64,
}

/// Returns the process-wide upper limit on either temperature axis.
///
/// The first read freezes the limit: later calls to [`set_upper_limit`] fail.
pub fn upper_limit() -> u64 {
    *UPPER_LIMIT.get_or_init(|| DEFAULT_UPPER_LIMIT)
}

/// Fixes the process-wide upper limit on either temperature axis.
///
/// Must run before any temperature is created or adjusted.
///
/// # Errors
///
/// Returns [`LimitAlreadySet`] if the limit was already set or read.
pub fn set_upper_limit(limit: u64) -> Result<(), LimitAlreadySet> {
    UPPER_LIMIT.set(limit).map_err(|_| LimitAlreadySet {
        current: upper_limit(),
    })?;
    tracing::debug!(limit, "temperature upper limit configured");
    Ok(())
}
