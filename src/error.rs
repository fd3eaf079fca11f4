use thiserror::Error;

/// Input rejected by [`crate::ScrollLogic`].
///
/// Only non-finite values are rejected. Out-of-range offsets and odd geometry are normalized
/// instead, since they show up routinely during overscroll and resizes.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ScrollError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(f64),

    #[error("invalid offset: {0}")]
    InvalidOffset(f64),
}

pub type Result<T, E = ScrollError> = core::result::Result<T, E>;

pub(crate) fn check_timestamp(timestamp: f64) -> Result<f64> {
    if timestamp.is_finite() {
        Ok(timestamp)
    } else {
        swarn!(timestamp, "rejected non-finite timestamp");
        Err(ScrollError::InvalidTimestamp(timestamp))
    }
}

pub(crate) fn check_offset(offset: f64) -> Result<f64> {
    if offset.is_finite() {
        Ok(offset)
    } else {
        swarn!(offset, "rejected non-finite offset");
        Err(ScrollError::InvalidOffset(offset))
    }
}
