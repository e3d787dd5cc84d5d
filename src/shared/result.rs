/// Type alias for Result with anyhow::Error as the error type.
/// Application plumbing propagates through this; domain errors are `RadarError`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
