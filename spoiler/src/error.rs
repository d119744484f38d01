use thiserror::Error;

/// Configuration misuse detected by [`SpoilerConfig::validate`].
///
/// The component itself never returns these; it logs them and degrades to
/// always treating the content as overflowing.
///
/// [`SpoilerConfig::validate`]: crate::SpoilerConfig::validate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `max_height` was zero, negative or NaN.
    #[error("max_height must be a positive number, got {0}")]
    NonPositiveMaxHeight(f32),
}
