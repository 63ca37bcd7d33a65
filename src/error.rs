use thiserror::Error;

#[derive(Debug, Error)]
pub enum OhmlabError {
    /// Malformed numeric text or an unrecognised command.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value outside its declared valid range. The previous value is kept.
    #[error("Range error: {name} must be between {min} and {max} (got {value})")]
    Range {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown input '{0}'")]
    UnknownKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, OhmlabError>;

/// Reject `value` unless it lies in `[min, max]`.
pub fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<f64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(OhmlabError::Range {
            name: name.to_string(),
            value,
            min,
            max,
        })
    }
}
