//! Errors raised while generating a color guide.

use thiserror::Error;

/// Errors coming from host services are kept opaque.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Which font service call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontOperation {
    /// Enumerating the fonts available to the host.
    List,
    /// Loading the resolved font.
    Load,
}

impl std::fmt::Display for FontOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontOperation::List => f.write_str("enumerating available fonts"),
            FontOperation::Load => f.write_str("loading font"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// The source rectangle has a non-positive or non-finite
    /// dimension.  Only reported when strict geometry is requested
    /// (see [`crate::GuideOptions::strict_geometry`]).
    #[error("invalid source geometry: {width} × {height}")]
    InvalidGeometry { width: f64, height: f64 },

    /// The host font service failed.  Never retried.
    #[error("font service failed while {operation}")]
    FontService {
        operation: FontOperation,
        #[source]
        source: BoxError,
    },

    /// The scene host rejected a node of the tree.
    #[error("materialization failed: {0}")]
    Materialization(#[source] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_error_keeps_source() {
        let e = Error::FontService {
            operation: FontOperation::Load,
            source: "no such face".into() };
        assert_eq!(e.to_string(), "font service failed while loading font");
        let src = std::error::Error::source(&e).map(|s| s.to_string());
        assert_eq!(src.as_deref(), Some("no such face"));
    }
}
