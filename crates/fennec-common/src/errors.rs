use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("preference not set: {0}")]
    MissingPref(String),
}

/// Failures talking to the embedded content surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("content surface is not ready")]
    NotReady,

    #[error("content surface has no current uri")]
    NoUri,

    #[error("engine error: {0}")]
    Engine(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FennecError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("click_threshold must be >= 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: click_threshold must be >= 0"
        );

        let err = ConfigError::MissingPref("browser.last.uri".into());
        assert_eq!(err.to_string(), "preference not set: browser.last.uri");
    }

    #[test]
    fn surface_error_display() {
        assert_eq!(
            SurfaceError::NotReady.to_string(),
            "content surface is not ready"
        );
        assert_eq!(
            SurfaceError::NoUri.to_string(),
            "content surface has no current uri"
        );
        assert_eq!(
            SurfaceError::Engine("script failed".into()).to_string(),
            "engine error: script failed"
        );
    }

    #[test]
    fn fennec_error_from_config() {
        let err: FennecError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, FennecError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn fennec_error_from_surface() {
        let err: FennecError = SurfaceError::NotReady.into();
        assert!(matches!(err, FennecError::Surface(SurfaceError::NotReady)));
    }
}
