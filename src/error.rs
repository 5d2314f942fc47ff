//! Error types for LFS import operations.

use thiserror::Error;

/// Result type for LFS import operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving LFS download links for an import.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed `.lfsconfig` URL or repository import URL.
    #[error("invalid LFS configuration: {0}")]
    InvalidConfiguration(String),

    /// The batch request to the remote LFS endpoint failed.
    #[error("LFS batch request failed: {0}")]
    DownloadLinks(String),

    /// The import as a whole failed. This is the only error the import
    /// orchestrator surfaces for failures of its own steps.
    #[error("the LFS objects download list couldn't be imported: {0}")]
    Import(#[source] Box<Error>),

    /// A failure raised by an injected collaborator (repository scan,
    /// persistence check, LFS flag update). Passed through unchanged.
    #[error(transparent)]
    Provider(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a collaborator failure so it propagates through this crate's
    /// `Result` without being reinterpreted.
    pub fn provider<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Provider(Box::new(err))
    }

    /// Wrap an import-step failure into the orchestrator-level error.
    pub(crate) fn into_import(self) -> Self {
        Error::Import(Box::new(self))
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => {
                let status_text = response.status_text().to_string();
                Error::DownloadLinks(format!("{} {}", code, status_text))
            }
            other => Error::DownloadLinks(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_wraps_source() {
        let err = Error::DownloadLinks("500 Internal Server Error".into()).into_import();

        assert!(matches!(err, Error::Import(_)));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("500"));
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "db gone");
        let err = Error::provider(inner);

        assert_eq!(err.to_string(), "db gone");
    }
}
