//! Import orchestration.
//!
//! Composes endpoint resolution, OID reconciliation and download link
//! resolution into the LFS leg of a repository import. The surrounding
//! application (persistence, repository scanning, job scheduling) stays
//! behind the narrow traits defined here.

use std::collections::HashSet;

use crate::download_links::{DownloadLinkMap, ResolveDownloadLinks};
use crate::endpoint::{self, RemoteEndpoint, Resolution};
use crate::reconcile::{self, OidMap};
use crate::{Error, Result};

/// The repository being imported, as seen by this crate.
pub trait Repository {
    /// Whether LFS is enabled for this repository.
    fn lfs_enabled(&self) -> bool;

    /// The configured import URL. May be absent or malformed; this crate
    /// validates it during endpoint resolution.
    fn import_url(&self) -> Option<String>;

    /// Raw content of the `.lfsconfig` blob at the default branch head.
    fn lfsconfig(&self) -> Option<String>;

    /// Turn the LFS flag off. Called when a third-party LFS provider is
    /// detected; the import is abandoned for good, not merely skipped.
    fn disable_lfs(&mut self) -> Result<()>;
}

/// Lists every OID referenced by the repository's history, with sizes.
pub trait ExistingOids {
    fn existing_oids(&self) -> Result<OidMap>;
}

/// Reports which of the given OIDs already have a local pointer record.
pub trait LinkedOids {
    fn linked_oids(&self, oids: &OidMap) -> Result<HashSet<String>>;
}

/// Memoized outcome of endpoint resolution; computed at most once per
/// import attempt.
#[derive(Debug, Clone)]
enum EndpointState {
    Enabled(RemoteEndpoint),
    Disabled,
}

/// Runs the LFS import workflow for one repository.
///
/// One instance handles exactly one import attempt; the resolved endpoint
/// is cached for the instance's lifetime.
pub struct LfsImportService<R, E, L, D> {
    repository: R,
    existing: E,
    linked: L,
    resolver: D,
    endpoint: Option<EndpointState>,
}

impl<R, E, L, D> LfsImportService<R, E, L, D>
where
    R: Repository,
    E: ExistingOids,
    L: LinkedOids,
    D: ResolveDownloadLinks,
{
    pub fn new(repository: R, existing: E, linked: L, resolver: D) -> Self {
        LfsImportService {
            repository,
            existing,
            linked,
            resolver,
            endpoint: None,
        }
    }

    /// Resolve the download links for every LFS object the repository still
    /// needs.
    ///
    /// Returns an empty map when LFS is disabled, or when a third-party LFS
    /// provider is detected (in which case LFS is also switched off for the
    /// repository). Configuration and batch failures surface as
    /// [`Error::Import`]; collaborator failures pass through unchanged.
    pub fn execute(&mut self) -> Result<DownloadLinkMap> {
        if !self.repository.lfs_enabled() {
            return Ok(DownloadLinkMap::new());
        }

        let endpoint = match self.resolve_endpoint()? {
            EndpointState::Enabled(endpoint) => endpoint,
            EndpointState::Disabled => return Ok(DownloadLinkMap::new()),
        };

        let existing = self.existing.existing_oids()?;
        let linked = self.linked.linked_oids(&existing)?;
        let missing = reconcile::missing_oids(&existing, &linked);

        self.resolver
            .resolve(&endpoint, &missing)
            .map_err(wrap_step_failure)
    }

    /// Consume the service, handing the repository back to the caller (to
    /// inspect the LFS flag after an external-provider outcome, say).
    pub fn into_repository(self) -> R {
        self.repository
    }

    fn resolve_endpoint(&mut self) -> Result<EndpointState> {
        if let Some(state) = &self.endpoint {
            return Ok(state.clone());
        }

        let state = self.compute_endpoint()?;
        self.endpoint = Some(state.clone());
        Ok(state)
    }

    fn compute_endpoint(&mut self) -> Result<EndpointState> {
        let import_url = self.repository.import_url().ok_or_else(|| {
            wrap_step_failure(Error::InvalidConfiguration(
                "repository has no import URL".to_string(),
            ))
        })?;

        let lfsconfig = self.repository.lfsconfig();
        let resolution =
            endpoint::resolve(lfsconfig.as_deref(), &import_url).map_err(wrap_step_failure)?;

        match resolution {
            Resolution::Endpoint(endpoint) => Ok(EndpointState::Enabled(endpoint)),
            Resolution::ExternalProvider { host } => {
                tracing::info!(
                    host = host.as_deref().unwrap_or("<none>"),
                    "third-party LFS provider detected, disabling LFS for repository"
                );
                self.repository.disable_lfs()?;
                Ok(EndpointState::Disabled)
            }
        }
    }
}

/// Failures of the import's own steps surface as [`Error::Import`];
/// anything else (collaborator errors) is left alone.
fn wrap_step_failure(err: Error) -> Error {
    match err {
        err @ (Error::InvalidConfiguration(_) | Error::DownloadLinks(_)) => err.into_import(),
        other => other,
    }
}
