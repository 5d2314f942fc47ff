//! # lfs-import
//!
//! The Git LFS leg of a repository import: finds out where a repository's
//! LFS objects live, which ones are still missing locally, and resolves an
//! authenticated download URL for each of them through the LFS Batch API.
//!
//! The crate deliberately knows nothing about how repositories are stored
//! or scanned; those concerns come in through the [`Repository`],
//! [`ExistingOids`] and [`LinkedOids`] traits.
//!
//! ## Example
//!
//! ```no_run
//! use lfs_import::{DownloadLinkListService, LfsImportService};
//! # use lfs_import::{ExistingOids, LinkedOids, OidMap, Repository, Result};
//! # use std::collections::HashSet;
//! # struct Repo;
//! # impl Repository for Repo {
//! #     fn lfs_enabled(&self) -> bool { true }
//! #     fn import_url(&self) -> Option<String> { Some("http://example.com/demo/repo.git".into()) }
//! #     fn lfsconfig(&self) -> Option<String> { None }
//! #     fn disable_lfs(&mut self) -> Result<()> { Ok(()) }
//! # }
//! # struct Scan;
//! # impl ExistingOids for Scan {
//! #     fn existing_oids(&self) -> Result<OidMap> { Ok(OidMap::new()) }
//! # }
//! # struct Links;
//! # impl LinkedOids for Links {
//! #     fn linked_oids(&self, _: &OidMap) -> Result<HashSet<String>> { Ok(HashSet::new()) }
//! # }
//!
//! let mut import = LfsImportService::new(Repo, Scan, Links, DownloadLinkListService::new());
//!
//! // OID -> download URL for every object still missing locally.
//! let links = import.execute().unwrap();
//! ```

mod batch;
mod download_links;
mod endpoint;
mod error;
mod import;
mod reconcile;

pub use batch::{
    Action, BatchObject, BatchRequest, BatchRequestObject, BatchResponse, Operation, CONTENT_TYPE,
};
pub use download_links::{
    DownloadLinkListService, DownloadLinkMap, ResolveDownloadLinks, DEFAULT_TIMEOUT,
};
pub use endpoint::{resolve as resolve_endpoint, RemoteEndpoint, Resolution, BATCH_PATH};
pub use error::{Error, Result};
pub use import::{ExistingOids, LfsImportService, LinkedOids, Repository};
pub use reconcile::{missing_oids, OidMap};
