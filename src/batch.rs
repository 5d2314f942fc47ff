//! LFS Batch API wire types.
//!
//! The Batch API is used to request transfer URLs for LFS objects.
//! Import resolution only ever asks for downloads.
//! See: https://github.com/git-lfs/git-lfs/blob/main/docs/api/batch.md

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::reconcile::OidMap;

/// Media type for LFS batch requests and responses.
pub const CONTENT_TYPE: &str = "application/vnd.git-lfs+json";

/// Action name carrying the download URL in a batch response.
pub const DOWNLOAD_ACTION: &str = "download";

/// Operation type for batch requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Download objects from the server.
    Download,
}

/// A batch request to the LFS server.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRequest {
    /// The operation to perform.
    pub operation: Operation,
    /// The objects to operate on.
    pub objects: Vec<BatchRequestObject>,
}

/// An object in a batch request.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRequestObject {
    /// The SHA256 OID of the object.
    pub oid: String,
    /// The size of the object in bytes.
    pub size: u64,
}

/// A batch response from the LFS server.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchResponse {
    /// The objects with their actions.
    #[serde(default)]
    pub objects: Vec<BatchObject>,
}

/// An object in a batch response.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchObject {
    /// The SHA256 OID of the object.
    pub oid: String,
    /// The size of the object in bytes.
    #[serde(default)]
    pub size: u64,
    /// Actions available for this object.
    #[serde(default)]
    pub actions: Option<HashMap<String, Action>>,
}

/// An action (transfer URL) for an object.
#[derive(Debug, Clone, Deserialize)]
pub struct Action {
    /// The URL for the action.
    pub href: String,
    /// HTTP headers to include in the request.
    #[serde(default)]
    pub header: HashMap<String, String>,
}

impl BatchRequest {
    /// Build a download request for every entry of an OID map.
    ///
    /// Request order follows map iteration order; the protocol does not
    /// assign it any meaning.
    pub fn download(oids: &OidMap) -> Self {
        BatchRequest {
            operation: Operation::Download,
            objects: oids
                .iter()
                .map(|(oid, &size)| BatchRequestObject {
                    oid: oid.clone(),
                    size,
                })
                .collect(),
        }
    }
}

impl BatchObject {
    /// Get the download href if the server provided one.
    pub fn download_href(&self) -> Option<&str> {
        self.actions
            .as_ref()?
            .get(DOWNLOAD_ACTION)
            .map(|action| action.href.as_str())
    }
}
