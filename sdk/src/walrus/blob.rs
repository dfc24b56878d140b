use serde::{Deserialize, Serialize};

/// Represents a blob object in the Walrus network
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobObject {
    /// The Sui object ID of the blob
    pub id: String,
    /// Epoch in which the blob was registered. Newer publishers call this
    /// `registeredEpoch`.
    #[serde(default, alias = "registeredEpoch")]
    pub stored_epoch: u64,
    /// The unique identifier of the blob content
    pub blob_id: String,
    /// The unencoded size of the blob in bytes
    #[serde(default)]
    pub size: u64,
    #[serde(default, alias = "encodingType")]
    pub erasure_code_type: String,
    /// `None` until the blob is certified
    #[serde(default)]
    pub certified_epoch: Option<u64>,
    pub storage: BlobStorage,
}

/// Storage resource backing a blob
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobStorage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub start_epoch: u64,
    pub end_epoch: u64,
    #[serde(default)]
    pub storage_size: u64,
}
