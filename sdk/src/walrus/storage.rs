use {
    crate::walrus::{BlobObject, EventOrObject},
    serde::{Deserialize, Serialize},
};

/// Response of the publisher `PUT /v1/store` endpoint. Exactly one of the
/// variants is present on the wire:
///
/// ```json
/// { "newlyCreated": { "blobObject": { ... }, "encodedSize": 1, "cost": 1 } }
/// { "alreadyCertified": { "blobId": "...", "eventOrObject": { ... }, "endEpoch": 1 } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadResponse {
    NewlyCreated(NewlyCreated),
    AlreadyCertified(AlreadyCertified),
}

impl UploadResponse {
    /// Blob ID of the stored content regardless of the variant.
    pub fn blob_id(&self) -> &str {
        match self {
            UploadResponse::NewlyCreated(created) => &created.blob_object.blob_id,
            UploadResponse::AlreadyCertified(certified) => &certified.blob_id,
        }
    }

    /// Epoch until which the blob is stored.
    pub fn end_epoch(&self) -> u64 {
        match self {
            UploadResponse::NewlyCreated(created) => created.blob_object.storage.end_epoch,
            UploadResponse::AlreadyCertified(certified) => certified.end_epoch,
        }
    }

    pub fn is_already_certified(&self) -> bool {
        matches!(self, UploadResponse::AlreadyCertified(_))
    }

    /// The created blob object if the content was not stored before.
    pub fn newly_created(&self) -> Option<&NewlyCreated> {
        match self {
            UploadResponse::NewlyCreated(created) => Some(created),
            UploadResponse::AlreadyCertified(_) => None,
        }
    }
}

/// Information about a newly created blob
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewlyCreated {
    pub blob_object: BlobObject,
    #[serde(default)]
    pub encoded_size: u64,
    #[serde(default)]
    pub cost: u64,
}

/// Information about a blob that was already certified
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlreadyCertified {
    pub blob_id: String,
    pub event_or_object: EventOrObject,
    pub end_epoch: u64,
}
