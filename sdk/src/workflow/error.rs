use {
    crate::{nft::NftError, walrus::WalrusError},
    std::path::PathBuf,
    thiserror::Error,
};

/// Shown when an upload is requested before a file was selected.
pub const NO_FILE_ALERT: &str = "Please select a file first!";
/// User visible message for failures while reading or uploading.
pub const UPLOAD_ERROR_MESSAGE: &str = "An error occurred while uploading the file.";
/// User visible message for failures of the mint call.
pub const MINT_ERROR_MESSAGE: &str = "An error occurred while minting the NFT.";
/// Informational message for content that Walrus already certified.
pub const ALREADY_UPLOADED_MESSAGE: &str = "Data has already been uploaded.";

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Please select a file first!")]
    NoFileSelected,
    #[error("Failed to read file '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to upload to Walrus: {0}")]
    Upload(#[from] WalrusError),
    #[error("Uploaded file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Failed to derive NFT metadata: {0}")]
    Metadata(#[from] NftError),
    #[error("Failed to mint NFT: {0}")]
    Mint(anyhow::Error),
}

impl WorkflowError {
    /// The single message the user gets to see for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            WorkflowError::NoFileSelected => NO_FILE_ALERT,
            WorkflowError::Mint(_) => MINT_ERROR_MESSAGE,
            _ => UPLOAD_ERROR_MESSAGE,
        }
    }
}
