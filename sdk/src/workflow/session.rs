use {
    crate::{
        nft::NftMetadata,
        walrus::{UploadResponse, WalrusClient},
        workflow::{
            MintReceipt,
            Minter,
            NoMinter,
            ProgressLog,
            WorkflowError,
            ALREADY_UPLOADED_MESSAGE,
        },
    },
    serde::Serialize,
    std::path::{Path, PathBuf},
};

/// Where an upload attempt currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    #[default]
    Idle,
    Uploading,
    UploadingMetadata,
    Minting,
    Succeeded,
    Failed,
}

/// Which steps an upload attempt runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkflowMode {
    /// Store the file, store derived metadata, mint.
    #[default]
    UploadAndMint,
    /// Only store the file.
    UploadOnly,
}

/// Everything a successful upload attempt produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UploadSummary {
    pub file_blob: UploadResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NftMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_blob: Option<UploadResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<MintReceipt>,
}

/// State of the upload form. Holds the selected file and the results of the
/// latest upload attempt. All of it is reset when a new attempt starts.
pub struct UploadSession<M = NoMinter> {
    walrus: WalrusClient,
    minter: M,
    mode: WorkflowMode,
    file: Option<PathBuf>,
    loading: bool,
    error: Option<String>,
    result: Option<UploadResponse>,
    metadata: Option<NftMetadata>,
    metadata_result: Option<UploadResponse>,
    token_uri: Option<String>,
    receipt: Option<MintReceipt>,
    state: WorkflowState,
    log: ProgressLog,
}

impl UploadSession<NoMinter> {
    /// Session that only stores the selected file.
    pub fn upload_only(walrus: WalrusClient) -> Self {
        Self::with_mode(walrus, NoMinter, WorkflowMode::UploadOnly)
    }
}

impl<M: Minter> UploadSession<M> {
    /// Session that stores the file and its metadata and then mints.
    pub fn new(walrus: WalrusClient, minter: M) -> Self {
        Self::with_mode(walrus, minter, WorkflowMode::UploadAndMint)
    }

    fn with_mode(walrus: WalrusClient, minter: M, mode: WorkflowMode) -> Self {
        Self {
            walrus,
            minter,
            mode,
            file: None,
            loading: false,
            error: None,
            result: None,
            metadata: None,
            metadata_result: None,
            token_uri: None,
            receipt: None,
            state: WorkflowState::Idle,
            log: ProgressLog::new(),
        }
    }

    /// Remember the file to upload and forget any previous error.
    pub fn select_file<P: Into<PathBuf>>(&mut self, path: P) {
        self.file = Some(path.into());
        self.error = None;
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn mode(&self) -> WorkflowMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User visible error or notice of the latest attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Walrus response for the uploaded file.
    pub fn result(&self) -> Option<&UploadResponse> {
        self.result.as_ref()
    }

    pub fn metadata(&self) -> Option<&NftMetadata> {
        self.metadata.as_ref()
    }

    /// Walrus response for the uploaded metadata.
    pub fn metadata_result(&self) -> Option<&UploadResponse> {
        self.metadata_result.as_ref()
    }

    pub fn token_uri(&self) -> Option<&str> {
        self.token_uri.as_deref()
    }

    pub fn receipt(&self) -> Option<&MintReceipt> {
        self.receipt.as_ref()
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn log(&self) -> &ProgressLog {
        &self.log
    }

    pub fn minter(&self) -> &M {
        &self.minter
    }

    /// Run one upload attempt for the selected file.
    ///
    /// Without a selected file this returns [`WorkflowError::NoFileSelected`]
    /// and leaves the session untouched. Any other error is also stored as a
    /// user visible message, see [`WorkflowError::user_message`].
    pub async fn upload(&mut self) -> Result<UploadSummary, WorkflowError> {
        let Some(file) = self.file.clone() else {
            log::warn!("Upload requested without a selected file");

            return Err(WorkflowError::NoFileSelected);
        };

        self.reset();
        self.loading = true;

        let outcome = self.run(&file).await;

        self.loading = false;

        match outcome {
            Ok(summary) => {
                self.state = WorkflowState::Succeeded;

                Ok(summary)
            }
            Err(e) => {
                self.state = WorkflowState::Failed;
                self.log.push(format!("Error uploading the file: {e}"));
                self.error = Some(e.user_message().to_string());

                log::error!("Upload of '{}' failed: {e}", file.display());

                Err(e)
            }
        }
    }

    fn reset(&mut self) {
        self.error = None;
        self.result = None;
        self.metadata = None;
        self.metadata_result = None;
        self.token_uri = None;
        self.receipt = None;
        self.log.clear();
    }

    async fn run(&mut self, file: &Path) -> Result<UploadSummary, WorkflowError> {
        self.state = WorkflowState::Uploading;

        let content = tokio::fs::read_to_string(file)
            .await
            .map_err(|source| WorkflowError::ReadFile {
                path: file.to_path_buf(),
                source,
            })?;

        self.log.push("Uploading file to Walrus...");

        let file_blob = self.walrus.store_text(content.clone()).await?;

        match &file_blob {
            UploadResponse::NewlyCreated(_) => {
                self.log.push("File uploaded successfully!");
            }
            UploadResponse::AlreadyCertified(_) => {
                self.log.push(ALREADY_UPLOADED_MESSAGE);
                self.error = Some(ALREADY_UPLOADED_MESSAGE.to_string());
            }
        }

        self.log.push(format!("blobId: {}", file_blob.blob_id()));
        self.result = Some(file_blob.clone());

        if self.mode == WorkflowMode::UploadOnly {
            return Ok(UploadSummary {
                file_blob,
                metadata: None,
                metadata_blob: None,
                token_uri: None,
                receipt: None,
            });
        }

        self.state = WorkflowState::UploadingMetadata;

        // The raw text is uploaded as-is, only parsing ignores a leading BOM.
        let json = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let uploaded = serde_json::from_str::<serde_json::Value>(json)?;
        let metadata = NftMetadata::derive(&uploaded, &self.walrus.blob_url(file_blob.blob_id()))?;

        self.metadata = Some(metadata.clone());
        self.log.push("Uploading NFT metadata to Walrus...");

        let metadata_blob = self.walrus.store_json(&metadata).await?;

        match &metadata_blob {
            UploadResponse::NewlyCreated(_) => {
                self.log.push("NFT metadata uploaded successfully!");
            }
            UploadResponse::AlreadyCertified(_) => {
                self.log.push("NFT metadata has already been uploaded.");
            }
        }

        self.log.push(format!("Metadata blobId: {}", metadata_blob.blob_id()));
        self.metadata_result = Some(metadata_blob.clone());

        self.state = WorkflowState::Minting;

        let token_uri = self.walrus.blob_url(metadata_blob.blob_id());
        let recipient = self.minter.address();

        self.token_uri = Some(token_uri.clone());
        self.log.push(format!("Minting NFT for {recipient} with URI {token_uri}..."));

        let receipt = self
            .minter
            .mint(&recipient, &token_uri)
            .await
            .map_err(WorkflowError::Mint)?;

        self.log.push("NFT minted successfully!");
        self.log.push(format!("Transaction digest: {}", receipt.digest));
        self.receipt = Some(receipt.clone());

        Ok(UploadSummary {
            file_blob,
            metadata: Some(metadata),
            metadata_blob: Some(metadata_blob),
            token_uri: Some(token_uri),
            receipt: Some(receipt),
        })
    }
}
