use {
    crate::walrus::{UploadResponse, WalrusError},
    reqwest::{header::CONTENT_TYPE, Client, Response},
    serde::{de::DeserializeOwned, Serialize},
};

// Publisher and Aggregator URLs are from <https://github.com/MystenLabs/walrus/blob/232d27ff7b3c2ba08aa4e10729b095f300b46384/docs/book/assets/operators.json>
// Walrus Default API Endpoints
pub const WALRUS_PUBLISHER_URL: &str = "https://publisher.walrus-testnet.walrus.space";
pub const WALRUS_AGGREGATOR_URL: &str = "https://aggregator.walrus-testnet.walrus.space";

/// Builder for WalrusClient configuration
pub struct WalrusClientBuilder {
    client: Client,
    publisher_url: String,
    aggregator_url: String,
    epochs: Option<u64>,
    send_object_to: Option<String>,
}

impl Default for WalrusClientBuilder {
    fn default() -> Self {
        Self {
            client: Client::new(),
            publisher_url: WALRUS_PUBLISHER_URL.to_string(),
            aggregator_url: WALRUS_AGGREGATOR_URL.to_string(),
            epochs: None,
            send_object_to: None,
        }
    }
}

impl WalrusClientBuilder {
    /// Create a new WalrusClientBuilder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set a custom publisher URL. Trailing slashes are dropped.
    pub fn with_publisher_url(mut self, url: &str) -> Self {
        self.publisher_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set a custom aggregator URL. Trailing slashes are dropped.
    pub fn with_aggregator_url(mut self, url: &str) -> Self {
        self.aggregator_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Number of epochs to store blobs for. The publisher default applies
    /// when unset.
    pub fn with_epochs(mut self, epochs: Option<u64>) -> Self {
        self.epochs = epochs;
        self
    }

    /// Address to which the created Blob objects should be sent.
    pub fn with_send_object_to(mut self, address: Option<String>) -> Self {
        self.send_object_to = address;
        self
    }

    /// Build the WalrusClient with the configured settings
    pub fn build(self) -> WalrusClient {
        WalrusClient {
            client: self.client,
            publisher_url: self.publisher_url,
            aggregator_url: self.aggregator_url,
            epochs: self.epochs,
            send_object_to: self.send_object_to,
        }
    }
}

/// Client for interacting with the Walrus decentralized blob storage system
pub struct WalrusClient {
    client: Client,
    publisher_url: String,
    aggregator_url: String,
    epochs: Option<u64>,
    send_object_to: Option<String>,
}

impl Default for WalrusClient {
    fn default() -> Self {
        WalrusClientBuilder::default().build()
    }
}

impl WalrusClient {
    /// Create a new WalrusClient with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a builder to create a customized WalrusClient
    pub fn builder() -> WalrusClientBuilder {
        WalrusClientBuilder::default()
    }

    pub fn publisher_url(&self) -> &str {
        &self.publisher_url
    }

    pub fn aggregator_url(&self) -> &str {
        &self.aggregator_url
    }

    /// URL under which the aggregator serves the given blob.
    ///
    /// This is also the URI that ends up in minted NFTs.
    pub fn blob_url(&self, blob_id: &str) -> String {
        format!("{}/v1/{}", self.aggregator_url, blob_id)
    }

    /// Store raw JSON text on Walrus. The text is sent as-is.
    ///
    /// # Arguments
    /// * `content` - JSON text to store
    ///
    /// # Returns
    /// * `Result<UploadResponse, WalrusError>` - Either the newly created blob
    ///   or the certificate of an identical blob stored earlier
    pub async fn store_text(&self, content: String) -> Result<UploadResponse, WalrusError> {
        let url = self.store_url();

        log::debug!("Storing {} bytes at {url}", content.len());

        let response = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(content)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;

        Ok(response.json::<UploadResponse>().await?)
    }

    /// Serialize data to JSON and store it on Walrus.
    pub async fn store_json<T: Serialize>(&self, data: &T) -> Result<UploadResponse, WalrusError> {
        let json_content = serde_json::to_string(data)?;

        self.store_text(json_content).await
    }

    /// Download and parse JSON data from Walrus
    ///
    /// # Arguments
    /// * `blob_id` - The blob ID of the JSON data to download
    ///
    /// # Type Parameters
    /// * `T` - The type to deserialize the JSON into, must implement DeserializeOwned
    pub async fn read_json<T: DeserializeOwned>(&self, blob_id: &str) -> Result<T, WalrusError> {
        let response = self.client.get(self.blob_url(blob_id)).send().await?;

        let response = Self::ensure_success(response).await?;

        Ok(response.json::<T>().await?)
    }

    /// Verify if a blob exists in the Walrus network
    ///
    /// # Returns
    /// * `Result<bool, WalrusError>` - True if the blob exists, false otherwise
    pub async fn verify_blob(&self, blob_id: &str) -> Result<bool, WalrusError> {
        let response = self.client.head(self.blob_url(blob_id)).send().await?;

        Ok(response.status().is_success())
    }

    /// Publisher store endpoint with the configured query parameters.
    fn store_url(&self) -> String {
        let mut params = Vec::new();

        if let Some(epochs) = self.epochs {
            params.push(format!("epochs={epochs}"));
        }

        if let Some(address) = &self.send_object_to {
            params.push(format!("send_object_to={address}"));
        }

        let url = format!("{}/v1/store", self.publisher_url);

        if params.is_empty() {
            url
        } else {
            format!("{url}?{}", params.join("&"))
        }
    }

    async fn ensure_success(response: Response) -> Result<Response, WalrusError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await?;

        Err(WalrusError::ApiError {
            status_code: status.as_u16(),
            message,
        })
    }
}
