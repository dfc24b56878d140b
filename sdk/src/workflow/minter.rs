use {
    anyhow::{anyhow, Result as AnyResult},
    serde::{Deserialize, Serialize},
    std::future::Future,
};

/// Result of a successful mint call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    /// Digest of the transaction that minted the token.
    pub digest: String,
}

/// Contract client able to mint an NFT referencing a URI.
///
/// Implemented by the CLI on top of a Sui wallet. Tests implement it with a
/// recording fake.
pub trait Minter {
    /// Address of the account that signs the mint and receives the token.
    fn address(&self) -> String;

    /// Call `mint(recipient, uri)` on the NFT contract.
    fn mint(&self, recipient: &str, uri: &str) -> impl Future<Output = AnyResult<MintReceipt>>;
}

/// Placeholder for sessions that only upload and never mint.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMinter;

impl Minter for NoMinter {
    fn address(&self) -> String {
        String::new()
    }

    async fn mint(&self, _recipient: &str, _uri: &str) -> AnyResult<MintReceipt> {
        Err(anyhow!("Minting is disabled for upload-only sessions"))
    }
}
