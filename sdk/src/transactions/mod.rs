/// Transactions minting NFTs that reference Walrus blobs.
pub mod nft;
