//! The upload-then-mint session.
//!
//! An [`UploadSession`] holds the selected file and the ephemeral state of a
//! single upload attempt. [`UploadSession::upload`] runs the whole flow in
//! sequence:
//!
//! 1. store the raw file text on Walrus,
//! 2. derive [`crate::nft::NftMetadata`] from it and store that too,
//! 3. mint an NFT whose URI points at the metadata blob.
//!
//! Nothing is retried and nothing is rolled back. If minting fails, the
//! uploaded blobs stay on Walrus.

mod error;
mod minter;
mod progress;
mod session;

pub use {error::*, minter::*, progress::*, session::*};
