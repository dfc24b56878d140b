//! This library contains the building blocks of blobmint: a Walrus client,
//! NFT metadata derivation, the upload-then-mint session and the Sui
//! transaction templates used by the CLI to mint.

/// Walrus client module provides integration with the Walrus decentralized
/// blob storage system.
#[cfg(feature = "walrus")]
pub mod walrus;

/// Deriving NFT metadata documents from uploaded JSON.
#[cfg(feature = "nft")]
pub mod nft;

/// The upload-then-mint session. Drives the Walrus client and a [`Minter`]
/// through the whole flow and keeps the progress log.
///
/// [`Minter`]: workflow::Minter
#[cfg(feature = "workflow")]
pub mod workflow;

/// Resource identifiers for the on-chain NFT module and helpers to build
/// Move arguments.
#[cfg(feature = "transactions")]
pub mod idents;
/// Re-exporting Sui types into something that makes more sense.
#[cfg(feature = "sui_types")]
pub mod sui;

/// PTB templates for the on-chain mint call.
#[cfg(feature = "transactions")]
pub mod transactions;
