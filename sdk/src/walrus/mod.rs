//! Walrus client module provides integration with the Walrus decentralized blob storage system.
//!
//! This module allows for:
//! - Storing raw JSON text and serializable data on the Walrus network
//! - Building aggregator URLs for stored blobs
//! - Reading and parsing JSON data from the Walrus network
//! - Verifying the existence of blobs in the Walrus network

mod blob;
mod client;
mod error;
mod events;
mod storage;

pub use {blob::*, client::*, error::*, events::*, storage::*};
