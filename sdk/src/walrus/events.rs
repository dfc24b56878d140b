use serde::{Deserialize, Serialize};

/// Represents a Sui blockchain event
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiEvent {
    pub tx_digest: String,
    pub event_seq: String,
}

/// Proof of certification of an already stored blob. Either the Sui event
/// that certified it or the Sui object ID of the blob.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum EventOrObject {
    Event(SuiEvent),
    Object(String),
}
