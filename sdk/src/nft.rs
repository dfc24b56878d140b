//! NFT metadata documents derived from uploaded JSON.
//!
//! The uploaded document is expected to look roughly like this:
//!
//! ```json
//! {
//!   "reaction": { "emoji": "🔥", "count": 3 },
//!   "nft_metadata": {
//!     "name": "Hot take",
//!     "description": "A reaction",
//!     "image": "https://example.com/fire.png",
//!     "attributes": [{ "trait_type": "rarity", "value": "rare" }]
//!   }
//! }
//! ```
//!
//! Both sections are optional. Missing string fields fall back from
//! `nft_metadata` to `reaction` and finally to an empty string.

use {
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
    thiserror::Error,
};

/// Trait type of the attribute pointing back at the uploaded source blob.
pub const SOURCE_BLOB_TRAIT: &str = "source_blob";

const REACTION_KEY: &str = "reaction";
const NFT_METADATA_KEY: &str = "nft_metadata";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NftError {
    #[error("Uploaded JSON must be an object")]
    NotAnObject,
    #[error("Field '{0}' of the uploaded JSON must be an object")]
    InvalidSection(&'static str),
    #[error("Attribute #{0} must be an object with a string 'trait_type'")]
    InvalidAttribute(usize),
}

/// A single NFT trait.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NftAttribute {
    pub trait_type: String,
    pub value: Value,
}

impl NftAttribute {
    pub fn new<T: Into<String>, V: Into<Value>>(trait_type: T, value: V) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// NFT metadata document that is stored on Walrus and referenced by the
/// minted token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<NftAttribute>,
}

impl NftMetadata {
    /// Derive metadata from the uploaded JSON document.
    ///
    /// Attributes are, in order: `nft_metadata.attributes`, every scalar field
    /// of `reaction` (sorted by key) and finally a [`SOURCE_BLOB_TRAIT`]
    /// pointing at `source_blob_url`.
    pub fn derive(uploaded: &Value, source_blob_url: &str) -> Result<Self, NftError> {
        let root = uploaded.as_object().ok_or(NftError::NotAnObject)?;

        let reaction = section(root, REACTION_KEY)?;
        let nft_metadata = section(root, NFT_METADATA_KEY)?;

        let text = |key: &str| {
            [nft_metadata, reaction]
                .into_iter()
                .flatten()
                .find_map(|section| section.get(key).and_then(Value::as_str))
                .unwrap_or_default()
                .to_string()
        };

        let mut attributes = match nft_metadata.and_then(|section| section.get("attributes")) {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| attribute(index, item).transpose())
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(NftError::InvalidSection("nft_metadata.attributes")),
            None => vec![],
        };

        if let Some(reaction) = reaction {
            // Key order of `Map` depends on serde_json features.
            let mut fields = reaction
                .iter()
                .filter(|(_, value)| is_scalar(value))
                .collect::<Vec<_>>();

            fields.sort_by(|(a, _), (b, _)| a.cmp(b));

            attributes.extend(
                fields
                    .into_iter()
                    .map(|(key, value)| NftAttribute::new(key.as_str(), value.clone())),
            );
        }

        attributes.push(NftAttribute::new(SOURCE_BLOB_TRAIT, source_blob_url));

        Ok(Self {
            name: text("name"),
            description: text("description"),
            image: text("image"),
            attributes,
        })
    }

    /// Value of the [`SOURCE_BLOB_TRAIT`] attribute.
    pub fn source_blob_url(&self) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|attribute| attribute.trait_type == SOURCE_BLOB_TRAIT)
            .and_then(|attribute| attribute.value.as_str())
    }
}

fn section<'a>(
    root: &'a Map<String, Value>,
    key: &'static str,
) -> Result<Option<&'a Map<String, Value>>, NftError> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(section)) => Ok(Some(section)),
        Some(_) => Err(NftError::InvalidSection(key)),
    }
}

/// Attributes without a scalar value are skipped, like `reaction` fields.
fn attribute(index: usize, item: &Value) -> Result<Option<NftAttribute>, NftError> {
    let item = item.as_object().ok_or(NftError::InvalidAttribute(index))?;

    let trait_type = item
        .get("trait_type")
        .and_then(Value::as_str)
        .ok_or(NftError::InvalidAttribute(index))?;

    Ok(item
        .get("value")
        .filter(|value| is_scalar(value))
        .map(|value| NftAttribute::new(trait_type, value.clone())))
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}
