use {
    crate::{
        idents::{move_std, nft},
        sui,
    },
    anyhow::Result as AnyResult,
};

/// Fully qualified Move function that mints an NFT.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintTarget {
    pub package_id: sui::ObjectID,
    pub module: sui::Identifier,
    pub function: sui::Identifier,
}

impl MintTarget {
    /// Target `<package_id>::nft::mint`.
    pub fn new(package_id: sui::ObjectID) -> Self {
        Self {
            package_id,
            module: nft::Nft::MINT.module.into(),
            function: nft::Nft::MINT.name.into(),
        }
    }

    /// Override the module and function names.
    pub fn with_names(mut self, module: &str, function: &str) -> AnyResult<Self> {
        self.module = sui::Identifier::new(module)?;
        self.function = sui::Identifier::new(function)?;

        Ok(self)
    }
}

impl std::fmt::Display for MintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}::{}", self.package_id, self.module, self.function)
    }
}

/// PTB template for minting an NFT that references `uri`.
pub fn mint(
    tx: &mut sui::ProgrammableTransactionBuilder,
    target: &MintTarget,
    recipient: sui::Address,
    uri: &str,
) -> AnyResult<sui::Argument> {
    // `recipient: address`
    let recipient = tx.pure(recipient)?;

    // `uri: String`
    let uri = move_std::Utf8::utf8_string_from_str(tx, uri)?;

    // `<nft_pkg>::nft::mint()`
    Ok(tx.programmable_move_call(
        target.package_id,
        target.module.clone(),
        target.function.clone(),
        vec![],
        vec![recipient, uri],
    ))
}
