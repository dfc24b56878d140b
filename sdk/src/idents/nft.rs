use crate::{idents::ModuleAndNameIdent, sui};

// == `<nft_pkg>::nft` ==

pub struct Nft;

const NFT_MODULE: &sui::MoveIdentStr = sui::move_ident_str!("nft");

impl Nft {
    /// Mint a token referencing a metadata URI and send it to a recipient.
    ///
    /// `<nft_pkg>::nft::mint(recipient: address, uri: String, ctx: &mut TxContext)`
    pub const MINT: ModuleAndNameIdent = ModuleAndNameIdent {
        module: NFT_MODULE,
        name: sui::move_ident_str!("mint"),
    };
}
