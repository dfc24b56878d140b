use {
    crate::{prelude::*, sui::*},
    blobmint_sdk::{
        transactions::nft::{self, MintTarget},
        workflow::{MintReceipt, Minter},
    },
};

/// [`Minter`] that signs `mint(recipient, uri)` with the local Sui wallet.
pub(crate) struct SuiMinter {
    sui: sui::Client,
    wallet: sui::WalletContext,
    address: sui::Address,
    target: MintTarget,
    gas: GasArgs,
}

impl SuiMinter {
    /// Connect to Sui and load the wallet described by the provided conf.
    pub(crate) async fn from_conf(conf: &CliConf, gas: GasArgs) -> AnyResult<Self, BlobmintCliError> {
        let target = mint_target(&conf.nft).map_err(BlobmintCliError::Any)?;

        let sui = build_sui_client(&conf.sui).await?;
        let mut wallet = create_wallet_context(&conf.sui).await?;

        let address = wallet.active_address().map_err(BlobmintCliError::Any)?;

        log::debug!("Minting with '{target}' as {address}");

        Ok(Self {
            sui,
            wallet,
            address,
            target,
            gas,
        })
    }
}

impl Minter for SuiMinter {
    fn address(&self) -> String {
        self.address.to_string()
    }

    async fn mint(&self, recipient: &str, uri: &str) -> AnyResult<MintReceipt> {
        let recipient = recipient.parse::<sui::Address>()?;

        let gas_coin = fetch_gas_coin(&self.sui, self.address, self.gas.sui_gas_coin).await?;
        let reference_gas_price = fetch_reference_gas_price(&self.sui).await?;

        let mut tx = sui::ProgrammableTransactionBuilder::new();

        nft::mint(&mut tx, &self.target, recipient, uri)?;

        let tx_data = sui::TransactionData::new_programmable(
            self.address,
            vec![gas_coin.object_ref()],
            tx.finish(),
            self.gas.sui_gas_budget,
            reference_gas_price,
        );

        let response = sign_and_execute_transaction(&self.sui, &self.wallet, tx_data).await?;

        Ok(MintReceipt {
            digest: response.digest.to_string(),
        })
    }
}

/// Resolve the Move function to call from the `[nft]` conf section.
fn mint_target(conf: &NftConf) -> AnyResult<MintTarget> {
    let Some(package_id) = conf.package_id else {
        return Err(anyhow!(
            "{message}\n\n{command}",
            message = "The NFT package ID is not configured. Set it with:",
            command = "$ blobmint conf --nft.package-id <PKG_ID>".bold(),
        ));
    };

    MintTarget::new(package_id).with_names(&conf.module, &conf.function)
}
