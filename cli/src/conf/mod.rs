use crate::{command_title, display::json_output, loading, prelude::*};

#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ConfCommand {
    #[arg(
        long = "sui.net",
        help = "Set the Sui network",
        value_enum,
        value_name = "NET"
    )]
    sui_net: Option<SuiNet>,
    #[arg(
        long = "sui.wallet-path",
        help = "Set the Sui wallet path",
        value_name = "PATH",
        value_parser = ValueParser::from(expand_tilde)
    )]
    sui_wallet_path: Option<PathBuf>,
    #[arg(
        long = "sui.rpc-url",
        help = "Set a custom RPC URL for the Sui node",
        value_name = "URL"
    )]
    sui_rpc_url: Option<reqwest::Url>,
    #[arg(
        long = "walrus.publisher-url",
        help = "Set the Walrus publisher URL",
        value_name = "URL"
    )]
    walrus_publisher_url: Option<String>,
    #[arg(
        long = "walrus.aggregator-url",
        help = "Set the Walrus aggregator URL",
        value_name = "URL"
    )]
    walrus_aggregator_url: Option<String>,
    #[arg(
        long = "walrus.epochs",
        help = "Set the number of epochs to store blobs for",
        value_name = "EPOCHS"
    )]
    walrus_epochs: Option<u64>,
    #[arg(
        long = "walrus.send-object-to",
        help = "Set the address that receives the blob objects",
        value_name = "ADDRESS"
    )]
    walrus_send_object_to: Option<String>,
    #[arg(
        long = "nft.package-id",
        help = "Set the NFT package ID",
        value_name = "PKG_ID"
    )]
    nft_package_id: Option<sui::ObjectID>,
    #[arg(
        long = "nft.module",
        help = "Set the NFT module name",
        value_name = "MODULE"
    )]
    nft_module: Option<String>,
    #[arg(
        long = "nft.function",
        help = "Set the NFT mint function name",
        value_name = "FUNCTION"
    )]
    nft_function: Option<String>,
    /// Hidden argument used for testing to set the path of the configuration
    /// file.
    #[arg(
        long = "conf-path",
        hide = true,
        default_value = CLI_CONF_PATH,
        value_parser = ValueParser::from(expand_tilde)
    )]
    conf_path: PathBuf,
}

impl ConfCommand {
    fn is_empty(&self) -> bool {
        self.sui_net.is_none()
            && self.sui_wallet_path.is_none()
            && self.sui_rpc_url.is_none()
            && self.walrus_publisher_url.is_none()
            && self.walrus_aggregator_url.is_none()
            && self.walrus_epochs.is_none()
            && self.walrus_send_object_to.is_none()
            && self.nft_package_id.is_none()
            && self.nft_module.is_none()
            && self.nft_function.is_none()
    }

    /// Merge the provided flags into the conf. Missing flags leave the
    /// current values intact.
    fn apply(self, conf: &mut CliConf) {
        conf.sui.net = self.sui_net.unwrap_or(conf.sui.net);
        conf.sui.wallet_path = self.sui_wallet_path.unwrap_or(conf.sui.wallet_path.clone());
        conf.sui.rpc_url = self.sui_rpc_url.or(conf.sui.rpc_url.take());

        if let Some(url) = self.walrus_publisher_url {
            conf.walrus.publisher_url = url;
        }

        if let Some(url) = self.walrus_aggregator_url {
            conf.walrus.aggregator_url = url;
        }

        conf.walrus.epochs = self.walrus_epochs.or(conf.walrus.epochs);
        conf.walrus.send_object_to = self
            .walrus_send_object_to
            .or(conf.walrus.send_object_to.take());

        conf.nft.package_id = self.nft_package_id.or(conf.nft.package_id);

        if let Some(module) = self.nft_module {
            conf.nft.module = module;
        }

        if let Some(function) = self.nft_function {
            conf.nft.function = function;
        }
    }
}

/// Handle the provided conf command. The [ConfCommand] instance is passed from
/// [crate::main].
pub(crate) async fn handle(command: ConfCommand) -> AnyResult<(), BlobmintCliError> {
    let conf_path = command.conf_path.clone();

    let mut conf = CliConf::load_from_path(&conf_path)
        .await
        .unwrap_or_default();

    // If all fields are None, we just want to display the current configuration.
    if command.is_empty() {
        command_title!("Current Blobmint CLI Configuration");

        if !JSON_MODE.load(Ordering::Relaxed) {
            match toml::to_string_pretty(&conf) {
                Ok(conf) => println!("{conf}"),
                Err(e) => return Err(BlobmintCliError::Any(e.into())),
            }
        }

        return json_output(&conf);
    }

    command_title!("Updating Blobmint CLI Configuration");

    let conf_handle = loading!("Updating configuration...");

    command.apply(&mut conf);

    match conf.save_to_path(&conf_path).await {
        Ok(()) => {
            conf_handle.success();

            json_output(&conf)
        }
        Err(e) => {
            conf_handle.error();

            Err(BlobmintCliError::Any(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches};

    #[tokio::test]
    async fn test_conf_loads_and_saves() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join(".blobmint/conf.toml");

        assert!(!tokio::fs::try_exists(&path).await.unwrap());

        let nft_package_id = Some(sui::ObjectID::random());

        let command = ConfCommand {
            sui_net: Some(SuiNet::Testnet),
            sui_wallet_path: Some(tempdir.path().join("wallet")),
            sui_rpc_url: Some(reqwest::Url::parse("https://fullnode.testnet.sui.io").unwrap()),
            walrus_publisher_url: Some("http://publisher.local".to_string()),
            walrus_epochs: Some(5),
            nft_package_id,
            nft_module: Some("collectible".to_string()),
            conf_path: path.clone(),
            ..Default::default()
        };

        // Command saves values.
        let result = handle(command).await;

        assert_matches!(result, Ok(()));

        let conf = CliConf::load_from_path(&path).await.unwrap();

        assert_eq!(conf.sui.net, SuiNet::Testnet);
        assert_eq!(conf.sui.wallet_path, tempdir.path().join("wallet"));
        assert_eq!(
            conf.sui.rpc_url,
            Some(reqwest::Url::parse("https://fullnode.testnet.sui.io").unwrap())
        );
        assert_eq!(conf.walrus.publisher_url, "http://publisher.local");
        assert_eq!(
            conf.walrus.aggregator_url,
            blobmint_sdk::walrus::WALRUS_AGGREGATOR_URL
        );
        assert_eq!(conf.walrus.epochs, Some(5));
        assert_eq!(conf.nft.package_id, nft_package_id);
        assert_eq!(conf.nft.module, "collectible");
        assert_eq!(conf.nft.function, "mint");

        // Overriding one value will save that one value and leave other values intact.
        let command = ConfCommand {
            sui_net: Some(SuiNet::Mainnet),
            conf_path: path.clone(),
            ..Default::default()
        };

        let result = handle(command).await;

        assert_matches!(result, Ok(()));

        let conf = CliConf::load_from_path(&path).await.unwrap();

        assert_eq!(conf.sui.net, SuiNet::Mainnet);
        assert_eq!(conf.sui.wallet_path, tempdir.path().join("wallet"));
        assert_eq!(conf.walrus.publisher_url, "http://publisher.local");
        assert_eq!(conf.walrus.epochs, Some(5));
        assert_eq!(conf.nft.package_id, nft_package_id);
        assert_eq!(conf.nft.module, "collectible");
    }

    #[tokio::test]
    async fn test_conf_without_flags_does_not_write() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("conf.toml");

        let command = ConfCommand {
            conf_path: path.clone(),
            ..Default::default()
        };

        assert!(command.is_empty());
        assert_matches!(handle(command).await, Ok(()));
        assert!(!tokio::fs::try_exists(&path).await.unwrap());
    }
}
