pub(crate) use {
    crate::error::BlobmintCliError,
    anyhow::{anyhow, Result as AnyResult},
    blobmint_sdk::sui,
    clap::{builder::ValueParser, Args, CommandFactory, Parser, Subcommand, ValueEnum},
    colored::Colorize,
    serde::{Deserialize, Serialize},
    serde_json::json,
    std::{
        path::{Path, PathBuf},
        sync::atomic::{AtomicBool, Ordering},
    },
};

// Where to find config file.
pub(crate) const CLI_CONF_PATH: &str = "~/.blobmint/conf.toml";

/// Env vars overriding the configured endpoints.
pub(crate) const PUBLISHER_URL_ENV: &str = "BLOBMINT_PUBLISHER_URL";
pub(crate) const AGGREGATOR_URL_ENV: &str = "BLOBMINT_AGGREGATOR_URL";
pub(crate) const SUI_RPC_URL_ENV: &str = "SUI_RPC_URL";

/// When set, all human readable output is suppressed and commands print JSON.
pub(crate) static JSON_MODE: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SuiNet {
    #[default]
    Localnet,
    Devnet,
    Testnet,
    Mainnet,
}

impl std::fmt::Display for SuiNet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuiNet::Localnet => write!(f, "localnet"),
            SuiNet::Devnet => write!(f, "devnet"),
            SuiNet::Testnet => write!(f, "testnet"),
            SuiNet::Mainnet => write!(f, "mainnet"),
        }
    }
}

/// Gas arguments shared by commands that submit a transaction.
#[derive(Args, Clone, Debug)]
pub(crate) struct GasArgs {
    #[arg(
        long = "sui-gas-coin",
        short = 'g',
        help = "The gas coin object ID. First coin object is chosen if not present.",
        value_name = "OBJECT_ID"
    )]
    pub(crate) sui_gas_coin: Option<sui::ObjectID>,
    #[arg(
        long = "sui-gas-budget",
        short = 'b',
        help = "The gas budget for the transaction.",
        value_name = "AMOUNT",
        default_value_t = sui::MIST_PER_SUI / 10
    )]
    pub(crate) sui_gas_budget: u64,
}

/// Struct holding the config structure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct CliConf {
    #[serde(default)]
    pub(crate) sui: SuiConf,
    #[serde(default)]
    pub(crate) walrus: WalrusConf,
    #[serde(default)]
    pub(crate) nft: NftConf,
}

impl CliConf {
    /// Load the configuration from [`CLI_CONF_PATH`]. A missing file yields
    /// the default configuration. Env overrides are applied on top.
    pub(crate) async fn load() -> AnyResult<Self> {
        let conf_path = expand_tilde(CLI_CONF_PATH)?;

        let conf = match tokio::fs::try_exists(&conf_path).await {
            Ok(true) => Self::load_from_path(&conf_path).await?,
            _ => Self::default(),
        };

        Ok(conf.with_env_overrides())
    }

    pub(crate) async fn load_from_path(path: &Path) -> AnyResult<Self> {
        let conf = tokio::fs::read_to_string(path).await?;

        Ok(toml::from_str(&conf)?)
    }

    pub(crate) async fn save_to_path(&self, path: &Path) -> AnyResult<()> {
        let parent_folder = path
            .parent()
            .ok_or_else(|| anyhow!("Config path '{}' has no parent", path.display()))?;
        let conf = toml::to_string_pretty(&self)?;

        tokio::fs::create_dir_all(parent_folder).await?;
        tokio::fs::write(path, conf).await?;

        Ok(())
    }

    /// Apply [`PUBLISHER_URL_ENV`], [`AGGREGATOR_URL_ENV`] and
    /// [`SUI_RPC_URL_ENV`].
    pub(crate) fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(PUBLISHER_URL_ENV) {
            self.walrus.publisher_url = url;
        }

        if let Ok(url) = std::env::var(AGGREGATOR_URL_ENV) {
            self.walrus.aggregator_url = url;
        }

        if let Ok(url) = std::env::var(SUI_RPC_URL_ENV) {
            match reqwest::Url::parse(&url) {
                Ok(url) => self.sui.rpc_url = Some(url),
                Err(e) => log::warn!("Ignoring invalid {SUI_RPC_URL_ENV} '{url}': {e}"),
            }
        }

        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct SuiConf {
    #[serde(default)]
    pub(crate) net: SuiNet,
    #[serde(default = "default_sui_wallet_path")]
    pub(crate) wallet_path: PathBuf,
    #[serde(default)]
    pub(crate) rpc_url: Option<reqwest::Url>,
}

impl Default for SuiConf {
    fn default() -> Self {
        Self {
            net: SuiNet::default(),
            wallet_path: default_sui_wallet_path(),
            rpc_url: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct WalrusConf {
    #[serde(default = "default_publisher_url")]
    pub(crate) publisher_url: String,
    #[serde(default = "default_aggregator_url")]
    pub(crate) aggregator_url: String,
    #[serde(default)]
    pub(crate) epochs: Option<u64>,
    #[serde(default)]
    pub(crate) send_object_to: Option<String>,
}

impl Default for WalrusConf {
    fn default() -> Self {
        Self {
            publisher_url: default_publisher_url(),
            aggregator_url: default_aggregator_url(),
            epochs: None,
            send_object_to: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct NftConf {
    #[serde(default)]
    pub(crate) package_id: Option<sui::ObjectID>,
    #[serde(default = "default_nft_module")]
    pub(crate) module: String,
    #[serde(default = "default_nft_function")]
    pub(crate) function: String,
}

impl Default for NftConf {
    fn default() -> Self {
        Self {
            package_id: None,
            module: default_nft_module(),
            function: default_nft_function(),
        }
    }
}

// == Used by clap ==

/// Expands `~/` to the user's home directory in path arguments.
pub(crate) fn expand_tilde(path: &str) -> AnyResult<PathBuf> {
    if let Some(path) = path.strip_prefix("~/") {
        match home::home_dir() {
            Some(home) => return Ok(home.join(path)),
            None => return Err(anyhow!("Could not find home directory")),
        }
    }

    Ok(path.into())
}

// == Used by serde ==

fn default_sui_wallet_path() -> PathBuf {
    home::home_dir()
        .unwrap_or_default()
        .join(".sui/sui_config/client.yaml")
}

fn default_publisher_url() -> String {
    blobmint_sdk::walrus::WALRUS_PUBLISHER_URL.to_string()
}

fn default_aggregator_url() -> String {
    blobmint_sdk::walrus::WALRUS_AGGREGATOR_URL.to_string()
}

fn default_nft_module() -> String {
    "nft".to_string()
}

fn default_nft_function() -> String {
    "mint".to_string()
}

#[cfg(test)]
mod tests {
    use {super::*, serial_test::serial};

    #[test]
    fn test_expand_tilde() {
        let home = home::home_dir().unwrap();

        assert_eq!(expand_tilde("~/abc").unwrap(), home.join("abc"));
        assert_eq!(expand_tilde("/abc").unwrap(), PathBuf::from("/abc"));
    }

    #[test]
    fn test_partial_conf_is_filled_with_defaults() {
        let conf = toml::from_str::<CliConf>(
            r#"
            [walrus]
            publisher_url = "http://localhost:31415"
            epochs = 5
            "#,
        )
        .unwrap();

        assert_eq!(conf.walrus.publisher_url, "http://localhost:31415");
        assert_eq!(
            conf.walrus.aggregator_url,
            blobmint_sdk::walrus::WALRUS_AGGREGATOR_URL
        );
        assert_eq!(conf.walrus.epochs, Some(5));
        assert_eq!(conf.sui.net, SuiNet::Localnet);
        assert_eq!(conf.nft, NftConf::default());
    }

    #[test]
    #[serial(conf_env)]
    fn test_env_overrides() {
        std::env::set_var(PUBLISHER_URL_ENV, "http://publisher.local");
        std::env::set_var(AGGREGATOR_URL_ENV, "http://aggregator.local");
        std::env::set_var(SUI_RPC_URL_ENV, "http://localhost:9000");

        let conf = CliConf::default().with_env_overrides();

        assert_eq!(conf.walrus.publisher_url, "http://publisher.local");
        assert_eq!(conf.walrus.aggregator_url, "http://aggregator.local");
        assert_eq!(
            conf.sui.rpc_url,
            Some(reqwest::Url::parse("http://localhost:9000").unwrap())
        );

        std::env::remove_var(PUBLISHER_URL_ENV);
        std::env::remove_var(AGGREGATOR_URL_ENV);
        std::env::remove_var(SUI_RPC_URL_ENV);

        let conf = CliConf::default().with_env_overrides();

        assert_eq!(conf, CliConf::default());
    }
}
