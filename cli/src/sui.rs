use {
    crate::{loading, prelude::*},
    blobmint_sdk::sui::traits::TransactionBlockEffectsAPI,
};

/// Build Sui client for the provided Sui conf. An explicit RPC URL wins over
/// the network.
pub(crate) async fn build_sui_client(conf: &SuiConf) -> AnyResult<sui::Client, BlobmintCliError> {
    let building_handle = loading!("Building Sui client...");

    let builder = sui::ClientBuilder::default();

    let client = match (&conf.rpc_url, conf.net) {
        (Some(url), _) => builder.build(url.as_str()).await,
        (None, SuiNet::Localnet) => builder.build_localnet().await,
        (None, SuiNet::Devnet) => builder.build_devnet().await,
        (None, SuiNet::Testnet) => builder.build_testnet().await,
        (None, SuiNet::Mainnet) => builder.build_mainnet().await,
    };

    match client {
        Ok(client) => {
            building_handle.success();

            Ok(client)
        }
        Err(e) => {
            building_handle.error();

            Err(BlobmintCliError::Sui(e))
        }
    }
}

/// Create a wallet context from the provided path. Unless a custom RPC URL is
/// configured, the active env of the wallet must match the Sui net.
pub(crate) async fn create_wallet_context(
    conf: &SuiConf,
) -> AnyResult<sui::WalletContext, BlobmintCliError> {
    let wallet_handle = loading!("Initiating SUI wallet...");

    let request_timeout = None;
    let max_concurrent_requests = None;

    let wallet = match sui::WalletContext::new(
        &conf.wallet_path,
        request_timeout,
        max_concurrent_requests,
    ) {
        Ok(wallet) => wallet,
        Err(e) => {
            wallet_handle.error();

            return Err(BlobmintCliError::Any(e));
        }
    };

    if conf.rpc_url.is_none() {
        if let Err(e) = check_wallet_env(wallet.config.active_env.as_deref(), conf.net) {
            wallet_handle.error();

            return Err(BlobmintCliError::Any(e));
        }
    }

    wallet_handle.success();

    Ok(wallet)
}

/// Make sure the wallet points at the configured Sui net.
fn check_wallet_env(active_env: Option<&str>, net: SuiNet) -> AnyResult<()> {
    match active_env {
        Some(env) if env == net.to_string() => Ok(()),
        Some(env) => Err(anyhow!(
            "{message}\n\n{command}",
            message = "The Sui net of the wallet does not match the provided Sui net. Either use a different wallet or run:",
            command = format!("$ blobmint conf --sui.net {env}").bold(),
        )),
        None => Err(anyhow!(
            "The Sui net of the wallet is not set. Please fix the Sui client configuration."
        )),
    }
}

/// Fetch all coins owned by the provided address.
pub(crate) async fn fetch_all_coins_for_address(
    sui: &sui::Client,
    addr: sui::Address,
) -> AnyResult<Vec<sui::Coin>, BlobmintCliError> {
    let coins_handle = loading!("Fetching coins...");

    let limit = None;
    let mut cursor = None;
    let mut results = Vec::new();

    // Keep fetching gas coins until there are no more pages.
    loop {
        let default_to_sui_coin_type = None;

        let response = match sui
            .coin_read_api()
            .get_coins(addr, default_to_sui_coin_type, cursor, limit)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                coins_handle.error();

                return Err(BlobmintCliError::Sui(e));
            }
        };

        cursor = response.next_cursor;
        results.extend(response.data);

        if !response.has_next_page {
            break;
        }
    }

    coins_handle.success();

    Ok(results)
}

/// Fetch the gas coin for the provided address. Uses the requested coin if
/// any, the first coin of the wallet otherwise.
pub(crate) async fn fetch_gas_coin(
    sui: &sui::Client,
    addr: sui::Address,
    sui_gas_coin: Option<sui::ObjectID>,
) -> AnyResult<sui::Coin, BlobmintCliError> {
    let coins = fetch_all_coins_for_address(sui, addr).await?;

    select_gas_coin(coins, sui_gas_coin).map_err(BlobmintCliError::Any)
}

fn select_gas_coin(
    mut coins: Vec<sui::Coin>,
    sui_gas_coin: Option<sui::ObjectID>,
) -> AnyResult<sui::Coin> {
    if coins.is_empty() {
        return Err(anyhow!(
            "The wallet does not have enough coins to submit the transaction"
        ));
    }

    match sui_gas_coin {
        Some(id) => coins
            .into_iter()
            .find(|coin| coin.coin_object_id == id)
            .ok_or_else(|| anyhow!("Coin '{id}' not found in wallet")),
        None => Ok(coins.remove(0)),
    }
}

/// Fetch reference gas price from Sui.
pub(crate) async fn fetch_reference_gas_price(
    sui: &sui::Client,
) -> AnyResult<u64, BlobmintCliError> {
    let gas_price_handle = loading!("Fetching reference gas price...");

    match sui.read_api().get_reference_gas_price().await {
        Ok(price) => {
            gas_price_handle.success();

            Ok(price)
        }
        Err(e) => {
            gas_price_handle.error();

            Err(BlobmintCliError::Sui(e))
        }
    }
}

/// Sign a transaction with the provided wallet and execute it.
///
/// Returns `Ok` with the transaction block response if successful, or `Err` if
/// the signing or the execution fails, or if the response contains errors.
pub(crate) async fn sign_and_execute_transaction(
    sui: &sui::Client,
    wallet: &sui::WalletContext,
    tx_data: sui::TransactionData,
) -> AnyResult<sui::TransactionBlockResponse, BlobmintCliError> {
    let signing_handle = loading!("Signing transaction...");

    let envelope = wallet.sign_transaction(&tx_data);

    let resp_options = sui::TransactionBlockResponseOptions::new()
        .with_effects()
        .with_object_changes()
        .with_events();

    // We want to confirm that the tx was executed (the name of this variant is
    // misleading).
    let resp_finality = sui::ExecuteTransactionRequestType::WaitForLocalExecution;

    let response = match sui
        .quorum_driver_api()
        .execute_transaction_block(envelope, resp_options, Some(resp_finality))
        .await
    {
        Ok(response) => response,
        Err(e) => {
            signing_handle.error();

            return Err(BlobmintCliError::Sui(e));
        }
    };

    if !response.errors.is_empty() {
        signing_handle.error();

        return Err(BlobmintCliError::Any(anyhow!(
            "Transaction failed with errors: {errors:?}",
            errors = response.errors
        )));
    }

    // Check if any effects failed in the TX.
    if let Some(effects) = &response.effects {
        if let sui::ExecutionStatus::Failure { error } = effects.status() {
            signing_handle.error();

            return Err(BlobmintCliError::Any(anyhow!(error.clone())));
        }
    }

    signing_handle.success();

    Ok(response)
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, rstest::rstest};

    #[rstest(
        active_env,
        net,
        ok,
        case(Some("localnet"), SuiNet::Localnet, true),
        case(Some("testnet"), SuiNet::Testnet, true),
        case(Some("devnet"), SuiNet::Testnet, false),
        case(None, SuiNet::Localnet, false)
    )]
    fn test_check_wallet_env(active_env: Option<&str>, net: SuiNet, ok: bool) {
        assert_eq!(check_wallet_env(active_env, net).is_ok(), ok);
    }

    #[test]
    fn test_check_wallet_env_suggests_command() {
        let err = check_wallet_env(Some("devnet"), SuiNet::Testnet).unwrap_err();

        assert!(err.to_string().contains("blobmint conf --sui.net devnet"));
    }

    #[test]
    fn test_select_gas_coin_without_coins() {
        let result = select_gas_coin(vec![], None);

        assert_matches!(result, Err(e) if e.to_string().contains("does not have enough coins"));
    }
}
