//! This module attempts to make a little bit of sense when dealing with Sui
//! types.
//!
//! Some are prefixed with `Sui`, some are not. This re-export will nest all
//! Sui types under `sui` and remove all `Sui` prefixes.
//!
//! This way we can use, for example `sui::ObjectID` in our code.
//!
//! All move types are now also prefixed with `Move` to avoid confusion.

pub use {
    move_core_types::{ident_str as move_ident_str, identifier::IdentStr as MoveIdentStr},
    sui_sdk::{
        error::Error,
        rpc_types::{
            Coin,
            SuiExecutionStatus as ExecutionStatus,
            SuiTransactionBlockEffects as TransactionBlockEffects,
            SuiTransactionBlockResponse as TransactionBlockResponse,
            SuiTransactionBlockResponseOptions as TransactionBlockResponseOptions,
        },
        types::{
            base_types::{ObjectID, SuiAddress as Address},
            gas_coin::MIST_PER_SUI,
            programmable_transaction_builder::ProgrammableTransactionBuilder,
            quorum_driver_types::ExecuteTransactionRequestType,
            transaction::{Argument, TransactionData},
            Identifier,
            MOVE_STDLIB_PACKAGE_ID,
        },
        wallet_context::WalletContext,
        SuiClient as Client,
        SuiClientBuilder as ClientBuilder,
    },
};

/// Sui traits re-exported so that we can `use sui::traits::*` in our code.
pub mod traits {
    pub use sui_sdk::rpc_types::SuiTransactionBlockEffectsAPI as TransactionBlockEffectsAPI;
}
