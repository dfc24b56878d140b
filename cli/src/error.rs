use {
    crate::{display::*, prelude::*},
    blobmint_sdk::workflow::WorkflowError,
    thiserror::Error,
};

/// Custom error definitions for the Blobmint CLI. Takes care of displaying
/// a pretty summary in the console.
#[derive(Debug, Error)]
pub(crate) enum BlobmintCliError {
    #[error("{error}{separator}\n{0}", error = "Syntax Error".red().bold(), separator = separator())]
    SyntaxError(clap::error::Error),
    #[error("{error}{separator}\n{0}", error = "Sui Error".red().bold(), separator = separator())]
    Sui(sui::Error),
    #[error("{error}{separator}\n{message}\n{0}", error = "Upload Error".red().bold(), separator = separator(), message = .0.user_message().bold())]
    Workflow(WorkflowError),
    #[error("{error}{separator}\n{0}", error = "Error".red().bold(), separator = separator())]
    Any(anyhow::Error),
}
