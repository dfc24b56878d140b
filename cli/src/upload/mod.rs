mod sui_minter;
mod upload_file;

use {crate::prelude::*, upload_file::*};

#[derive(Args, Clone, Debug)]
pub(crate) struct UploadCommand {
    /// The JSON file to store on Walrus.
    #[arg(
        long = "file",
        short = 'f',
        help = "The JSON file to upload",
        value_name = "PATH"
    )]
    file: Option<PathBuf>,
    /// Skip the metadata upload and the mint.
    #[arg(
        long = "upload-only",
        help = "Only store the file on Walrus, do not mint an NFT"
    )]
    upload_only: bool,
    #[command(flatten)]
    gas: GasArgs,
}

/// Handle the provided upload command. The [UploadCommand] instance is passed
/// from [crate::main].
pub(crate) async fn handle(
    UploadCommand {
        file,
        upload_only,
        gas,
    }: UploadCommand,
) -> AnyResult<(), BlobmintCliError> {
    upload_file(file, upload_only, gas).await
}
