use crate::{prelude::*, Cli};

#[derive(Args)]
pub(crate) struct CompletionCommand {
    #[arg(value_enum)]
    pub(crate) shell: clap_complete::Shell,
}

/// Print the completion script for the requested shell to stdout.
pub(crate) fn handle(command: CompletionCommand) -> AnyResult<(), BlobmintCliError> {
    let mut cli_command = Cli::command();
    let bin_name = cli_command.get_name().to_string();

    clap_complete::generate(
        command.shell,
        &mut cli_command,
        bin_name,
        &mut std::io::stdout(),
    );

    Ok(())
}
