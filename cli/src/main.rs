mod completion;
mod conf;
mod display;
mod error;
mod prelude;
mod sui;
mod upload;

use crate::prelude::*;

#[derive(Parser)]
#[command(
    name = "blobmint",
    version,
    about = "Upload JSON to Walrus and mint NFTs referencing it"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Print machine readable JSON instead of human readable output.
    #[arg(long = "json", global = true, help = "Print output as JSON")]
    json: bool,
    /// Raise the log level. `RUST_LOG` takes precedence.
    #[arg(
        long = "verbose",
        short = 'v',
        global = true,
        help = "Print workflow logs to stderr"
    )]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Upload a JSON file to Walrus and mint an NFT for it")]
    Upload(upload::UploadCommand),
    #[command(about = "Show or update the Blobmint CLI configuration")]
    Conf(conf::ConfCommand),
    #[command(about = "Provide shell completion for the Blobmint CLI")]
    Completion(completion::CompletionCommand),
}

#[tokio::main]
async fn main() {
    // Customize parsing error handling.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // These 2 are "not real errors" that are used to stop the execution
            // to display the CLI help or version.
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    println!("{}", e);

                    std::process::exit(0);
                }
                _ => (),
            }

            eprintln!(
                "{ballot} {error}",
                ballot = "✘".red().bold(),
                error = BlobmintCliError::SyntaxError(e)
            );

            std::process::exit(1);
        }
    };

    let default_filter = if cli.verbose { "info" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    JSON_MODE.store(cli.json, Ordering::Relaxed);

    if cli.json {
        colored::control::set_override(false);
    }

    // Send each sub-command to the respective handler.
    let result = match cli.command {
        Command::Upload(upload) => upload::handle(upload).await,
        Command::Conf(conf) => conf::handle(conf).await,
        Command::Completion(completion) => completion::handle(completion),
    };

    // Handle any errors that occurred during command execution.
    if let Err(e) = result {
        if JSON_MODE.load(Ordering::Relaxed) {
            println!("{}", display::json_error(&e));
        } else {
            eprintln!("{ballot} {e}", ballot = "✘".red().bold());
        }

        std::process::exit(1);
    }
}
