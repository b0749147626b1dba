mod commands;
mod runtime;

use clap::Parser;

#[derive(Parser)]
#[command(name = "stt", about = "Speech-to-text demos: live captions and file transcription")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Live captions: stream recognition events and render interim/final text
    Listen(commands::listen::Args),
    /// Upload an audio file and print the transcription response
    Transcribe(commands::transcribe::Args),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Listen(args) => commands::listen::run(args).await,
        Command::Transcribe(args) => commands::transcribe::run(args).await,
    }
}
