use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotipath::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Spotify API (client credentials)
    Auth,

    /// List all collaborators of an artist
    Collabs(CollabsOptions),

    /// Find the shortest collaboration path between two artists
    Path(PathOptions),

    /// Inspect or clear the local response cache
    Cache(CacheOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CollabsOptions {
    /// Name of the artist
    pub artist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PathOptions {
    /// Name of the artist to start from
    pub from: String,

    /// Name of the artist to reach
    pub to: String,

    /// Maximum number of collaboration hops on the path
    #[clap(long, default_value_t = 3)]
    pub max_depth: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CacheOptions {
    /// Remove all cached API responses
    #[clap(long)]
    pub clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Collabs(opt) => cli::collabs(opt.artist).await,
        Command::Path(opt) => cli::path(opt.from, opt.to, opt.max_depth).await,
        Command::Cache(opt) => cli::cache(opt.clear).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
