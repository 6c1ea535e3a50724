use std::sync::Arc;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotlistcli::{cli, config, error, tracklist::RankStrategy, types::PkceToken, utils};
use tokio::sync::Mutex;

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
    /// Authorize with Spotify API
    Auth,

    /// Build a track list from artist names
    Tracks(TracksOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Build a track list from artist names")]
pub struct TracksOptions {
    /// Artist names to build the track list from
    #[clap(required = true, num_args = 1..)]
    pub artists: Vec<String>,

    /// Number of tracks to keep per artist
    #[clap(long, default_value_t = 10)]
    pub count: usize,

    /// Ranking strategy: 'popularity' (top tracks) or 'plays' (full discography)
    #[clap(
        long,
        default_value = "popularity",
        value_parser = utils::parse_strategy
    )]
    pub strategy: RankStrategy,

    /// Market country code; overrides the SPOTIFY_MARKET environment variable
    #[clap(long)]
    pub market: Option<String>,

    /// Track id to leave out of the output; can be repeated
    #[clap(long = "exclude", action = ArgAction::Append, num_args = 1)]
    pub exclude: Vec<String>,

    /// Write the track list to a file instead of stdout
    #[clap(long)]
    pub output: Option<String>,
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
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }

        Command::Tracks(opt) => {
            cli::tracks(
                opt.artists,
                opt.count,
                opt.strategy,
                opt.market,
                opt.exclude,
                opt.output,
            )
            .await
        }

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
