use anyhow::Result;
use atelier_core::QueryKind;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod menu;
mod render;

use commands::MatchArgs;
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "atelier", version, about)]
struct Cli {
    /// What to look up. Without a command the interactive menu runs.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the artist file (default: data_path from config, else ./artists.csv)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print query results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Pick a lookup from the interactive menu
    ///
    /// Shows the seven lookups, reads a selection, loads the artist file,
    /// asks for the name, genre, nationality or year, and prints the result.
    /// Any key other than 1-7 exits. If the artist file cannot be opened you
    /// are asked for another path; a blank reply gives up.
    Menu,
    /// Show an artist's general information
    Info {
        /// Full name of the artist (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        #[command(flatten)]
        matching: MatchArgs,
    },
    /// List artists in a genre
    Genre {
        #[arg(required = true, num_args = 1..)]
        genre: Vec<String>,
        #[command(flatten)]
        matching: MatchArgs,
    },
    /// List artists of a nationality (case-sensitive unless configured otherwise)
    Nationality {
        #[arg(required = true, num_args = 1..)]
        nationality: Vec<String>,
        #[command(flatten)]
        matching: MatchArgs,
    },
    /// List artists active in a year
    ///
    /// An artist whose years are a range matches when the year falls inside
    /// it (inclusive); a single year must match exactly.
    Year {
        /// The year, e.g. 1920
        #[arg(allow_hyphen_values = true)]
        year: String,
    },
    /// Show an artist's biography
    Bio {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        #[command(flatten)]
        matching: MatchArgs,
    },
    /// Show an external link for an artist
    Reference {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        #[command(flatten)]
        matching: MatchArgs,
    },
    /// Show the total number of an artist's paintings
    Paintings {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        #[command(flatten)]
        matching: MatchArgs,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print one value, or the whole config file when no key is given
    Get { key: Option<String> },
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Write the example config file if none exists
    Init,
}

fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logging(cli.verbose, &config.log_level);
    if let Some(err) = config_error {
        log::warn!("Falling back to default configuration: {:#}", err);
    }

    let config = match cli.data {
        Some(data) => config.with_data_path(data),
        None => config,
    };

    let (kind, words, matching) = match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = std::io::stdin();
            let outcome = menu::run_menu(
                &mut stdin.lock(),
                &mut std::io::stdout().lock(),
                &config,
                cli.json,
            )?;
            log::debug!("Menu session ended: {:?}", outcome);
            return Ok(());
        }
        Some(Commands::Config { action }) => {
            return match action {
                ConfigAction::Show => commands::config::show_config(&config),
                ConfigAction::Get { key } => commands::config::get_config(&config, key),
                ConfigAction::Path => commands::config::show_path(),
                ConfigAction::Example => commands::config::show_example(),
                ConfigAction::Init => commands::config::init_config(),
            };
        }
        Some(Commands::Info { name, matching }) => (QueryKind::ArtistInfo, name, matching),
        Some(Commands::Genre { genre, matching }) => (QueryKind::ByGenre, genre, matching),
        Some(Commands::Nationality {
            nationality,
            matching,
        }) => (QueryKind::ByNationality, nationality, matching),
        Some(Commands::Year { year }) => (QueryKind::ByYear, vec![year], MatchArgs::default()),
        Some(Commands::Bio { name, matching }) => (QueryKind::Biography, name, matching),
        Some(Commands::Reference { name, matching }) => (QueryKind::Reference, name, matching),
        Some(Commands::Paintings { name, matching }) => {
            (QueryKind::TotalPaintings, name, matching)
        }
    };

    commands::run_query(&config, kind, &words.join(" "), matching, cli.json)
}
