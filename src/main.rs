use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::debug;

use igv_session::config::{self, Settings};
use igv_session::error::SessionError;
use igv_session::session::{SessionOptions, create_session};

const ABOUT: &str = "\
Search the given directories for tracks to display in IGV and prepare an IGV session.

Tracks are filtered, paired, ordered and styled by the rules of the stylesheet(s).
Defaults for the options below can be set in $XDG_CONFIG_HOME/igv-session/config.toml.";

#[derive(Parser, Debug)]
#[command(name = "create-igv-session", version, about = ABOUT)]
struct Cli {
    /// Where to save the IGV session file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// URL prepended to the (relative) paths of the tracks found
    #[arg(short, long)]
    prefix: Option<String>,

    /// JSON stylesheet with the track rules (may be repeated)
    #[arg(short, long = "stylesheet")]
    stylesheets: Vec<PathBuf>,

    /// JSON base template of the session
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Overwrite the output if it exists
    #[arg(short, long)]
    force: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directories to search for tracks
    #[arg(required = true)]
    sources: Vec<PathBuf>,
}

impl Cli {
    /// Merge the flags over the loaded settings.
    fn into_options(self, settings: Settings) -> SessionOptions {
        let session = settings.session;
        SessionOptions {
            sources: self.sources,
            output: self.output.unwrap_or(session.output),
            prefix: self.prefix.unwrap_or(session.prefix),
            stylesheets: if self.stylesheets.is_empty() {
                session.stylesheets
            } else {
                self.stylesheets
            },
            template: self.template.or(session.template),
            force: self.force || session.force,
            library: settings.library,
        }
    }
}

/// The line printed on stderr when a run fails, whatever the log level.
fn failure_message(e: &SessionError) -> String {
    format!("Error: {e}")
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let settings = config::load_settings();
    let options = cli.into_options(settings);

    if let Err(e) = create_session(&options) {
        debug!("{e:?}");
        eprintln!("{}", failure_message(&e));
        std::process::exit(1);
    }
}
