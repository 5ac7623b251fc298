mod clipboard;
mod cmd;
mod output;
mod settings;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, contact::ContactArgs, hire::HireArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Compose Hire Me and Contact emails for the portfolio site, or serve it locally",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ./folio.yaml, then ~/.folio.yaml)
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the four-step Hire Me wizard and print the message
    Hire(HireArgs),

    /// Fill the Contact form and print the message
    Contact(ContactArgs),

    /// List the intent and location choices
    Options,

    /// Serve the site and its API locally
    Serve {
        /// Port to listen on (default: server.port from config)
        #[arg(long)]
        port: Option<u16>,

        /// Don't open a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Show, validate or create the config file
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Hire(args) => cmd::hire::run(config_path, args, cli.json),
        Commands::Contact(args) => cmd::contact::run(config_path, args, cli.json),
        Commands::Options => cmd::options::run(cli.json),
        Commands::Serve { port, no_open } => cmd::serve::run(config_path, port, no_open),
        Commands::Config { subcommand } => cmd::config::run(config_path, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
