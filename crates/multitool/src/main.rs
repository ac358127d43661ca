use crate::prelude::{eprintln, println, *};
use clap::Parser;

mod error;
mod fibonacci;
mod finder;
mod input;
mod jsonparse;
mod pipeline;
mod prelude;
mod wordfreq;

const AVAILABLE_SUBCOMMANDS: &str = "wordfreq, fibonacci, jsonparse, pipeline, finder";

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Word counts, Fibonacci numbers, JSON key paths, string pipelines and file search"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "MULTITOOL_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Count word frequencies in a text file
    #[command(name = "wordfreq")]
    WordFreq(crate::wordfreq::App),

    /// Print the first N Fibonacci numbers
    #[command(name = "fibonacci")]
    Fibonacci(crate::fibonacci::App),

    /// Print every leaf of a JSON document with its key path
    #[command(name = "jsonparse")]
    JsonParse(crate::jsonparse::App),

    /// Capitalize, reverse and exclaim a piece of text
    #[command(name = "pipeline")]
    Pipeline(crate::pipeline::App),

    /// Recursively find files with a given extension
    #[command(name = "finder")]
    Finder(crate::finder::App),

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Echo a subcommand's parsed options on stderr as one JSON line
pub fn print_options<T: serde::Serialize>(options: &T) -> Result<()> {
    let json =
        serde_json::to_string(options).map_err(|e| eyre!("JSON serialization failed: {}", e))?;
    eprintln!("Options: {json}");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        Some(SubCommands::WordFreq(sub_app)) => crate::wordfreq::run(sub_app, app.global),
        Some(SubCommands::Fibonacci(sub_app)) => crate::fibonacci::run(sub_app, app.global),
        Some(SubCommands::JsonParse(sub_app)) => crate::jsonparse::run(sub_app, app.global),
        Some(SubCommands::Pipeline(sub_app)) => crate::pipeline::run(sub_app, app.global),
        Some(SubCommands::Finder(sub_app)) => crate::finder::run(sub_app, app.global),
        Some(SubCommands::Unknown(args)) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            log::debug!("unknown subcommand {name:?} with {} args", args.len());
            println!("Unknown subcommand: {name}");
            Ok(())
        }
        None => {
            println!("Usage: multitool <subcommand> [args...]");
            println!("Available subcommands: {AVAILABLE_SUBCOMMANDS}");
            Ok(())
        }
    }
}
