use crate::prelude::{eprintln, println, *};
use multitool_core::fibonacci::fibonacci;
use multitool_core::numeric::parse_int;

const USAGE: &str = "Usage: multitool fibonacci <n>";

#[derive(Debug, clap::Args, serde::Serialize)]
pub struct App {
    /// How many numbers to generate
    #[arg(allow_hyphen_values = true)]
    pub n: Option<String>,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        crate::print_options(&app)?;
    }

    let Some(raw) = app.n else {
        println!("{USAGE}");
        return Ok(());
    };

    let n = parse_int(&raw).map_err(|e| {
        log::debug!("rejected {raw:?}: {e}");
        Error::InvalidNumber(raw.clone())
    })?;

    if global.verbose {
        eprintln!("Generating {} Fibonacci numbers", n.max(0));
    }

    let sequence = fibonacci(n).map_err(Error::from)?;

    if app.json {
        println!("{}", format_sequence_json(&sequence)?);
    } else {
        println!("{}", format_sequence(&sequence));
    }

    Ok(())
}

fn format_sequence(sequence: &[u128]) -> String {
    format!("{:?}", sequence)
}

fn format_sequence_json(sequence: &[u128]) -> Result<String> {
    serde_json::to_string(sequence).map_err(|e| eyre!("JSON serialization failed: {}", e))
}
