use crate::prelude::{eprintln, println, *};
use multitool_core::pipeline::{Pipeline, Transform};

const USAGE: &str = "Usage: multitool pipeline \"some text\"";

#[derive(Debug, Clone, Copy, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Uppercase the first character of every word
    Capitalize,
    /// Reverse the characters
    Reverse,
    /// Append "!!!"
    Exclaim,
}

impl From<Step> for Transform {
    fn from(s: Step) -> Self {
        match s {
            Step::Capitalize => Transform::Capitalize,
            Step::Reverse => Transform::Reverse,
            Step::Exclaim => Transform::Exclaim,
        }
    }
}

#[derive(Debug, clap::Args, serde::Serialize)]
pub struct App {
    /// Run these steps in order instead of capitalize, reverse, exclaim
    #[arg(long = "step", value_name = "STEP")]
    pub steps: Vec<Step>,

    /// Text to transform; multiple arguments are joined with spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        crate::print_options(&app)?;
    }

    if app.text.is_empty() {
        println!("{USAGE}");
        return Ok(());
    }

    let pipeline = build_pipeline(&app.steps);
    let input = app.text.join(" ");

    if global.verbose {
        eprintln!("Stages: {:?}", pipeline.stages());
    }

    println!("{}", pipeline.run(&input));

    Ok(())
}

/// The default chain unless steps were given on the command line
fn build_pipeline(steps: &[Step]) -> Pipeline {
    if steps.is_empty() {
        Pipeline::default()
    } else {
        Pipeline::new(steps.iter().copied().map(Transform::from).collect())
    }
}
