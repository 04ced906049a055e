use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use grit_categories::select_category;
use grit_openai::OpenAiError;

/// Grit CLI entry point.
///
/// Grit asks an OpenAI chat model for one short piece of thermal-printer
/// ephemera and prints it to stdout under a category banner.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "grit",
    author,
    version,
    about = "Print a short, haunted snippet from one of the built-in categories.",
    long_about = None
)]
struct Cli {
    /// Category to generate; omitted or unknown picks one at random, weighted.
    #[arg(long, value_name = "NAME")]
    category: Option<String>,
    /// Sampling temperature (0.2-2.0); higher is weirder, lower is boring.
    #[arg(long, value_name = "FLOAT", default_value_t = 1.0)]
    temperature: f64,
}

fn format_banner(category: &str, content: &str) -> String {
    format!("--- Category: {category} ---\n{content}\n\n")
}

fn run<W, G>(cli: Cli, out: &mut W, generate: G) -> io::Result<bool>
where
    W: Write,
    G: Fn(&str, f64) -> Result<String, OpenAiError>,
{
    let selection = select_category(cli.category.as_deref());

    // Surface the fallback notice before the request starts.
    if let Some(notice) = &selection.notice {
        writeln!(out, "{notice}")?;
        out.flush()?;
    }

    match generate(selection.category, cli.temperature) {
        Ok(content) => {
            write!(out, "{}", format_banner(selection.category, &content))?;
            Ok(true)
        }
        Err(error) => {
            writeln!(out, "Error: {error}")?;
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli, &mut io::stdout(), grit_openai::generate) {
        Ok(true) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
