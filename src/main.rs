use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use zoomlog::cli::{convert, ConvertRequest, OutputFormat};
use zoomlog::config::Config;

#[derive(Parser)]
#[command(name = "zoomlog")]
#[command(about = "Convert a Zoom chat log .txt file into a styled HTML file")]
struct Cli {
    /// Path to the input Zoom chat .txt file
    input_file: PathBuf,
    /// Path for the output file
    output_file: PathBuf,
    /// The title of the HTML document (default: "Zoom Chat Log")
    #[arg(short, long)]
    title: Option<String>,
    /// Write the parsed messages as JSON instead of HTML
    #[arg(long)]
    json: bool,
    /// Render reply threads expanded
    #[arg(long)]
    expand_threads: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("{:#}; using default settings", e);
        Config::default()
    });

    let request = ConvertRequest {
        input: cli.input_file,
        output: cli.output_file,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Html
        },
        options: config.render_options(cli.title.as_deref(), cli.expand_threads),
    };

    let outcome = convert(&request);
    if outcome.is_success() {
        println!("\n{}", outcome);
        ExitCode::SUCCESS
    } else {
        println!("{}", outcome);
        ExitCode::FAILURE
    }
}
