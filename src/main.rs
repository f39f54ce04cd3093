use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::io::{self, Read, Write};
use std::str::FromStr;

use mdenhance::config::{self, Config};
use mdenhance::exit_codes::exit;
use mdenhance::utils::{self, LineEnding};
use mdenhance::EnhanceOptions;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to enhance. Reads from stdin when omitted or when "-" is given.
    #[arg(required = false)]
    paths: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Output format: text or json
    #[arg(long)]
    output_format: Option<String>,

    /// Disable secret redaction
    #[arg(long, default_value = "false")]
    no_redact: bool,

    /// Show detailed output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long)]
    quiet: bool,

    /// Command to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new configuration file
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other} (expected 'text' or 'json')")),
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        run_init(&cli);
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    // Output format precedence: CLI flag, then config, then default
    let format_str = cli
        .output_format
        .as_deref()
        .or(config.global.output_format.as_deref())
        .unwrap_or("text");
    let format = match OutputFormat::from_str(format_str) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    let mut options = EnhanceOptions::from_config(&config);
    if cli.no_redact {
        options.redact = false;
    }

    match run(&cli, &options, format) {
        Ok(()) => exit::success(),
        Err(e) => {
            eprintln!("{}: {e:#}", "Error".red().bold());
            exit::tool_error();
        }
    }
}

fn run_init(cli: &Cli) -> ! {
    match config::create_default_config(config::CONFIG_FILE_NAME) {
        Ok(true) => {
            if !cli.quiet {
                println!("Created {}", config::CONFIG_FILE_NAME);
            }
            exit::success();
        }
        Ok(false) => {
            eprintln!(
                "{}: {} already exists",
                "Error".red().bold(),
                config::CONFIG_FILE_NAME
            );
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}

fn run(cli: &Cli, options: &EnhanceOptions, format: OutputFormat) -> Result<()> {
    let inputs = read_inputs(&cli.paths)?;

    // Normalize to LF for processing; text output restores the
    // dominant ending of the first input.
    let ending = inputs
        .first()
        .map(|(_, content)| utils::detect_line_ending(content))
        .unwrap_or(LineEnding::Lf);

    let mut enhanced_parts = Vec::with_capacity(inputs.len());
    for (name, content) in &inputs {
        log::debug!("enhancing {name} ({} bytes)", content.len());
        let normalized = utils::normalize_to_lf(content);
        enhanced_parts.push(mdenhance::enhance_with_options(&normalized, options));
        if cli.verbose && !cli.quiet {
            eprintln!("Enhanced {name}");
        }
    }
    let enhanced = enhanced_parts.join("\n\n");

    let rendered = match format {
        OutputFormat::Text => {
            let mut text = enhanced;
            text.push('\n');
            utils::apply_line_ending(&text, ending)
        }
        OutputFormat::Json => {
            let mut json = serde_json::json!({ "enhancedText": enhanced }).to_string();
            json.push('\n');
            json
        }
    };

    write_output(cli.output.as_deref(), &rendered)
}

/// Read all inputs as (display name, content) pairs. No paths, or a
/// single "-", means stdin.
fn read_inputs(paths: &[String]) -> Result<Vec<(String, String)>> {
    if paths.is_empty() || (paths.len() == 1 && paths[0] == "-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        return Ok(vec![("<stdin>".to_string(), content)]);
    }

    let mut inputs = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
        inputs.push((path.clone(), content));
    }
    Ok(inputs)
}

fn write_output(target: Option<&str>, content: &str) -> Result<()> {
    match target {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {path}"))?;
        }
        None => {
            io::stdout()
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
