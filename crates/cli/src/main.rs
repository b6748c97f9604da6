// ABOUTME: CLI for removing HTML elements matching CSS selectors from files or stdin.
// ABOUTME: Also validates selector lists the way the configuration form does before saving.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use element_filter::{ConfigError, ElementFilter, FilterConfig};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Remove HTML elements matching CSS selectors.
#[derive(Parser, Debug)]
#[command(name = "element-filter")]
#[command(about = "Remove HTML elements matching CSS selectors", long_about = None)]
struct Args {
    /// CSS selector to remove (repeatable). Applied after selectors from --config.
    #[arg(short = 's', long = "selector")]
    selectors: Vec<String>,

    /// JSON configuration file with a `css_selectors` list.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Only validate the selectors; exit 1 if any fail to compile.
    #[arg(long)]
    validate: bool,

    /// Output a JSON array of {input, output} objects instead of raw HTML.
    #[arg(long = "json")]
    json_output: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// HTML files to filter. Use "-" (or nothing) to read stdin.
    #[arg()]
    inputs: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = load_config(args)?;

    if args.validate {
        return Ok(validate(&config));
    }

    let filter = ElementFilter::new(config);
    let inputs = if args.inputs.is_empty() {
        vec!["-".to_string()]
    } else {
        args.inputs.clone()
    };

    let mut outputs = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let mut markup = read_input(input).with_context(|| format!("failed to read {}", input))?;
        filter.process(&mut markup);
        debug!(input = %input, bytes = markup.len(), "filtered input");
        outputs.push((input.as_str(), markup));
    }

    let rendered = if args.json_output {
        let entries: Vec<_> = outputs
            .iter()
            .map(|(input, output)| json!({ "input": input, "output": output }))
            .collect();
        serde_json::to_string_pretty(&entries)?
    } else {
        outputs
            .into_iter()
            .map(|(_, output)| output)
            .collect::<Vec<_>>()
            .join("\n")
    };

    match &args.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(args: &Args) -> Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::from_path(path)?,
        None => FilterConfig::default(),
    };
    for selector in &args.selectors {
        config.push_selector(selector);
    }
    Ok(config)
}

fn validate(config: &FilterConfig) -> ExitCode {
    match config.validate() {
        Ok(()) => {
            println!("ok");
            ExitCode::SUCCESS
        }
        Err(ConfigError::InvalidSelectors(errors)) => {
            for err in &errors {
                eprintln!("{}", err);
            }
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(1)
        }
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    fs::read_to_string(input)
}
