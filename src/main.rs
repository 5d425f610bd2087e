//! flowlayout CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing::{Level, debug, info};

use flowlayout::explainer::compile_explainer_payload;
use flowlayout::{Direction, Error, LayoutConfig, Result, compile_diagram_with_config};

/// Compile flowchart text into positioned nodes and edges (JSON).
#[derive(Parser, Debug)]
#[command(
    name = "flowlayout",
    version = env!("FLOWLAYOUT_VERSION"),
    about = "Compile flowchart text into positioned nodes and edges (JSON)"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Treat input as an explanation payload and compile its `diagrams` array
    #[arg(long = "explainer")]
    explainer: bool,

    /// Override direction (TD, TB, LR, BT, RL)
    #[arg(short = 'd', long = "direction", value_parser = parse_direction)]
    direction: Option<Direction>,

    /// Horizontal spacing between nodes of one level
    #[arg(long = "h-spacing", default_value_t = LayoutConfig::default().h_spacing)]
    h_spacing: f64,

    /// Vertical spacing between levels
    #[arg(long = "v-spacing", default_value_t = LayoutConfig::default().v_spacing)]
    v_spacing: f64,

    /// Emit single-line JSON
    #[arg(long = "compact")]
    compact: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_direction(s: &str) -> std::result::Result<Direction, String> {
    Direction::from_keyword(s).ok_or_else(|| format!("unknown direction '{s}'; use TD, LR, BT, or RL"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn write_output(output: Option<&str>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, rendered).map_err(|source| Error::Write {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| Error::Write {
                    path: "<stdout>".to_string(),
                    source,
                })
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let mut json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    json.push('\n');
    Ok(json)
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_input(cli.input.as_deref())?;
    debug!(bytes = text.len(), "read input");

    let config = LayoutConfig {
        h_spacing: cli.h_spacing,
        v_spacing: cli.v_spacing,
        direction_override: cli.direction,
        ..LayoutConfig::default()
    };

    let rendered = if cli.explainer {
        let entries = compile_explainer_payload(&text, &config)?;
        info!(diagrams = entries.len(), "compiled explainer payload");
        to_json(&entries, cli.compact)?
    } else {
        let diagram = compile_diagram_with_config(&text, &config);
        info!(
            nodes = diagram.nodes.len(),
            edges = diagram.edges.len(),
            "compiled diagram"
        );
        to_json(&diagram, cli.compact)?
    };

    write_output(cli.output.as_deref(), &rendered)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
