//! Driver for the parameter-passing swap demonstrations.
//!
//! Runs one mechanism or all of them from initial values taken from
//! `passing.toml`, optionally overridden on the command line.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};

use passing::core::types::{Demonstration, Mechanism};
use passing::demo;
use passing::exit_codes;
use passing::io::config::{CONFIG_FILE, DemoConfig, load_config, write_config};
use passing::logging;
use passing::render::{header, write_transcript};

#[derive(Parser)]
#[command(
    name = "passing",
    version,
    about = "Swap two integers by value, by pointer and by reference"
)]
struct Cli {
    /// Config file (missing file means defaults).
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by the commands that run demonstrations.
#[derive(Args, Debug, Default, PartialEq, Eq)]
struct DemoArgs {
    /// Override the initial value of `a`.
    #[arg(short = 'a', long = "a", allow_negative_numbers = true)]
    a: Option<i32>,

    /// Override the initial value of `b`.
    #[arg(short = 'b', long = "b", allow_negative_numbers = true)]
    b: Option<i32>,

    /// Print demonstrations as JSON instead of the console transcript.
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single mechanism.
    Run {
        #[arg(value_enum)]
        mechanism: Mechanism,
        #[command(flatten)]
        args: DemoArgs,
    },
    /// Run every mechanism listed in the config.
    All {
        #[command(flatten)]
        args: DemoArgs,
    },
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

/// How demonstrations are laid out on stdout.
///
/// `run` prints one bare transcript or object; `all` always prints headed
/// transcripts or a JSON array, however many mechanisms are configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Single,
    Group,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let (selected, args) = match cli.command {
        Command::Init { force } => return cmd_init(&cli.config, force),
        Command::Run { mechanism, args } => (Some(mechanism), args),
        Command::All { args } => (None, args),
    };

    let mut cfg = load_config(&cli.config).context("load config")?;
    if let Some(a) = args.a {
        cfg.a = a;
    }
    if let Some(b) = args.b {
        cfg.b = b;
    }
    debug!(config = %cli.config.display(), ?cfg, "config resolved");

    let (demos, layout) = match selected {
        Some(mechanism) => (vec![demo::run(mechanism, cfg.initial())], Layout::Single),
        None => (
            demo::run_all(&cfg.mechanisms, cfg.initial()),
            Layout::Group,
        ),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        print_json(&mut out, &demos, layout)?;
    } else {
        print_transcripts(&mut out, &demos, layout)?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        warn!(path = %path.display(), "config exists, not overwriting (use --force)");
        return Ok(());
    }
    write_config(path, &DemoConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "config written");
    Ok(())
}

fn print_transcripts<W: Write>(
    out: &mut W,
    demos: &[Demonstration],
    layout: Layout,
) -> Result<()> {
    for demo in demos {
        if layout == Layout::Group {
            writeln!(out, "{}", header(demo)).context("write header")?;
        }
        write_transcript(out, demo)?;
    }
    Ok(())
}

/// Serialize demonstrations to pretty-printed JSON with trailing newline.
fn print_json<W: Write>(out: &mut W, demos: &[Demonstration], layout: Layout) -> Result<()> {
    let mut payload = match (layout, demos) {
        (Layout::Single, [single]) => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(demos),
    }
    .context("serialize json")?;
    payload.push('\n');
    out.write_all(payload.as_bytes()).context("write json")?;
    Ok(())
}
