//! Replay harness for the keyboard engine
//!
//! Feeds a JSON-lines touch script through a controller and prints what got
//! typed; everything needed to exercise the engine without a host UI
//! attached.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use drastic_keyboard::buffer::{dispatch, PlainTextBuffer};
use drastic_keyboard::keyboard::KeyboardController;
use drastic_keyboard::script;
use drastic_keyboard::settings::{FileStore, KeyboardSettings};

#[derive(Parser, Debug)]
#[command(name = "drastic-kbd")]
#[command(about = "Replay touch scripts against the Drastic keyboard engine", long_about = None)]
struct Args {
    /// Touch script to replay (JSON lines); stdin when omitted
    script: Option<PathBuf>,

    /// Screen height the initial keyboard height is derived from
    #[arg(long, default_value_t = 800.0)]
    screen_height: f64,

    /// Settings directory (defaults to ~/.local/state/drastic-kbd)
    #[arg(long)]
    settings_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Quiet by default, verbose with --debug
    let default_filter = if args.debug {
        "debug,drastic_keyboard=debug"
    } else {
        "warn,drastic_keyboard=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match args.settings_dir.clone().map(FileStore::new).or_else(FileStore::user) {
        Some(store) => KeyboardSettings::load_from(&store),
        None => KeyboardSettings::default(),
    };

    let events = match &args.script {
        Some(path) => script::load_script(path)
            .with_context(|| format!("loading script {}", path.display()))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading script from stdin")?;
            script::parse_script(&input).context("parsing script from stdin")?
        }
    };
    info!(events = events.len(), "Replaying script");

    let mut controller = KeyboardController::new(args.screen_height, settings);
    let mut buffer = PlainTextBuffer::new();

    let emitted = script::run_script(&mut controller, &events);
    for event in &emitted {
        println!("{event:?}");
        dispatch(event, &mut buffer)
            .context("the script hit the emoji gesture and no picker is wired up")?;
    }

    println!("--");
    println!(
        "mode: {:?}  height: {:.0}",
        controller.mode(),
        controller.height()
    );
    print!("{}", buffer.text());
    if !buffer.text().ends_with('\n') {
        println!();
    }

    Ok(())
}
