use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use triview::app::{App, MAX_SIZE, MIN_SIZE};
use triview::commands::{self, Command};
use triview::config::{EditorConfig, LevelChoice, ModeChoice};

#[derive(Parser, Debug)]
#[command(
    name = "triview",
    about = "Three-view block editor: build a model against front/side/top silhouettes"
)]
struct Args {
    /// Editor config TOML; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Workspace side length (3..=9)
    #[arg(long)]
    size: Option<usize>,
    /// Placement policy
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,
    /// Level kind used by a bare `level` command
    #[arg(long, value_enum)]
    level: Option<LevelChoice>,
    /// Seed the puzzle RNG for reproducible targets
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => match EditorConfig::load_from_path(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EditorConfig::default(),
    };
    if let Some(size) = args.size {
        cfg.size = size;
    }
    if let Some(mode) = args.mode {
        cfg.mode = mode;
    }
    if let Some(level) = args.level {
        cfg.level = level;
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if !(MIN_SIZE..=MAX_SIZE).contains(&cfg.size) {
        eprintln!("size must be between {} and {}", MIN_SIZE, MAX_SIZE);
        std::process::exit(1);
    }

    log::info!(
        "starting editor: size={} mode={:?} level={:?} seed={:?}",
        cfg.size,
        cfg.mode,
        cfg.level,
        cfg.seed
    );

    let mut app = App::new(&cfg);
    println!(
        "triview {}x{0}x{0}, {:?} mode (type `help` for commands)",
        cfg.size, cfg.mode
    );

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match commands::parse(&line, cfg.level.into()) {
            Ok(Command::Emit(event)) => {
                app.queue.emit_now(event);
                app.pump();
            }
            Ok(Command::Help) => print!("{}", commands::HELP),
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => {}
            Err(msg) => println!("{}", msg),
        }
        prompt();
    }
    log::info!("exiting after {} events", app.events_processed());
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
