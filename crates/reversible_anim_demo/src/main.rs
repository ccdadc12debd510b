// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reversible animation demo.
//!
//! Loads an animation sheet, plays the requested keys on a simulated host, runs
//! the virtual clock until every transition has finished and prints the resulting
//! styles. With `--reverse` the keys are then played back and the styles printed
//! again.

use clap::Parser;
use reversible_anim::sim::SimulatedHost;
use reversible_anim::{AnimationRegistry, AnimationSheet, TargetId};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const BUILTIN_SHEET: &str = include_str!("../assets/demo.ron");

/// Alias of the target every sheet is played on
const MAIN_TARGET: &str = "box";

const INITIAL_STYLES: &[(&str, &str)] = &[
    ("width", "100px"),
    ("opacity", "1"),
    ("display", "block"),
    ("borderTopStyle", "none"),
    ("borderRightStyle", "none"),
    ("borderBottomStyle", "none"),
    ("borderLeftStyle", "none"),
    ("paddingTop", "0px"),
    ("paddingRight", "0px"),
    ("paddingBottom", "0px"),
    ("paddingLeft", "0px"),
];

#[derive(Debug, Parser)]
#[command(version, about = "Play and reverse animation sheets on a simulated host")]
struct Cli {
    /// Animation sheet to load (RON); the built-in sheet is used when omitted
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Animation key to play; may be repeated or comma-separated
    #[arg(long = "key")]
    keys: Vec<String>,

    /// Duration in milliseconds, overriding the sheet default
    #[arg(long)]
    duration: Option<u64>,

    /// Play the keys back after playing them
    #[arg(long)]
    reverse: bool,
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("reversible_anim=debug,reversible_anim_demo=debug")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::info!("Starting reversible animation demo v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        tracing::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let sheet = match &cli.sheet {
        Some(path) => AnimationSheet::load(path)?,
        None => AnimationSheet::from_ron(BUILTIN_SHEET)?,
    };

    let mut host = SimulatedHost::new();
    let mut targets = HashMap::new();
    targets.insert(MAIN_TARGET.to_string(), TargetId::new());
    for alias in sheet.target_aliases() {
        targets.entry(alias.to_string()).or_insert_with(TargetId::new);
    }
    for &target in targets.values() {
        for (property, value) in INITIAL_STYLES {
            host.set_style(target, property, *value);
        }
    }

    let mut registry = AnimationRegistry::new();
    let applied = sheet.apply(&mut registry, &targets)?;
    tracing::info!(applied, "Registered animation sheet");

    let keys = if cli.keys.is_empty() {
        "stretch, border, fade".to_string()
    } else {
        cli.keys.join(",")
    };
    let mut playback = sheet.defaults.playback();
    if let Some(duration) = cli.duration {
        playback.duration_ms = duration;
    }
    let playback = playback.on_complete(|target| tracing::debug!(%target, "Transition finished"));

    let mut aliases: Vec<(&String, &TargetId)> = targets.iter().collect();
    aliases.sort_by(|a, b| a.0.cmp(b.0));
    let ids: Vec<TargetId> = aliases.iter().map(|(_, id)| **id).collect();

    registry.play(&mut host, &ids, &keys, &playback)?;
    host.run_until_idle();
    print_styles("played", &host, &aliases);

    if cli.reverse {
        registry.play_back(&mut host, &ids, &keys, &playback);
        host.run_until_idle();
        print_styles("played back", &host, &aliases);
    }

    Ok(())
}

fn print_styles(stage: &str, host: &SimulatedHost, aliases: &[(&String, &TargetId)]) {
    println!("== {stage} at {}ms", host.now_ms());
    for (alias, target) in aliases {
        println!("[{alias}]");
        let Some(styles) = host.styles(**target) else {
            continue;
        };
        let mut styles: Vec<_> = styles.iter().collect();
        styles.sort();
        for (property, value) in styles {
            println!("  {property}: {value}");
        }
    }
}
