//! Dialogue player
//!
//! Plays a line of dialogue frame by frame in the terminal, showing how the
//! reveal pacing and glyph motion of a portrait state look.
//!
//! # Usage Examples
//!
//! ```bash
//! # Type out an angry line at ~60 fps
//! cargo run --example dialogue_player -- "Get out of my shop!" --state angry
//!
//! # Skip the typing, then watch a smirk settle
//! cargo run --example dialogue_player -- "Heh." --state smirk --force --frames 40
//!
//! # Dump the final glyph snapshot as JSON, with options from a TOML file
//! cargo run --example dialogue_player -- "Well, damn." --config dialogue.toml --json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use emote_rs::prelude::*;
use log::info;

/// Pixels per terminal row when plotting vertical motion
const PIXELS_PER_ROW: f32 = 4.0;

/// Terminal rows used to plot a frame
const PLOT_ROWS: usize = 7;

#[derive(Parser)]
#[command(name = "dialogue_player")]
#[command(author = "emote-rs project")]
#[command(version = "1.0")]
#[command(about = "Play a dialogue line with portrait-state animation", long_about = None)]
struct Cli {
	/// Line of dialogue to play
	#[arg(value_name = "TEXT")]
	text: String,

	/// Portrait state, by name or index
	#[arg(short, long, default_value = "normal")]
	state: PortraitState,

	/// Ticks per frame
	#[arg(short = 'd', long, default_value_t = 16.0)]
	tick_delta: f32,

	/// Frames to play after the line is complete
	#[arg(short, long, default_value_t = 10)]
	frames: usize,

	/// Reveal the whole line on the first frame
	#[arg(long)]
	force: bool,

	/// Options file (TOML)
	#[arg(short, long, env = "EMOTE_CONFIG")]
	config: Option<PathBuf>,

	/// Motion seed, overrides the options file
	#[arg(long)]
	seed: Option<u64>,

	/// Disable the profanity filter
	#[arg(long)]
	no_filter: bool,

	/// Print the final glyph snapshot as JSON instead of plotting frames
	#[arg(long)]
	json: bool,
}

fn main() -> anyhow::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	let mut options = DialogueOptions::load(cli.config.as_deref()).context("Failed to load dialogue options")?;
	if cli.seed.is_some() {
		options.seed = cli.seed;
	}
	if cli.no_filter {
		options.profanity_filter = false;
	}

	let metrics = FixedCellMetrics::new(FontSize::FS8x8);
	let mut dialogue = DialogueController::with_options(metrics, &options, options.rng());

	let shown = dialogue.set_dialogue(&cli.text, cli.state).to_owned();
	info!(
		"Playing {:?} as {} ({} ticks/char, spacing {})",
		shown,
		cli.state,
		dialogue.reveal_interval(),
		dialogue.spacing_factor()
	);

	if cli.force {
		dialogue.force_reveal(cli.tick_delta);
	}

	let mut frame = 0usize;
	let mut settle_frames = 0usize;
	while settle_frames < cli.frames {
		dialogue.tick(cli.tick_delta);
		if dialogue.is_complete() {
			settle_frames += 1;
		}
		frame += 1;

		if !cli.json {
			println!("frame {frame:>4} | {}", dialogue.revealed_text());
			print!("{}", plot(&dialogue, metrics));
		}
	}

	if cli.json {
		println!("{}", serde_json::to_string_pretty(&dialogue.snapshot_glyphs())?);
	}

	info!("Done after {frame} frames");
	Ok(())
}

/// Plots glyphs on a character grid: one column per cell, rows by vertical offset.
fn plot<R: rand::Rng>(dialogue: &DialogueController<FixedCellMetrics, R>, metrics: FixedCellMetrics) -> String {
	let cell = metrics.font_size().pixels();
	let origin = metrics.measure_glyph(REFERENCE_GLYPH) / 2.0;
	let base = dialogue.anchor() - origin;
	let line_middle = metrics.measure_height(dialogue.full_text()) * 0.5;

	let columns = (metrics.measure_width(dialogue.full_text()) * dialogue.spacing_factor() / cell).ceil() as usize + 2;
	let mut grid = vec![vec![' '; columns]; PLOT_ROWS];

	for draw in dialogue.snapshot_glyphs() {
		let offset = draw.position - base;
		let column = (offset.x / cell).round().max(0.0) as usize;
		let row = ((offset.y - line_middle) / PIXELS_PER_ROW).round() as i32 + PLOT_ROWS as i32 / 2;
		let row = row.clamp(0, PLOT_ROWS as i32 - 1) as usize;
		if let Some(slot) = grid[row].get_mut(column) {
			*slot = draw.character;
		}
	}

	grid.into_iter().map(|row| format!("           | {}\n", row.into_iter().collect::<String>())).collect()
}
