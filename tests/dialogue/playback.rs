//! Frame-by-frame playback of dialogue lines

use emote_rs::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

fn create_dialogue(seed: u64) -> DialogueController<FixedCellMetrics, SmallRng> {
	let options = DialogueOptions {
		seed: Some(seed),
		..Default::default()
	};
	DialogueController::with_options(FixedCellMetrics::new(FontSize::FS16x16), &options, options.rng())
}

#[test]
fn test_full_conversation() {
	let mut dialogue = create_dialogue(1);
	let lines = [
		("Welcome back.", PortraitState::Normal),
		("Where the hell were you?", PortraitState::Angry),
		("...", PortraitState::Sad),
		("Oh? Interesting.", PortraitState::Smirk),
	];

	for (text, state) in lines {
		let shown = dialogue.set_dialogue(text, state).to_owned();
		let mut frames = 0;
		while !dialogue.is_complete() {
			dialogue.tick(16.0);
			frames += 1;
			assert!(frames < 10_000, "line never completed: {text}");
		}
		assert_eq!(dialogue.revealed_text(), shown);
		assert_eq!(dialogue.snapshot_glyphs().len(), shown.chars().count());
	}

	assert_eq!(dialogue.full_text(), "Oh? Interesting.");
}

#[test]
fn test_filtered_line_is_shown() {
	let mut dialogue = create_dialogue(2);
	assert_eq!(dialogue.set_dialogue("Where the hell were you?", PortraitState::Angry), "Where the heck were you?");
}

#[test]
fn test_skip_then_advance() {
	let mut dialogue = create_dialogue(3);
	dialogue.set_dialogue("A long, slow line of text.", PortraitState::Sad);
	for _ in 0..5 {
		dialogue.tick(16.0);
	}
	assert!(!dialogue.is_complete());

	dialogue.force_reveal(16.0);
	assert!(dialogue.is_complete());
	assert_eq!(dialogue.glyph_count(), 26);

	dialogue.set_dialogue("Next.", PortraitState::Normal);
	assert_eq!(dialogue.glyph_count(), 0);
	assert!(!dialogue.is_complete());
}

#[test]
fn test_snapshot_serializes() {
	let mut dialogue = create_dialogue(4);
	dialogue.set_dialogue("Hm", PortraitState::Confused);
	dialogue.force_reveal(16.0);

	let json = serde_json::to_value(dialogue.snapshot_glyphs()).unwrap();
	let glyphs = json.as_array().unwrap();
	assert_eq!(glyphs.len(), 2);
	assert_eq!(glyphs[0]["character"], "H");
	assert_eq!(glyphs[1]["color"]["r"], 128);
	assert_eq!(glyphs[0]["scale"], 1.0);
}

#[test]
fn test_unknown_state_index_plays_as_normal() {
	let mut dialogue = create_dialogue(5);
	dialogue.set_dialogue("Fallback", PortraitState::from(12));
	assert_eq!(dialogue.portrait_state(), PortraitState::Normal);
	dialogue.force_reveal(16.0);
	for draw in dialogue.snapshot_glyphs() {
		assert_eq!(draw.color, Rgb::WHEAT);
	}
}
