//! Dialogue placement with a proportional font

use emote_rs::prelude::*;
use glam::Vec2;
use rand::{SeedableRng, rngs::SmallRng};

/// Narrow `i`/`l`, wide everything else, 10px line height.
struct ProportionalMetrics;

impl ProportionalMetrics {
	fn advance(c: char) -> f32 {
		match c {
			'i' | 'l' | '!' => 3.0,
			' ' => 4.0,
			_ => 7.0,
		}
	}
}

impl TextMetrics for ProportionalMetrics {
	fn measure_width(&self, text: &str) -> f32 {
		text.chars().map(Self::advance).sum()
	}

	fn measure_height(&self, text: &str) -> f32 {
		if text.is_empty() { 0.0 } else { 10.0 }
	}

	fn measure_glyph(&self, c: char) -> Vec2 {
		Vec2::new(Self::advance(c), 10.0)
	}
}

#[test]
fn test_glyphs_follow_measured_advance() {
	let mut dialogue = DialogueController::load_content(
		Box::new(ProportionalMetrics) as Box<dyn TextMetrics>,
		Vec2::new(100.0, 50.0),
		SmallRng::seed_from_u64(4),
	);
	dialogue.set_dialogue("hi all", PortraitState::Creepy);
	dialogue.force_reveal(0.0);

	// origin is half of 'X' (7x10), spacing 1.25, half line height 5
	let expected_advances = [0.0, 7.0, 10.0, 14.0, 21.0, 24.0];
	for (glyph, advance) in dialogue.glyphs().zip(expected_advances) {
		assert_eq!(glyph.anchor(), Vec2::new(100.0 + advance * 1.25 - 3.5, 50.0));
	}
}
