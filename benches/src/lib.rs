//! Benchmark helper utilities for emote-rs
//!
//! This module provides sample dialogue and a ready-made controller for the
//! benchmark suite.

use emote_types::prelude::*;
use glam::Vec2;
use rand::{SeedableRng, rngs::SmallRng};

/// Controller type used by every benchmark
pub type BenchDialogue = DialogueController<FixedCellMetrics, SmallRng>;

/// Creates a seeded controller with 16px cells and the default layout anchor.
pub fn create_dialogue() -> BenchDialogue {
	DialogueController::load_content(
		FixedCellMetrics::new(FontSize::FS16x16),
		Vec2::new(180.0, 160.0),
		SmallRng::seed_from_u64(0xD1A1),
	)
}

/// Generates a line of `len` characters cycling through a sentence.
///
/// The sentence contains filtered words so the filter does real work.
pub fn generate_line(len: usize) -> String {
	const SENTENCE: &str = "What the hell, you damn fool! Get your ass over here. ";
	SENTENCE.chars().cycle().take(len).collect()
}

/// Common line lengths for benchmarks
pub mod lengths {
	/// Short exclamation
	pub const SHORT: usize = 12;
	/// Typical dialogue box line
	pub const TYPICAL: usize = 48;
	/// Long paragraph, more than a box would hold
	pub const LONG: usize = 200;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_line() {
		assert_eq!(generate_line(0), "");
		assert_eq!(generate_line(8), "What the");
		assert_eq!(generate_line(lengths::LONG).chars().count(), lengths::LONG);
	}

	#[test]
	fn test_create_dialogue_reveals() {
		let mut dialogue = create_dialogue();
		dialogue.set_dialogue(&generate_line(lengths::SHORT), PortraitState::Angry);
		dialogue.force_reveal(16.0);
		assert_eq!(dialogue.glyph_count(), lengths::SHORT);
	}
}
