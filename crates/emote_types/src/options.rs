//! Dialogue options and screen layout.
//!
//! Options are assembled from built-in defaults, an optional TOML file and
//! `EMOTE_`-prefixed environment variables, in that order of precedence:
//!
//! ```toml
//! profanity_filter = false
//! seed = 42
//!
//! [layout]
//! title_safe_area = [32.0, 18.0]
//! box_offset = [40.0, 120.0]
//! dialogue_offset = [140.0, 40.0]
//! ```
//!
//! Nested keys use a double underscore in the environment, e.g.
//! `EMOTE_PROFANITY_FILTER=false`.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use glam::Vec2;
use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::error::EmoteError;

/// Where the dialogue box sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
	/// Top-left corner of the title-safe area
	pub title_safe_area: Vec2,
	/// Offset of the dialogue box inside the safe area
	pub box_offset: Vec2,
	/// Offset of the text inside the dialogue box
	pub dialogue_offset: Vec2,
}

impl Default for LayoutOptions {
	fn default() -> Self {
		Self {
			title_safe_area: Vec2::ZERO,
			box_offset: Vec2::new(40.0, 120.0),
			dialogue_offset: Vec2::new(140.0, 40.0),
		}
	}
}

impl LayoutOptions {
	/// Returns the screen offset of the first dialogue glyph.
	pub fn anchor(&self) -> Vec2 {
		self.title_safe_area + self.box_offset + self.dialogue_offset
	}
}

/// Options the dialogue controller reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueOptions {
	/// Replace profanity in new lines
	pub profanity_filter: bool,
	/// Screen layout
	pub layout: LayoutOptions,
	/// Seed for glyph motion; random when absent
	pub seed: Option<u64>,
}

impl Default for DialogueOptions {
	fn default() -> Self {
		Self {
			profanity_filter: true,
			layout: LayoutOptions::default(),
			seed: None,
		}
	}
}

impl DialogueOptions {
	/// Environment variable prefix.
	pub const ENV_PREFIX: &'static str = "EMOTE";

	/// Loads options from defaults, an optional TOML file and the environment.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or a value has the wrong type.
	pub fn load(path: Option<&Path>) -> Result<Self, EmoteError> {
		let mut builder = Config::builder();
		if let Some(path) = path {
			builder = builder.add_source(File::from(path).format(FileFormat::Toml));
		}
		let config = builder
			.add_source(Environment::with_prefix(Self::ENV_PREFIX).prefix_separator("_").separator("__"))
			.build()?;

		Ok(config.try_deserialize()?)
	}

	/// Parses options from a TOML document, ignoring the environment.
	///
	/// # Errors
	///
	/// Returns an error if the document is malformed.
	pub fn from_toml(source: &str) -> Result<Self, EmoteError> {
		let config = Config::builder().add_source(File::from_str(source, FileFormat::Toml)).build()?;
		Ok(config.try_deserialize()?)
	}

	/// Creates the motion random source: seeded if a seed is set.
	pub fn rng(&self) -> SmallRng {
		match self.seed {
			Some(seed) => SmallRng::seed_from_u64(seed),
			None => SmallRng::from_os_rng(),
		}
	}
}
