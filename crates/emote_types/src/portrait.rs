//! Portrait states and the reveal pacing attached to each of them.
//!
//! A portrait state is the emotional mode of whoever is speaking. It drives
//! two things: how fast the line is typed out and how widely its glyphs are
//! spaced (this module), and how each glyph moves and is tinted
//! ([`crate::motion`]).
//!
//! ```text
//! State      Interval  Spacing
//! ---------  --------  -------
//! Normal     20        1.00
//! Serious    10        1.00
//! Angry      3         1.50
//! Creepy     50        1.25
//! Smirk      3         1.25
//! Confused   20        1.00
//! Surprised  3         1.00
//! Sad        75        1.25
//! ```

use std::{fmt::Formatter, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::EmoteError;

/// Emotional mode of the current speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PortraitState {
	/// Ordinary speech
	#[default]
	Normal = 0,
	/// Serious
	Serious = 1,
	/// Angry
	Angry = 2,
	/// Creepy
	Creepy = 3,
	/// Smirk
	Smirk = 4,
	/// Confused
	Confused = 5,
	/// Surprised
	Surprised = 6,
	/// Sad
	Sad = 7,
}

/// Number of portrait states.
pub const PORTRAIT_STATE_COUNT: usize = 8;

/// Reveal pacing for one portrait state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealProfile {
	/// Ticks that must accumulate before one more character is revealed
	pub interval_ticks: u32,

	/// Multiplier applied to the measured prefix width when placing a glyph
	pub spacing_factor: f32,
}

impl RevealProfile {
	const fn new(interval_ticks: u32, spacing_factor: f32) -> Self {
		Self {
			interval_ticks,
			spacing_factor,
		}
	}
}

/// Reveal pacing, indexed by `PortraitState as usize`.
static REVEAL_PROFILES: [RevealProfile; PORTRAIT_STATE_COUNT] = [
	RevealProfile::new(20, 1.0),
	RevealProfile::new(10, 1.0),
	RevealProfile::new(3, 1.5),
	RevealProfile::new(50, 1.25),
	RevealProfile::new(3, 1.25),
	RevealProfile::new(20, 1.0),
	RevealProfile::new(3, 1.0),
	RevealProfile::new(75, 1.25),
];

impl PortraitState {
	/// Every state, in index order.
	pub const ALL: [Self; PORTRAIT_STATE_COUNT] = [
		Self::Normal,
		Self::Serious,
		Self::Angry,
		Self::Creepy,
		Self::Smirk,
		Self::Confused,
		Self::Surprised,
		Self::Sad,
	];

	/// Converts a raw state index. Unknown indices fall back to `Normal`.
	pub fn from_index(index: i32) -> Self {
		usize::try_from(index).ok().and_then(|i| Self::ALL.get(i).copied()).unwrap_or_default()
	}

	/// Returns the raw state index.
	pub fn index(self) -> usize {
		self as usize
	}

	/// Returns the reveal pacing for this state.
	pub fn reveal_profile(self) -> &'static RevealProfile {
		&REVEAL_PROFILES[self.index()]
	}

	/// Returns the lowercase name of this state.
	pub fn name(self) -> &'static str {
		match self {
			Self::Normal => "normal",
			Self::Serious => "serious",
			Self::Angry => "angry",
			Self::Creepy => "creepy",
			Self::Smirk => "smirk",
			Self::Confused => "confused",
			Self::Surprised => "surprised",
			Self::Sad => "sad",
		}
	}
}

impl From<i32> for PortraitState {
	fn from(index: i32) -> Self {
		Self::from_index(index)
	}
}

impl FromStr for PortraitState {
	type Err = EmoteError;

	/// Accepts a state name (any case) or its numeric index.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if let Ok(index) = trimmed.parse::<i32>() {
			return Ok(Self::from_index(index));
		}

		Self::ALL
			.into_iter()
			.find(|state| state.name().eq_ignore_ascii_case(trimmed))
			.ok_or_else(|| EmoteError::UnknownPortraitState(s.to_owned()))
	}
}

impl std::fmt::Display for PortraitState {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Normal => write!(f, "Normal"),
			Self::Serious => write!(f, "Serious"),
			Self::Angry => write!(f, "Angry"),
			Self::Creepy => write!(f, "Creepy"),
			Self::Smirk => write!(f, "Smirk"),
			Self::Confused => write!(f, "Confused"),
			Self::Surprised => write!(f, "Surprised"),
			Self::Sad => write!(f, "Sad"),
		}
	}
}
