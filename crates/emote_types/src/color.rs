//! RGB colour values used to tint dialogue glyphs.

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
}

impl Rgb {
	/// Wheat, the tint of ordinary speech.
	pub const WHEAT: Self = Self::new(245, 222, 179);

	/// Warm tan.
	pub const TAN: Self = Self::new(225, 185, 100);

	/// Orange red.
	pub const ORANGE_RED: Self = Self::new(225, 105, 50);

	/// Desaturated green.
	pub const MURKY_GREEN: Self = Self::new(89, 117, 112);

	/// Yellow green.
	pub const YELLOW_GREEN: Self = Self::new(245, 245, 100);

	/// Dark purple.
	pub const PURPLE: Self = Self::new(128, 70, 128);

	/// Lavender.
	pub const LAVENDER: Self = Self::new(195, 175, 225);

	/// Creates a colour from its channels.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Returns the channels as an array.
	pub const fn to_array(self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}
}

impl std::fmt::Display for Rgb {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}
}

impl From<(u8, u8, u8)> for Rgb {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		Self::new(r, g, b)
	}
}

impl From<Rgb> for [u8; 3] {
	fn from(color: Rgb) -> Self {
		color.to_array()
	}
}
