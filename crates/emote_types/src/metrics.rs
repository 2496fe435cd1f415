//! Text measurement used to place revealed glyphs.
//!
//! The dialogue controller never rasterises text itself. It asks a
//! [`TextMetrics`] implementation for the pixel extent of strings and glyphs,
//! which must be the same font the host draws with.

use glam::Vec2;

/// Measures text in the font used for drawing.
pub trait TextMetrics {
	/// Returns the pixel width of `text`.
	fn measure_width(&self, text: &str) -> f32;

	/// Returns the pixel height of `text`.
	fn measure_height(&self, text: &str) -> f32;

	/// Returns the pixel size of a single glyph.
	fn measure_glyph(&self, c: char) -> Vec2;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
	fn measure_width(&self, text: &str) -> f32 {
		(**self).measure_width(text)
	}

	fn measure_height(&self, text: &str) -> f32 {
		(**self).measure_height(text)
	}

	fn measure_glyph(&self, c: char) -> Vec2 {
		(**self).measure_glyph(c)
	}
}

impl<T: TextMetrics + ?Sized> TextMetrics for Box<T> {
	fn measure_width(&self, text: &str) -> f32 {
		(**self).measure_width(text)
	}

	fn measure_height(&self, text: &str) -> f32 {
		(**self).measure_height(text)
	}

	fn measure_glyph(&self, c: char) -> Vec2 {
		(**self).measure_glyph(c)
	}
}

/// Cell size of a square bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum FontSize {
	/// 8x8 pixels
	FS8x8 = 8,

	/// 16x16 pixels
	#[default]
	FS16x16 = 16,

	/// 24x24 pixels
	FS24x24 = 24,
}

impl FontSize {
	/// Returns the cell edge length in pixels.
	pub fn pixels(self) -> f32 {
		self as u32 as f32
	}
}

/// Metrics of a monospace bitmap font where every glyph fills one square cell.
///
/// Width is the longest line in characters times the cell size, height is
/// the line count times the cell size. Empty text measures zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedCellMetrics {
	size: FontSize,
}

impl FixedCellMetrics {
	/// Creates metrics for the given cell size.
	pub fn new(size: FontSize) -> Self {
		Self {
			size,
		}
	}

	/// Returns the cell size.
	pub fn font_size(&self) -> FontSize {
		self.size
	}
}

impl TextMetrics for FixedCellMetrics {
	fn measure_width(&self, text: &str) -> f32 {
		let longest = text.split('\n').map(|line| line.chars().count()).max().unwrap_or(0);
		longest as f32 * self.size.pixels()
	}

	fn measure_height(&self, text: &str) -> f32 {
		if text.is_empty() {
			return 0.0;
		}
		text.split('\n').count() as f32 * self.size.pixels()
	}

	fn measure_glyph(&self, _c: char) -> Vec2 {
		Vec2::splat(self.size.pixels())
	}
}
