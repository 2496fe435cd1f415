//! Animated dialogue glyphs.
//!
//! A [`GlyphAnimator`] is spawned for every revealed character. It keeps a
//! fixed anchor and moves around it on a sine wave per axis:
//!
//! ```text
//! phase += speed * tick * PHASE_PER_TICK
//! y = anchor.y + amplitude * sin(phase.y) / 2
//! x = anchor.x + (amplitude / 2) * sin(phase.x) / 2
//! ```
//!
//! Phases wrap at 2π. A non-continuous glyph clamps each axis at π instead,
//! where `sin` is zero, so it comes to rest exactly on its anchor. The final
//! position is snapped to whole pixels every tick.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::{
	color::Rgb,
	motion::{MotionProfile, PHASE_PER_TICK},
	portrait::PortraitState,
};

/// Everything a renderer needs to draw one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphDraw {
	/// Character to draw
	pub character: char,
	/// Pixel-snapped top-left position
	pub position: Vec2,
	/// Tint
	pub color: Rgb,
	/// Rotation in radians
	pub rotation: f32,
	/// Uniform scale
	pub scale: f32,
	/// Rotation and scale origin, relative to the glyph
	pub origin: Vec2,
}

/// One revealed character and its oscillation state.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphAnimator {
	character: char,
	anchor: Vec2,
	origin: Vec2,
	position: Vec2,
	phase: Vec2,
	speed: Vec2,
	amplitude: f32,
	continuous: bool,
	color: Rgb,
	rotation: f32,
	scale: f32,
}

impl GlyphAnimator {
	/// Spawns a glyph.
	///
	/// # Arguments
	///
	/// * `character` - Character being revealed.
	/// * `offset` - Screen position of the glyph cell, before origin correction.
	/// * `state` - Portrait state selecting the motion profile.
	/// * `phase_offset` - Ticks the glyph starts ahead by, for cascading.
	/// * `origin` - Half the reference glyph size; subtracted from `offset`.
	/// * `rng` - Source for per-glyph speed and phase draws.
	pub fn spawn<R: Rng + ?Sized>(
		character: char,
		offset: Vec2,
		state: PortraitState,
		phase_offset: f32,
		origin: Vec2,
		rng: &mut R,
	) -> Self {
		let profile: &MotionProfile = state.motion_profile();
		let draw = profile.draw(rng);
		let anchor = offset - origin;

		let mut phase = draw.phase;
		if draw.speed.x != 0.0 {
			phase.x = (phase.x + draw.speed.x * phase_offset * PHASE_PER_TICK).rem_euclid(TAU);
		}
		if draw.speed.y != 0.0 {
			phase.y = (phase.y + draw.speed.y * phase_offset * PHASE_PER_TICK).rem_euclid(TAU);
		}

		let mut glyph = Self {
			character,
			anchor,
			origin,
			position: anchor,
			phase,
			speed: draw.speed,
			amplitude: profile.amplitude,
			continuous: profile.continuous,
			color: profile.color,
			rotation: 0.0,
			scale: 1.0,
		};
		glyph.position = glyph.position_at(glyph.phase);
		glyph
	}

	/// Advances the oscillation by `tick` and recomputes the position.
	pub fn update(&mut self, tick: f32) {
		self.phase = self.advance(self.phase, tick);
		self.position = self.position_at(self.phase);
	}

	/// Pixel-snapped position for the given phase.
	fn position_at(&self, phase: Vec2) -> Vec2 {
		let y = self.anchor.y + self.amplitude * phase.y.sin() / 2.0;
		let x = self.anchor.x + (self.amplitude / 2.0) * phase.x.sin() / 2.0;
		Vec2::new(x, y).round()
	}

	fn advance(&self, phase: Vec2, tick: f32) -> Vec2 {
		let step = |phase: f32, speed: f32| {
			let next = phase + speed * tick * PHASE_PER_TICK;
			if !self.continuous && next >= PI {
				PI
			} else {
				next.rem_euclid(TAU)
			}
		};
		Vec2::new(step(phase.x, self.speed.x), step(phase.y, self.speed.y))
	}

	/// Returns the character.
	pub fn character(&self) -> char {
		self.character
	}

	/// Returns the fixed anchor the glyph oscillates around.
	pub fn anchor(&self) -> Vec2 {
		self.anchor
	}

	/// Returns the pixel-snapped current position.
	pub fn position(&self) -> Vec2 {
		self.position
	}

	/// Returns the current phase in radians.
	pub fn phase(&self) -> Vec2 {
		self.phase
	}

	/// Returns the speed in radians per tick before scaling.
	pub fn speed(&self) -> Vec2 {
		self.speed
	}

	/// Returns the maximum displacement in pixels.
	pub fn amplitude(&self) -> f32 {
		self.amplitude
	}

	/// Returns true if the glyph never settles.
	pub fn is_continuous(&self) -> bool {
		self.continuous
	}

	/// Returns the tint.
	pub fn color(&self) -> Rgb {
		self.color
	}

	/// Returns the draw record for this glyph.
	pub fn draw(&self) -> GlyphDraw {
		GlyphDraw {
			character: self.character,
			position: self.position,
			color: self.color,
			rotation: self.rotation,
			scale: self.scale,
			origin: self.origin,
		}
	}
}
