//! Per-state glyph motion profiles.
//!
//! Every revealed glyph oscillates around its anchor. The profile picked by
//! the speaker's [`PortraitState`] decides how fast each axis advances, how
//! far the glyph may travel, its tint, and whether the motion loops forever
//! or settles once the phase reaches π.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;

use crate::{color::Rgb, portrait::PORTRAIT_STATE_COUNT, portrait::PortraitState};

/// Phase advanced per tick for each unit of speed.
pub const PHASE_PER_TICK: f32 = 0.01;

/// How the speed of one axis is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedDraw {
	/// Always the same speed
	Fixed(f32),

	/// `random(low..high) * 0.1`, drawn once per glyph
	Tenths {
		/// Inclusive lower bound, in tenths
		low: u32,
		/// Exclusive upper bound, in tenths
		high: u32,
	},
}

impl SpeedDraw {
	/// Draws a concrete speed.
	pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
		match self {
			Self::Fixed(speed) => speed,
			Self::Tenths {
				low,
				high,
			} => rng.random_range(low..high) as f32 * 0.1,
		}
	}
}

/// Motion and tint of the glyphs spoken in one portrait state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
	/// Horizontal speed, radians per tick before scaling by [`PHASE_PER_TICK`]
	pub speed_x: SpeedDraw,

	/// Vertical speed
	pub speed_y: SpeedDraw,

	/// Maximum displacement in pixels
	pub amplitude: f32,

	/// Glyph tint
	pub color: Rgb,

	/// Loops forever when true, settles at π otherwise
	pub continuous: bool,

	/// Start the vertical phase at a random multiple of π/100
	pub random_phase_y: bool,
}

const fn tenths(low: u32, high: u32) -> SpeedDraw {
	SpeedDraw::Tenths {
		low,
		high,
	}
}

/// Motion profiles, indexed by `PortraitState as usize`.
static MOTION_PROFILES: [MotionProfile; PORTRAIT_STATE_COUNT] = [
	// Normal
	MotionProfile {
		speed_x: SpeedDraw::Fixed(0.0),
		speed_y: SpeedDraw::Fixed(0.0),
		amplitude: 2.0,
		color: Rgb::WHEAT,
		continuous: true,
		random_phase_y: false,
	},
	// Serious
	MotionProfile {
		speed_x: SpeedDraw::Fixed(4.0),
		speed_y: SpeedDraw::Fixed(0.0),
		amplitude: 20.0,
		color: Rgb::TAN,
		continuous: false,
		random_phase_y: false,
	},
	// Angry
	MotionProfile {
		speed_x: tenths(50, 100),
		speed_y: tenths(50, 150),
		amplitude: 2.0,
		color: Rgb::ORANGE_RED,
		continuous: true,
		random_phase_y: true,
	},
	// Creepy
	MotionProfile {
		speed_x: tenths(10, 11),
		speed_y: tenths(10, 11),
		amplitude: 2.0,
		color: Rgb::MURKY_GREEN,
		continuous: true,
		random_phase_y: true,
	},
	// Smirk
	MotionProfile {
		speed_x: SpeedDraw::Fixed(0.0),
		speed_y: SpeedDraw::Fixed(1.0),
		amplitude: 20.0,
		color: Rgb::YELLOW_GREEN,
		continuous: false,
		random_phase_y: false,
	},
	// Confused
	MotionProfile {
		speed_x: tenths(12, 13),
		speed_y: tenths(12, 13),
		amplitude: 10.0,
		color: Rgb::PURPLE,
		continuous: false,
		random_phase_y: false,
	},
	// Surprised
	MotionProfile {
		speed_x: SpeedDraw::Fixed(0.0),
		speed_y: SpeedDraw::Fixed(1.0),
		amplitude: 20.0,
		color: Rgb::YELLOW_GREEN,
		continuous: false,
		random_phase_y: false,
	},
	// Sad
	MotionProfile {
		speed_x: tenths(15, 20),
		speed_y: tenths(10, 15),
		amplitude: 4.0,
		color: Rgb::LAVENDER,
		continuous: true,
		random_phase_y: true,
	},
];

impl PortraitState {
	/// Returns the glyph motion profile for this state.
	pub fn motion_profile(self) -> &'static MotionProfile {
		&MOTION_PROFILES[self.index()]
	}
}

/// Speed and starting phase drawn for a single glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionDraw {
	/// Radians per tick before scaling
	pub speed: Vec2,
	/// Starting phase in radians
	pub phase: Vec2,
}

impl MotionProfile {
	/// Draws the per-glyph speed and starting phase.
	///
	/// Draw order is fixed (vertical phase, horizontal speed, vertical speed)
	/// so a seeded generator always yields the same animation.
	pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> MotionDraw {
		let phase_y = if self.random_phase_y {
			rng.random_range(0..100u32) as f32 * 0.01 * PI
		} else {
			0.0
		};
		let speed = Vec2::new(self.speed_x.draw(rng), self.speed_y.draw(rng));

		MotionDraw {
			speed,
			phase: Vec2::new(0.0, phase_y),
		}
	}
}
