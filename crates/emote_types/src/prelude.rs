//! Prelude module for `emote_types`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```
//! use emote_types::prelude::*;
//!
//! let metrics = FixedCellMetrics::new(FontSize::FS8x8);
//! assert_eq!(metrics.measure_width("abc"), 24.0);
//! assert_eq!(PortraitState::Angry.reveal_profile().interval_ticks, 3);
//! ```

#[doc(inline)]
pub use crate::{
	EmoteError,
	// Colors
	color::Rgb,

	// Dialogue
	dialogue::{DialogueController, DialogueSession, REFERENCE_GLYPH},

	// Filter
	filter::filter_language,

	// Glyphs
	glyph::{GlyphAnimator, GlyphDraw},

	// Metrics
	metrics::{FixedCellMetrics, FontSize, TextMetrics},

	// Motion
	motion::{MotionProfile, SpeedDraw},

	// Options
	options::{DialogueOptions, LayoutOptions},

	// Portraits
	portrait::{PortraitState, RevealProfile},
};
