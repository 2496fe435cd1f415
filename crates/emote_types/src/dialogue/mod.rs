//! Typewriter dialogue state machine.
//!
//! The [`DialogueController`] owns one live [`DialogueSession`]: the target
//! line, how much of it is on screen, and the pacing looked up from the
//! speaker's [`PortraitState`]. Every revealed character gets its own
//! [`GlyphAnimator`].
//!
//! # Frame Flow
//!
//! ```text
//! set_dialogue(text, state)   reset session, filter once, look up pacing
//!        |
//! tick(dt)  every frame       accumulate dt, reveal at most one character,
//!        |                    update every glyph
//! snapshot_glyphs()           (character, position, color, rotation, scale)
//! ```
//!
//! # Examples
//!
//! ```
//! use emote_types::prelude::*;
//! use glam::Vec2;
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let metrics = FixedCellMetrics::new(FontSize::FS16x16);
//! let mut dialogue =
//!     DialogueController::load_content(metrics, Vec2::new(180.0, 160.0), SmallRng::seed_from_u64(1));
//!
//! dialogue.set_dialogue("Howdy", PortraitState::Angry);
//! while !dialogue.is_complete() {
//!     dialogue.tick(16.0);
//! }
//! assert_eq!(dialogue.snapshot_glyphs().len(), 5);
//! ```

use glam::Vec2;
use log::{debug, trace};
use rand::Rng;

use crate::{
	filter::filter_language,
	glyph::{GlyphAnimator, GlyphDraw},
	metrics::TextMetrics,
	options::DialogueOptions,
	portrait::PortraitState,
};


/// Glyph measured to find the draw origin of every dialogue glyph.
pub const REFERENCE_GLYPH: char = 'X';

/// State of the line currently being typed out.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueSession {
	/// Line as passed in by the caller
	source_text: String,
	/// Filtered target line
	full_text: String,
	/// Prefix of `full_text` already on screen
	revealed_text: String,
	portrait_state: PortraitState,
	reveal_interval: u32,
	elapsed_ticks: u32,
	spacing_factor: f32,
	complete: bool,
	filter_enabled: bool,
	already_filtered: bool,
}

impl Default for DialogueSession {
	/// An empty, already complete line.
	fn default() -> Self {
		Self::new("", PortraitState::Normal, false)
	}
}

impl DialogueSession {
	fn new(text: &str, portrait_state: PortraitState, filter_enabled: bool) -> Self {
		let profile = portrait_state.reveal_profile();
		let mut session = Self {
			source_text: text.to_owned(),
			full_text: text.to_owned(),
			revealed_text: String::new(),
			portrait_state,
			reveal_interval: profile.interval_ticks,
			elapsed_ticks: 0,
			spacing_factor: profile.spacing_factor,
			complete: false,
			filter_enabled,
			already_filtered: false,
		};
		session.apply_filter();
		session.complete = session.full_text.is_empty();
		session
	}

	fn apply_filter(&mut self) {
		if self.filter_enabled && !self.already_filtered {
			self.full_text = filter_language(&self.full_text);
			self.already_filtered = true;
		}
	}

	/// Returns true if `text` names the line this session is already showing.
	fn is_same_line(&self, text: &str) -> bool {
		text == self.full_text || text == self.source_text
	}

	/// Next character waiting to be revealed.
	fn pending_char(&self) -> Option<char> {
		self.full_text[self.revealed_text.len()..].chars().next()
	}

	/// Returns the ticks accumulated toward the next reveal.
	pub fn elapsed_ticks(&self) -> u32 {
		self.elapsed_ticks
	}

	/// Returns true if the profanity filter has run for this line.
	pub fn is_filtered(&self) -> bool {
		self.already_filtered
	}
}

/// Reveals dialogue lines character by character and animates each glyph.
///
/// The controller is generic over the text measurement collaborator and the
/// random source, so tests can use a fixed-cell font and a seeded generator.
#[derive(Debug)]
pub struct DialogueController<M, R> {
	metrics: M,
	anchor: Vec2,
	rng: R,
	profanity_filter: bool,
	session: DialogueSession,
	glyphs: Vec<GlyphAnimator>,
}

impl<M: TextMetrics, R: Rng> DialogueController<M, R> {
	/// Creates a controller with the profanity filter enabled.
	///
	/// # Arguments
	///
	/// * `metrics` - Measures text in the font used for drawing.
	/// * `anchor` - Screen offset of the first glyph (safe area plus dialogue box offsets).
	/// * `rng` - Random source for per-glyph motion.
	pub fn load_content(metrics: M, anchor: Vec2, rng: R) -> Self {
		Self {
			metrics,
			anchor,
			rng,
			profanity_filter: true,
			session: DialogueSession::default(),
			glyphs: Vec::new(),
		}
	}

	/// Creates a controller using the anchor and filter flag from `options`.
	pub fn with_options(metrics: M, options: &DialogueOptions, rng: R) -> Self {
		let mut controller = Self::load_content(metrics, options.layout.anchor(), rng);
		controller.profanity_filter = options.profanity_filter;
		controller
	}

	/// Enables or disables the profanity filter, starting with the next line.
	pub fn set_profanity_filter(&mut self, enabled: bool) {
		self.profanity_filter = enabled;
	}

	/// Returns true if the next line will be filtered.
	pub fn profanity_filter(&self) -> bool {
		self.profanity_filter
	}

	/// Starts a new line and returns the text that will be shown.
	///
	/// Passing the line that is already showing (raw or filtered) only marks
	/// it complete. Anything else drops every glyph and restarts the reveal.
	pub fn set_dialogue(&mut self, text: &str, portrait_state: PortraitState) -> &str {
		if self.session.is_same_line(text) {
			debug!("Dialogue line repeated, marking complete");
			self.session.complete = true;
			return &self.session.full_text;
		}

		self.glyphs.clear();
		self.session = DialogueSession::new(text, portrait_state, self.profanity_filter);
		debug!(
			"New dialogue line: {} chars, state {}, interval {}, spacing {}",
			self.session.full_text.chars().count(),
			portrait_state,
			self.session.reveal_interval,
			self.session.spacing_factor
		);

		&self.session.full_text
	}

	/// Reveals every remaining character at once.
	///
	/// Each glyph starts `tick * n` ticks ahead, where `n` counts the
	/// characters revealed by this call, so the line still ripples.
	pub fn force_reveal(&mut self, tick: f32) {
		let mut revealed = 0usize;
		while self.reveal_next(tick * revealed as f32) {
			revealed += 1;
		}
		self.session.complete = true;
		debug!("Force revealed {revealed} characters");
	}

	/// Advances the reveal by one frame and updates every glyph.
	///
	/// At most one character is revealed per call. Any surplus ticks stay in
	/// the accumulator for the next call.
	pub fn tick(&mut self, tick: f32) {
		if !self.session.complete {
			self.session.elapsed_ticks = self.session.elapsed_ticks.saturating_add(tick.max(0.0) as u32);

			if self.session.elapsed_ticks >= self.session.reveal_interval {
				self.session.elapsed_ticks -= self.session.reveal_interval;
				self.reveal_next(0.0);
				if self.session.pending_char().is_none() {
					self.session.complete = true;
					debug!("Dialogue line complete");
				}
			}
		}

		for glyph in &mut self.glyphs {
			glyph.update(tick);
		}
	}

	/// Moves one character into the revealed prefix and spawns its glyph.
	/// Returns false if nothing was left to reveal.
	fn reveal_next(&mut self, phase_offset: f32) -> bool {
		let Some(c) = self.session.pending_char() else {
			return false;
		};

		let offset = self.anchor
			+ Vec2::new(
				self.metrics.measure_width(&self.session.revealed_text) * self.session.spacing_factor,
				self.metrics.measure_height(&self.session.full_text) * 0.5,
			);
		let origin = self.metrics.measure_glyph(REFERENCE_GLYPH) / 2.0;

		trace!("Reveal {c:?} at {offset}");
		self.glyphs.push(GlyphAnimator::spawn(
			c,
			offset,
			self.session.portrait_state,
			phase_offset,
			origin,
			&mut self.rng,
		));
		self.session.revealed_text.push(c);
		true
	}

	/// Returns true once the whole line is on screen.
	pub fn is_complete(&self) -> bool {
		self.session.complete
	}

	/// Returns the horizontal spacing multiplier of the current line.
	pub fn spacing_factor(&self) -> f32 {
		self.session.spacing_factor
	}

	/// Returns the ticks needed per revealed character.
	pub fn reveal_interval(&self) -> u32 {
		self.session.reveal_interval
	}

	/// Returns the filtered target line.
	pub fn full_text(&self) -> &str {
		&self.session.full_text
	}

	/// Returns the prefix already on screen.
	pub fn revealed_text(&self) -> &str {
		&self.session.revealed_text
	}

	/// Returns the portrait state of the current line.
	pub fn portrait_state(&self) -> PortraitState {
		self.session.portrait_state
	}

	/// Returns the live session.
	pub fn session(&self) -> &DialogueSession {
		&self.session
	}

	/// Returns the screen offset of the first glyph.
	pub fn anchor(&self) -> Vec2 {
		self.anchor
	}

	/// Returns the number of glyphs on screen.
	pub fn glyph_count(&self) -> usize {
		self.glyphs.len()
	}

	/// Returns the glyphs on screen in reveal order.
	pub fn glyphs(&self) -> impl Iterator<Item = &GlyphAnimator> {
		self.glyphs.iter()
	}

	/// Returns draw records for every glyph, in reveal order.
	pub fn snapshot_glyphs(&self) -> Vec<GlyphDraw> {
		self.glyphs.iter().map(GlyphAnimator::draw).collect()
	}
}
