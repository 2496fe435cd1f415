//! This crate provides the dialogue text animation core for the `emote-rs` project.
//!
//! # Modules
//!
//! - **portrait**: Speaker portrait states and their reveal pacing
//! - **motion**: Per-state glyph motion profiles
//! - **glyph**: Animated glyphs and their draw records
//! - **dialogue**: The typewriter state machine driving a line of dialogue
//! - **filter**: Profanity replacement applied once per line
//! - **metrics**: Text measurement collaborator and a fixed-cell implementation
//! - **options**: Layout and filter options, loadable from TOML and the environment
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use emote_types::prelude::*;
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let options = DialogueOptions::default();
//! let mut dialogue = DialogueController::with_options(
//!     FixedCellMetrics::new(FontSize::FS16x16),
//!     &options,
//!     SmallRng::seed_from_u64(7),
//! );
//!
//! dialogue.set_dialogue("Well, damn.", PortraitState::Smirk);
//! dialogue.force_reveal(16.0);
//! assert_eq!(dialogue.revealed_text(), "Well, !@%#.");
//! ```

pub mod color;
pub mod dialogue;
pub mod filter;
pub mod glyph;
pub mod metrics;
pub mod motion;
pub mod options;
pub mod portrait;

mod error;

/// `use emote_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::EmoteError;
