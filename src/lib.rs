#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `emote-rs` types out dialogue lines one character at a time and animates
//! each glyph according to the speaker's emotional portrait state.
//!
//! The core lives in [`emote_types`]; this crate re-exports it.
//!
//! ```
//! use emote_rs::prelude::*;
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let mut dialogue = DialogueController::with_options(
//!     FixedCellMetrics::default(),
//!     &DialogueOptions::default(),
//!     SmallRng::seed_from_u64(1),
//! );
//! dialogue.set_dialogue("...", PortraitState::Sad);
//! assert_eq!(dialogue.reveal_interval(), 75);
//! ```

/// `use emote_rs::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use emote_types::prelude::*;
}

// Re-export emote_types for convenience
#[doc(inline)]
pub use emote_types::*;
