//! Integration tests for dialogue playback through `emote-rs`

mod playback;
mod proportional;
