//! Error types for the dialogue text crate.

use thiserror::Error;

/// Errors that can occur when parsing portrait states or loading options
#[derive(Debug, Error)]
pub enum EmoteError {
	/// Portrait state name was not recognised
	#[error("Unknown portrait state: {0:?}")]
	UnknownPortraitState(String),

	/// Options could not be assembled from their sources
	#[error(transparent)]
	Config(#[from] config::ConfigError),
}
