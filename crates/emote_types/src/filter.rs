//! Profanity filter for dialogue lines.
//!
//! Replacements are plain substring matches applied in table order. Each
//! rule runs over the output of the previous one, but a rule never re-scans
//! its own replacement text. There is no word-boundary check, so
//! `"Assassin"` becomes `"Buttassin"`.

/// Replacement rules, applied in order.
pub const REPLACEMENTS: [(&str, &str); 10] = [
	("Damn", "!@%#"),
	("damn", "!@%#"),
	("Fuck", "@$#%"),
	("fuck", "@$#%"),
	("Shit", "$#^&"),
	("shit", "$#^&"),
	("Ass", "Butt"),
	(" ass", " butt"),
	("Hell", "Heck"),
	("hell", "heck"),
];

/// Returns `text` with every filtered word replaced.
pub fn filter_language(text: &str) -> String {
	REPLACEMENTS.iter().fold(text.to_owned(), |acc, &(from, to)| {
		if acc.contains(from) {
			acc.replace(from, to)
		} else {
			acc
		}
	})
}
