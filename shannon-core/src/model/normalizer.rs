/// Canonical marker every punctuation mark collapses to in text mode.
pub const PUNCTUATION_MARKER: char = '.';

/// Punctuation marks recognised in text mode.
pub const PUNCTUATION: [char; 11] = ['.', '!', '?', ',', ';', ':', '"', '\'', '(', ')', '-'];

const CYRILLIC_UPPER_FIRST: char = 'А';
const CYRILLIC_UPPER_LAST: char = 'Я';
/// Distance between `А` (U+0410) and `а` (U+0430).
const CYRILLIC_CASE_OFFSET: u32 = 'а' as u32 - 'А' as u32;

/// Classification driving the text-mode rules, in priority order.
enum Class {
	/// `Ё`/`ё` and `Ъ`/`ъ`, collapsed onto a single lowercase letter.
	Variant(char),
	/// `А`..`Я`
	CyrillicUpper,
	Punctuation,
	Other,
}

fn classify(c: char) -> Class {
	match c {
		'Ё' | 'ё' => Class::Variant('е'),
		'Ъ' | 'ъ' => Class::Variant('ь'),
		CYRILLIC_UPPER_FIRST..=CYRILLIC_UPPER_LAST => Class::CyrillicUpper,
		c if is_punctuation(c) => Class::Punctuation,
		_ => Class::Other,
	}
}

/// Returns `true` if `c` belongs to the fixed punctuation set.
pub fn is_punctuation(c: char) -> bool {
	PUNCTUATION.contains(&c)
}

/// Maps a code point to its canonical form.
///
/// Outside text mode this is the identity. In text mode:
/// - `Ё`/`ё` become `е`, `Ъ`/`ъ` become `ь`
/// - Cyrillic capitals `А`..`Я` are shifted to lowercase
/// - Punctuation marks collapse to [`PUNCTUATION_MARKER`]
/// - Anything else goes through Unicode lower-casing
///
/// # Notes
/// - The hard sign is handled before the Cyrillic range shift, so `Ъ` also lands on `ь`.
/// - A lower-case mapping that expands to several code points (e.g. `İ`) leaves
///   the input unchanged.
pub fn normalize(c: char, text_mode: bool) -> char {
	if !text_mode {
		return c;
	}

	match classify(c) {
		Class::Variant(canonical) => canonical,
		// Stays within а..я, always a valid scalar value
		Class::CyrillicUpper => char::from_u32(c as u32 + CYRILLIC_CASE_OFFSET).unwrap_or(c),
		Class::Punctuation => PUNCTUATION_MARKER,
		Class::Other => lowercase_single(c),
	}
}

fn lowercase_single(c: char) -> char {
	let mut lower = c.to_lowercase();
	match (lower.next(), lower.next()) {
		(Some(l), None) => l,
		_ => c,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identity_outside_text_mode() {
		for c in ['А', 'Ё', 'Ъ', '!', 'Q', '\t', 'İ', '7'] {
			assert_eq!(normalize(c, false), c);
		}
	}

	#[test]
	fn cyrillic_capitals_are_lowered() {
		for code in 0x0410u32..=0x042F {
			let upper = char::from_u32(code).unwrap();
			if upper == 'Ъ' {
				continue;
			}
			assert_eq!(normalize(upper, true), char::from_u32(code + 0x20).unwrap());
		}
	}

	#[test]
	fn variants_collapse() {
		assert_eq!(normalize('Ё', true), 'е');
		assert_eq!(normalize('ё', true), 'е');
		assert_eq!(normalize('Ъ', true), 'ь');
		assert_eq!(normalize('ъ', true), 'ь');
	}

	#[test]
	fn punctuation_collapses_to_marker() {
		for mark in ".!?,;:\"'()-".chars() {
			assert_eq!(normalize(mark, true), '.');
		}
		assert_eq!(normalize('—', true), '—');
	}

	#[test]
	fn generic_lowercase() {
		assert_eq!(normalize('Q', true), 'q');
		assert_eq!(normalize('Ω', true), 'ω');
		assert_eq!(normalize('5', true), '5');
		assert_eq!(normalize('\t', true), '\t');
		assert_eq!(normalize(' ', true), ' ');
	}

	#[test]
	fn multi_char_lowercase_is_left_alone() {
		assert_eq!(normalize('İ', true), 'İ');
	}
}
