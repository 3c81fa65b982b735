//! Utility functions

use crate::types::ContentId;

/// Integer value of a loosely typed string.
///
/// Leading whitespace is skipped, an optional sign and the leading run of digits are
/// parsed, and anything else yields 0. Overflow saturates. This is how the forum itself
/// reads ids out of its metadata and option tables.
///
/// # Examples
/// - `"42"` → `42`
/// - `" 12abc"` → `12`
/// - `"-3"` → `-3`
/// - `"abc"` → `0`
pub fn intval(s: &str) -> i64 {
	let s = s.trim_start();
	let (negative, digits) = match s.as_bytes().first() {
		Some(b'-') => (true, &s[1..]),
		Some(b'+') => (false, &s[1..]),
		_ => (false, s),
	};

	let mut value: i64 = 0;
	for b in digits.bytes().take_while(u8::is_ascii_digit) {
		value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
	}

	if negative { -value } else { value }
}

/// Parse a metadata value holding a content id.
///
/// Missing, non-numeric, zero and negative values all mean "no content".
pub fn parse_content_id(value: Option<&str>) -> Option<ContentId> {
	let id = intval(value?);
	u64::try_from(id).ok().map(ContentId).and_then(ContentId::non_zero)
}


// vim: ts=4
