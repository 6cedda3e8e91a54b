//! Legacy chat formatting codes. Item names and lore are plain strings, where
//! formatting is written as [`CODE_SEP`] followed by a single code character.
//! Users usually type these with a friendlier marker (like `&`), which
//! [`translate_codes`] converts.
//!
//! # Example
//!
//! ```rust
//! use ib_common::util::chat::translate_codes;
//!
//! let name = translate_codes('&', "&aEmerald &lSword");
//! assert_eq!(name, "§aEmerald §lSword");
//! ```

/// The character used in the old chat codes formatting.
pub const CODE_SEP: char = '§';

/// Every character that is a valid code after [`CODE_SEP`]. `x` starts a hex
/// color on newer clients.
pub const ALL_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Replaces `marker` with [`CODE_SEP`] whenever it is followed by a valid
/// code character. The code character is lowercased. A marker followed by
/// anything else is left as-is.
pub fn translate_codes(marker: char, text: &str) -> String {
  let mut chars: Vec<char> = text.chars().collect();
  for i in 0..chars.len().saturating_sub(1) {
    if chars[i] == marker && ALL_CODES.contains(chars[i + 1]) {
      chars[i] = CODE_SEP;
      chars[i + 1] = chars[i + 1].to_ascii_lowercase();
    }
  }
  chars.into_iter().collect()
}
