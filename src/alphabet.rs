//! Letter codes.
//!
//! Every uppercase letter maps to a single bit of a [`LetterMask`]: bit 0 is
//! `A`, bit 25 is `Z`. Sets of letters are the bitwise OR of their codes.

/// A set of letters, one bit per letter of the alphabet.
pub type LetterMask = u32;

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// The mask containing every letter.
pub const ALL_LETTERS: LetterMask = (1 << ALPHABET_SIZE) - 1;

/// Returns the code for an uppercase ASCII letter, or `None` for anything else.
pub fn encode(letter: char) -> Option<LetterMask> {
    if letter.is_ascii_uppercase() {
        Some(1 << (letter as u8 - b'A'))
    } else {
        None
    }
}

/// Returns the letter for a single-letter code, or `None` if `code` is not
/// exactly one bit within the alphabet.
pub fn decode(code: LetterMask) -> Option<char> {
    if code.count_ones() != 1 || code & !ALL_LETTERS != 0 {
        return None;
    }
    Some((b'A' + code.trailing_zeros() as u8) as char)
}

/// Renders the letters of a mask in alphabetical order.
pub fn mask_to_string(mask: LetterMask) -> String {
    letters(mask).collect()
}

/// Iterates over the letters of a mask in alphabetical order.
pub fn letters(mask: LetterMask) -> impl Iterator<Item = char> {
    let mut remaining = mask & ALL_LETTERS;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let lowest = remaining & remaining.wrapping_neg();
        remaining &= !lowest;
        decode(lowest)
    })
}
