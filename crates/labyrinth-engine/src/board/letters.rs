use crate::core::rng::Rng;

/// Frequent English letters, drawn 40% of the time.
pub const COMMON_LETTERS: &[u8] = b"ETAOINSHRDLU";
/// Every consonant, drawn 30% of the time.
pub const CONSONANTS: &[u8] = b"BCDFGHJKLMNPQRSTVWXYZ";
/// Vowels, drawn 30% of the time.
pub const VOWELS: &[u8] = b"AEIOU";

/// Draw one letter from the weighted pools. Draws are independent; a single
/// grid is not rebalanced toward the target mix.
pub fn generate_letter(rng: &mut Rng) -> char {
    let roll = rng.next_int(100);
    let pool = if roll < 40 {
        COMMON_LETTERS
    } else if roll < 70 {
        CONSONANTS
    } else {
        VOWELS
    };
    rng.pick(pool) as char
}

/// Whether `letter` can ever appear on the board.
pub fn is_board_letter(letter: char) -> bool {
    letter.is_ascii()
        && [COMMON_LETTERS, CONSONANTS, VOWELS]
            .iter()
            .any(|pool| pool.contains(&(letter as u8)))
}
