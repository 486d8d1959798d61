use crate::rules::dictionary::Dictionary;

/// Base time bonus for a minimum-length word.
pub const BASE_BONUS: u32 = 10;
/// Extra seconds per letter beyond three.
pub const BONUS_PER_EXTRA_LETTER: u32 = 5;

/// Seconds awarded for an accepted word of `len` letters.
pub fn time_bonus(len: usize) -> u32 {
    let extra = len.saturating_sub(3) as u32;
    BASE_BONUS + BONUS_PER_EXTRA_LETTER * extra
}

/// Why a candidate word was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort { min: usize },
    NotInDictionary,
}

impl Rejection {
    /// Player-facing explanation.
    pub fn message(self) -> String {
        match self {
            Rejection::TooShort { min } => format!("Words must be at least {min} letters"),
            Rejection::NotInDictionary => "Not a valid word".to_string(),
        }
    }
}

/// Check a candidate word against the length floor and the dictionary.
/// Returns the time bonus on success.
pub fn validate(word: &str, min_len: usize, dictionary: &Dictionary) -> Result<u32, Rejection> {
    let len = word.chars().count();
    if len < min_len {
        return Err(Rejection::TooShort { min: min_len });
    }
    if !dictionary.contains(word) {
        return Err(Rejection::NotInDictionary);
    }
    Ok(time_bonus(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_formula() {
        assert_eq!(time_bonus(3), 10);
        assert_eq!(time_bonus(4), 15);
        assert_eq!(time_bonus(9), 40);
    }

    #[test]
    fn accepts_dictionary_words() {
        let dict = Dictionary::from_word_list("cat\nlabyrinth");
        assert_eq!(validate("CAT", 3, &dict), Ok(10));
        assert_eq!(validate("LABYRINTH", 3, &dict), Ok(40));
    }

    #[test]
    fn rejects_short_words_first() {
        let dict = Dictionary::from_word_list("cat");
        assert_eq!(validate("CAT", 4, &dict), Err(Rejection::TooShort { min: 4 }));
        assert_eq!(Rejection::TooShort { min: 4 }.message(), "Words must be at least 4 letters");
    }

    #[test]
    fn empty_dictionary_rejects_everything() {
        let dict = Dictionary::empty();
        assert_eq!(validate("CAT", 3, &dict), Err(Rejection::NotInDictionary));
    }
}
