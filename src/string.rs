#[derive(PartialEq, Clone, Copy)]
enum CharType {
    Whitespace,
    Numeric,
    Punctuation,
    Alphabetic
}

impl CharType {
    fn from(c: char) -> CharType {
        if c.is_whitespace() {
            CharType::Whitespace
        } else if c.is_numeric() {
            CharType::Numeric
        } else if c.is_alphabetic() {
            CharType::Alphabetic
        } else {
            CharType::Punctuation
        }
    }
}

/// Cursor position at the start of the word before `idx` (character index)
pub fn get_word_start(s: &str, idx: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut i = idx.min(chars.len());

    // skip whitespace directly before the cursor
    while i > 0 && CharType::from(chars[i - 1]) == CharType::Whitespace {
        i -= 1;
    }
    if i == 0 {
        return 0;
    }

    let word_type = CharType::from(chars[i - 1]);
    while i > 0 && CharType::from(chars[i - 1]) == word_type {
        i -= 1;
    }
    i
}

/// Cursor position just past the end of the word at or after `idx` (character index)
pub fn get_word_end(s: &str, idx: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut i = idx.min(chars.len());

    while i < chars.len() && CharType::from(chars[i]) == CharType::Whitespace {
        i += 1;
    }
    if i == chars.len() {
        return i;
    }

    let word_type = CharType::from(chars[i]);
    while i < chars.len() && CharType::from(chars[i]) == word_type {
        i += 1;
    }
    i
}
