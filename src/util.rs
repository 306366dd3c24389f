use std::fmt;

/// Zero-based cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta, returning None if either coordinate would go negative
    pub fn offset(&self, row_delta: isize, col_delta: isize) -> Option<CellRef> {
        let row = self.row.checked_add_signed(row_delta)?;
        let col = self.col.checked_add_signed(col_delta)?;
        Some(CellRef { row, col })
    }
}

/// One-cell step on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, col) delta of a single step
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl CellRef {
    pub fn step(&self, direction: Direction) -> Option<CellRef> {
        let (dr, dc) = direction.delta();
        self.offset(dr, dc)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", col_label(self.col), self.row + 1)
    }
}

/// Convert a column index to spreadsheet letters (0 -> A, 25 -> Z, 26 -> AA, etc.)
///
/// Column names have no zero digit, so after each division one is subtracted
/// before the next letter is derived.
pub fn col_label(col: usize) -> String {
    let mut buf = Vec::new();
    let mut i = col as isize;
    while i >= 0 {
        buf.push((b'A' + (i % 26) as u8) as char);
        i = i / 26 - 1;
    }
    buf.into_iter().rev().collect()
}

/// Parse column letters to a 0-indexed column number (A=0, Z=25, AA=26, etc.)
pub fn col_from_label(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut result = 0usize;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
        result = result.checked_mul(26)?.checked_add(digit)?;
    }
    Some(result - 1)
}

/// Parse a cell reference like "A1" or "aa12"
pub fn parse_cell_ref(s: &str) -> Option<CellRef> {
    let s = s.trim();
    let split = s.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = s.split_at(split);

    let col = col_from_label(letters)?;
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None; // Rows are 1-indexed in user notation
    }
    Some(CellRef { row: row - 1, col })
}

// === Character-indexed string helpers ===

pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the character at `char_idx` (or the end of the string)
pub fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub fn insert_char_at(s: &str, char_idx: usize, c: char) -> String {
    let mut out = s.to_string();
    out.insert(byte_index(s, char_idx), c);
    out
}

/// Remove the character at `char_idx`, returning the new string and the removed char
pub fn remove_char_at(s: &str, char_idx: usize) -> Option<(String, char)> {
    if char_idx >= char_count(s) {
        return None;
    }
    let mut out = s.to_string();
    let removed = out.remove(byte_index(s, char_idx));
    Some((out, removed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_label() {
        assert_eq!(col_label(0), "A");
        assert_eq!(col_label(1), "B");
        assert_eq!(col_label(25), "Z");
        assert_eq!(col_label(26), "AA");
        assert_eq!(col_label(27), "AB");
        assert_eq!(col_label(51), "AZ");
        assert_eq!(col_label(52), "BA");
        assert_eq!(col_label(701), "ZZ");
        assert_eq!(col_label(702), "AAA");
    }

    #[test]
    fn test_col_label_injective() {
        let labels: std::collections::HashSet<String> = (0..2000).map(col_label).collect();
        assert_eq!(labels.len(), 2000);
    }

    #[test]
    fn test_col_from_label_inverts_col_label() {
        for col in [0, 1, 25, 26, 27, 51, 52, 701, 702, 18277] {
            assert_eq!(col_from_label(&col_label(col)), Some(col));
        }
        assert_eq!(col_from_label("ab"), Some(27));
        assert_eq!(col_from_label(""), None);
        assert_eq!(col_from_label("A1"), None);
    }

    #[test]
    fn test_parse_cell_ref() {
        assert_eq!(parse_cell_ref("A1"), Some(CellRef::new(0, 0)));
        assert_eq!(parse_cell_ref("B2"), Some(CellRef::new(1, 1)));
        assert_eq!(parse_cell_ref(" aa10 "), Some(CellRef::new(9, 26)));
        assert_eq!(parse_cell_ref("A0"), None);
        assert_eq!(parse_cell_ref("12"), None);
        assert_eq!(parse_cell_ref("A1B"), None);
    }

    #[test]
    fn test_cell_ref_display() {
        assert_eq!(CellRef::new(0, 0).to_string(), "A1");
        assert_eq!(CellRef::new(4, 27).to_string(), "AB5");
    }

    #[test]
    fn test_offset_rejects_negative() {
        assert_eq!(CellRef::new(0, 3).offset(-1, 0), None);
        assert_eq!(CellRef::new(0, 3).offset(1, -1), Some(CellRef::new(1, 2)));
    }

    #[test]
    fn test_char_helpers_are_char_indexed() {
        assert_eq!(insert_char_at("héllo", 2, 'X'), "héXllo");
        assert_eq!(remove_char_at("héllo", 1), Some(("hllo".to_string(), 'é')));
        assert_eq!(remove_char_at("ab", 2), None);
        assert_eq!(byte_index("héllo", 2), 3);
    }
}
