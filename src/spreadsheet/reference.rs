//! Conversions between zero-based grid indexes and Excel-style A1 references.

use regex::Regex;

/// Converts Excel-style column letters to a 0-based column index:
/// A = 0, B = 1, ..., Z = 25, AA = 26, AB = 27, ...
///
/// Letters are case-insensitive. Returns None for empty or non-alphabetic input.
pub fn col_to_index(letters: &str) -> Option<usize> {
    if letters.is_empty() || !letters.chars().all(|letter| letter.is_ascii_alphabetic()) {
        return None;
    }
    letters
        .to_ascii_uppercase()
        .chars()
        .map(|letter| letter as usize - 'A' as usize + 1)
        .try_fold(0usize, |index, digit| index.checked_mul(26)?.checked_add(digit))
        .map(|column| column - 1)
}

/// Converts a 1-based row number to a 0-based row index.
/// Returns None for row "0" or anything that is not a number.
pub fn row_to_index(number: &str) -> Option<usize> {
    number
        .parse()
        .ok()
        .filter(|row| *row > 0)
        .map(|row: usize| row - 1)
}

/// Converts a 0-based column index to Excel-style column letters.
pub fn index_to_col(col: usize) -> String {
    let mut letters = Vec::new();
    let mut number = col;
    loop {
        letters.push((b'A' + (number % 26) as u8) as char);
        if number < 26 {
            break;
        }
        number = number / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Returns the Excel-style cell reference (e.g., "A1", "B2") for a 0-based position.
pub fn index_to_reference(row: usize, col: usize) -> String {
    format!("{}{}", index_to_col(col), row as u128 + 1)
}

/// Parses a single-cell reference such as "C7" or "$C$7" into a 0-based (row, col) pair.
pub fn reference_to_index(reference: &str) -> Option<(usize, usize)> {
    let pattern = Regex::new(r"^\$?([A-Za-z]+)\$?(\d+)$").expect("Hardcode regex pattern");
    let captures = pattern.captures(reference.trim())?;
    let col = col_to_index(captures.get(1)?.as_str())?;
    let row = row_to_index(captures.get(2)?.as_str())?;
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn column_letters() {
        assert_eq!(col_to_index("A"), Some(0));
        assert_eq!(col_to_index("z"), Some(25));
        assert_eq!(col_to_index("AA"), Some(26));
        assert_eq!(col_to_index("AB"), Some(27));
        assert_eq!(col_to_index("XFD"), Some(16_383));
        assert_eq!(col_to_index(""), None);
        assert_eq!(col_to_index("A1"), None);
    }

    #[test]
    fn row_numbers() {
        assert_eq!(row_to_index("1"), Some(0));
        assert_eq!(row_to_index("42"), Some(41));
        assert_eq!(row_to_index("0"), None);
        assert_eq!(row_to_index(""), None);
    }

    #[test]
    fn column_index_to_letters() {
        assert_eq!(index_to_col(0), "A");
        assert_eq!(index_to_col(25), "Z");
        assert_eq!(index_to_col(26), "AA");
        assert_eq!(index_to_col(701), "ZZ");
        assert_eq!(index_to_col(702), "AAA");
        assert_eq!(index_to_reference(2, 1), "B3");
    }

    #[test]
    fn largest_index_to_reference() {
        let letters = index_to_col(usize::MAX);

        assert!(!letters.is_empty());
        assert!(letters.chars().all(|letter| letter.is_ascii_uppercase()));
        assert_eq!(
            index_to_reference(usize::MAX, 0),
            format!("A{}", usize::MAX as u128 + 1)
        );
    }

    #[test]
    fn single_cell_reference() {
        assert_eq!(reference_to_index("C7"), Some((6, 2)));
        assert_eq!(reference_to_index("$c$7"), Some((6, 2)));
        assert_eq!(reference_to_index(" A1 "), Some((0, 0)));
        assert_eq!(reference_to_index("A0"), None);
        assert_eq!(reference_to_index("7C"), None);
        assert_eq!(reference_to_index("A1:B2"), None);
    }
}
