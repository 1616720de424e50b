//! Casing of a single underscore-delimited segment.

/// Scanner state while walking a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Characters are copied as title casing left them.
    CopyThrough,
    /// The previous character was an ASCII digit.
    AfterDigit,
}

/// Title-cases one segment: the first character is uppercased and the rest
/// lowercased, except that a lowercase letter directly after a digit is
/// uppercased (`point3d` -> `Point3D`).
///
/// Only ASCII letters change case, so the result has exactly as many
/// characters as the input.
pub fn title_case_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut state = ScanState::CopyThrough;

    for (i, ch) in segment.chars().enumerate() {
        let cased = if i == 0 {
            ch.to_ascii_uppercase()
        } else {
            ch.to_ascii_lowercase()
        };

        let cased = match state {
            ScanState::AfterDigit if cased.is_ascii_lowercase() => cased.to_ascii_uppercase(),
            _ => cased,
        };

        state = if cased.is_ascii_digit() {
            ScanState::AfterDigit
        } else {
            ScanState::CopyThrough
        };
        out.push(cased);
    }

    out
}
