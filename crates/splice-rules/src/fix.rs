//! Applying fixes to source text.

use std::ops::Range;

use thiserror::Error;

use crate::finding::Fix;

/// Errors raised when a fix cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FixError {
    /// The fix range lies outside the source.
    #[error("fix range {start}..{end} is outside the source of length {len}")]
    OutOfBounds {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
        /// Source length.
        len: usize,
    },

    /// The fix range splits a UTF-8 character.
    #[error("fix range {start}..{end} is not on a UTF-8 boundary")]
    NotCharBoundary {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
    },
}

impl FixError {
    const fn out_of_bounds(range: &Range<usize>, len: usize) -> Self {
        Self::OutOfBounds {
            start: range.start,
            end: range.end,
            len,
        }
    }

    const fn not_char_boundary(range: &Range<usize>) -> Self {
        Self::NotCharBoundary {
            start: range.start,
            end: range.end,
        }
    }
}

/// Source text after fixes were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSource {
    output: String,
    applied: usize,
    skipped: usize,
}

impl FixedSource {
    /// Returns the fixed text.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the result and returns the fixed text.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Returns the number of fixes applied.
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.applied
    }

    /// Returns the number of fixes skipped because they overlapped an
    /// earlier one.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns whether the text changed.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.applied > 0
    }
}

/// Applies `fixes` to `source`.
///
/// Fixes are taken in source order; one that overlaps an already accepted
/// fix is skipped. Accepted fixes are applied from the end of the text so
/// earlier offsets stay valid.
///
/// # Errors
///
/// Returns [`FixError`] if a fix range is out of bounds or not on a
/// character boundary. No partial result is returned.
pub fn apply_fixes<'a, I>(source: &str, fixes: I) -> Result<FixedSource, FixError>
where
    I: IntoIterator<Item = &'a Fix>,
{
    let mut ordered: Vec<&Fix> = fixes.into_iter().collect();
    ordered.sort_by_key(|fix| (fix.range.start, fix.range.end));

    let mut accepted: Vec<&Fix> = Vec::with_capacity(ordered.len());
    let mut skipped = 0_usize;
    for fix in ordered {
        let range = &fix.range;
        if range.start > range.end || range.end > source.len() {
            return Err(FixError::out_of_bounds(range, source.len()));
        }
        if !source.is_char_boundary(range.start) || !source.is_char_boundary(range.end) {
            return Err(FixError::not_char_boundary(range));
        }
        if accepted
            .last()
            .is_some_and(|previous| previous.range.end > range.start)
        {
            skipped = skipped.saturating_add(1);
            continue;
        }
        accepted.push(fix);
    }

    let mut output = source.to_owned();
    for fix in accepted.iter().rev() {
        output.replace_range(fix.range.clone(), &fix.replacement);
    }

    Ok(FixedSource {
        output,
        applied: accepted.len(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::{FixError, apply_fixes};
    use crate::finding::Fix;

    #[test]
    fn applies_fixes_from_the_end() {
        let fixes = [Fix::new(0..1, "AA"), Fix::new(4..5, "E")];
        let fixed = apply_fixes("abcde", &fixes).expect("apply");
        assert_eq!(fixed.output(), "AAbcdE");
        assert_eq!(fixed.applied(), 2);
    }

    #[test]
    fn overlapping_fixes_are_skipped() {
        let fixes = [Fix::new(1..4, "X"), Fix::new(2..3, "Y")];
        let fixed = apply_fixes("abcde", &fixes).expect("apply");
        assert_eq!(fixed.output(), "aXe");
        assert_eq!(fixed.skipped(), 1);
    }

    #[test]
    fn adjacent_fixes_both_apply() {
        let fixes = [Fix::new(2..4, "Y"), Fix::new(0..2, "X")];
        let fixed = apply_fixes("abcd", &fixes).expect("apply");
        assert_eq!(fixed.output(), "XY");
    }

    #[test]
    fn rejects_ranges_outside_the_source() {
        let fixes = [Fix::new(2..9, "x")];
        assert_eq!(
            apply_fixes("abc", &fixes),
            Err(FixError::OutOfBounds {
                start: 2,
                end: 9,
                len: 3
            })
        );
    }

    #[test]
    fn rejects_ranges_inside_a_character() {
        let fixes = [Fix::new(1..2, "x")];
        assert_eq!(
            apply_fixes("é", &fixes),
            Err(FixError::NotCharBoundary { start: 1, end: 2 })
        );
    }

    #[test]
    fn no_fixes_leave_the_source_alone() {
        let fixed = apply_fixes("abc", &[]).expect("apply");
        assert!(!fixed.has_changes());
        assert_eq!(fixed.into_output(), "abc");
    }
}
