//! 改行境界による行数カウント
//!
//! The text is segmented with the Unicode Line Breaking Algorithm (UAX #14),
//! the rule set layout engines use to find legal wrap points. Every break
//! opportunity is visited, but only those that directly follow a `\n` are
//! real line terminations; the rest are word-wrap points.
//!
//! The rule set is fixed by `unicode-linebreak` and does not depend on the
//! process locale, so counts are stable across machines.

use unicode_linebreak::linebreaks;

use bard_lines_shared_kernel::LineCount;

/// Count the `\n`-terminated lines of `text`.
///
/// A final line without a trailing `\n` is not counted, and neither are
/// lines ended by CR alone, NEL, U+2028 or U+2029.
///
/// ```
/// use bard_lines_domain::count_lines;
///
/// assert_eq!(count_lines("a\nb\nc\n").value(), 3);
/// assert_eq!(count_lines("a\nb\nc").value(), 2);
/// assert_eq!(count_lines("").value(), 0);
/// ```
pub fn count_lines(text: &str) -> LineCount {
    let mut count = LineCount::zero();

    // Positions are byte offsets on char boundaries, strictly increasing.
    for (end, _) in linebreaks(text) {
        if ends_with_line_feed(text, end) {
            count.increment();
        }
    }

    count
}

#[inline]
fn ends_with_line_feed(text: &str, end: usize) -> bool {
    end > 0 && text[..end].ends_with('\n')
}
