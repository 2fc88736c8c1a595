pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// `"1 file"`, `"3 files"`.
pub(crate) fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
