/// Rendered in place of values that cannot be displayed (NaN, infinities).
pub const VALUE_PLACEHOLDER: &str = "****";

/// Category labels longer than this are hard-wrapped onto a second line.
pub const CATEGORY_LABEL_WRAP_CHARS: usize = 11;

const ABBREVIATIONS: [(f64, &str); 3] = [
    (1_000_000_000.0, "b"),
    (1_000_000.0, "m"),
    (1_000.0, "k"),
];

/// Formats a value-axis tick.
///
/// Values strictly above 1e9/1e6/1e3 are divided and rounded to whole units
/// with a `b`/`m`/`k` suffix. Anything else is printed as-is.
#[must_use]
pub fn format_abbreviated(value: f64) -> String {
    if !value.is_finite() {
        return VALUE_PLACEHOLDER.to_owned();
    }
    for (threshold, suffix) in ABBREVIATIONS {
        if value > threshold {
            return format!("{}{suffix}", (value / threshold).round());
        }
    }
    value.to_string()
}

/// Inserts a line break after the first 11 characters of long category labels.
#[must_use]
pub fn wrap_category_label(label: &str) -> String {
    match label.char_indices().nth(CATEGORY_LABEL_WRAP_CHARS) {
        Some((split_at, _)) => format!("{}\n{}", &label[..split_at], &label[split_at..]),
        None => label.to_owned(),
    }
}
