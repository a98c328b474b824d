use crate::report::{format_bin_key, format_f64_2};

/// Concatenated `(bin,percentage)` pairs, callers supply frequencies already
/// in ascending bin order.
pub fn render_histogram(frequencies: &[(f64, f64)]) -> String {
    let mut out = String::new();
    for &(bin, freq) in frequencies {
        out.push_str(&format!(
            "({},{})",
            format_bin_key(bin),
            format_f64_2(freq * 100.0)
        ));
    }
    out
}

/// Concatenated `(label,percentage)` pairs for the pre-labeled mode; values
/// arrive already scaled to percentages.
pub fn render_labeled(percentages: &[(String, f64)]) -> String {
    let mut out = String::new();
    for (label, pct) in percentages {
        out.push_str(&format!("({},{})", label, format_f64_2(*pct)));
    }
    out
}
