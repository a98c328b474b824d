use crate::model::scores::ScoredUtterance;
use crate::report::format_f64_2;

/// Renders the extremes report: the negative block then the positive block,
/// both ascending by score, then the total run time. Callers pass both
/// sequences already in ascending order.
pub fn render_extremes_text(
    negative: &[ScoredUtterance],
    positive: &[ScoredUtterance],
    elapsed_secs: f64,
) -> String {
    let mut out = String::new();
    for item in negative {
        out.push_str(&format!(
            "Negative, {}:\n {}\n",
            format_f64_2(item.score),
            item.text
        ));
    }
    out.push('\n');
    for item in positive {
        out.push_str(&format!(
            "Positive, {}:\n {}\n",
            format_f64_2(item.score),
            item.text
        ));
    }
    out.push_str(&format!(
        "\n\nTotal execution time: {} seconds\n",
        format_f64_2(elapsed_secs)
    ));
    out
}
