use crate::model::scores::ScoredUtterance;
use crate::report::format_f64_2;

pub fn render_scores_csv(scored: &[ScoredUtterance]) -> String {
    let mut out = String::new();
    for item in scored {
        out.push_str(&item.id);
        out.push(',');
        out.push_str(&format_f64_2(item.score));
        out.push('\n');
    }
    out
}
