pub mod csv;
pub mod hist;
pub mod json;
pub mod text;

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

/// Bin keys are quantized to the bin width, so two decimals always suffice;
/// a trailing zero is trimmed to match the exporter's historical key text
/// ("0.22", "-0.4", "0.0").
pub fn format_bin_key(v: f64) -> String {
    let s = format!("{:.2}", v);
    match s.strip_suffix('0') {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}
