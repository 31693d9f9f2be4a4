use regex::Regex;
use std::sync::LazyLock;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("leading integer pattern"));

/// Numeric fee from free-form currency text, e.g. `"₹ 500"` -> `500.0`.
///
/// Everything except ASCII digits and `.` is dropped, then the longest leading
/// decimal number is parsed. Anything unparseable is `0.0`.
pub fn parse_fee(fee: &str) -> f64 {
    let stripped: String = fee
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let number = match stripped.match_indices('.').nth(1) {
        Some((second_dot, _)) => &stripped[..second_dot],
        None => stripped.as_str(),
    };

    number.parse::<f64>().unwrap_or(0.0)
}

/// Years of experience from text such as `"13 Years of experience"`.
///
/// Takes the leading integer. Unparseable or negative values are `0`.
pub fn parse_experience(experience: &str) -> u32 {
    let Some(digits) = LEADING_INTEGER
        .captures(experience)
        .and_then(|cap| cap.get(1))
    else {
        return 0;
    };

    let digits = digits.as_str();
    if digits.starts_with('-') {
        return 0;
    }

    let digits = digits.trim_start_matches('+');
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Fee used for sorting; missing fees count as zero.
pub fn fee_value(fee: Option<&str>) -> f64 {
    fee.map(parse_fee).unwrap_or(0.0)
}

/// Experience used for sorting; missing experience counts as zero.
pub fn experience_value(experience: Option<&str>) -> u32 {
    experience.map(parse_experience).unwrap_or(0)
}
