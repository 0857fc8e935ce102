/// Display formatting for assessment values
use crate::types::{CareerMatchLevel, Priority, SkillLevel};
use chrono::{DateTime, Utc};

pub const CURRENCY_SYMBOL: &str = "₹";

const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

pub fn format_skill_level(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Beginner => "Beginner",
        SkillLevel::Intermediate => "Intermediate",
        SkillLevel::Advanced => "Advanced",
        SkillLevel::Expert => "Expert",
    }
}

pub fn format_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "High Priority",
        Priority::Medium => "Medium Priority",
        Priority::Low => "Low Priority",
    }
}

pub fn format_career_match(level: CareerMatchLevel) -> &'static str {
    match level {
        CareerMatchLevel::Excellent => "Excellent Match",
        CareerMatchLevel::Good => "Good Match",
        CareerMatchLevel::Fair => "Fair Match",
        CareerMatchLevel::Poor => "Poor Match",
    }
}

/// Renders a duration given in weeks.
///
/// Below four weeks the value is shown in weeks, otherwise it is rounded up
/// to whole months of four weeks. `3` gives "3 weeks" while `4` gives
/// "1 month"; the jump is intentional and kept for compatibility.
pub fn format_timeframe(weeks: u32) -> String {
    if weeks < 4 {
        let suffix = if weeks == 1 { "" } else { "s" };
        return format!("{} week{}", weeks, suffix);
    }

    let months = weeks.div_ceil(4);
    let suffix = if months > 1 { "s" } else { "" };
    format!("{} month{}", months, suffix)
}

/// Abbreviates both bounds of a salary range, e.g. `₹50K - ₹12.0L`.
pub fn format_salary_range(min: f64, max: f64) -> String {
    format!(
        "{}{} - {}{}",
        CURRENCY_SYMBOL,
        abbreviate_amount(min),
        CURRENCY_SYMBOL,
        abbreviate_amount(max)
    )
}

fn abbreviate_amount(value: f64) -> String {
    if value >= LAKH {
        format!("{}L", to_fixed(value / LAKH, 1))
    } else {
        format!("{}K", to_fixed(value / THOUSAND, 0))
    }
}

/// Rounds the exact binary value to `digits` decimals. Only an exact tie
/// goes away from zero, so 1.15 (stored as 1.1499...) gives "1.1" and
/// 1.25 gives "1.3".
fn to_fixed(value: f64, digits: usize) -> String {
    const EXACT: usize = 64;
    let expanded = format!("{:.*}", digits + EXACT, value);
    let tail = &expanded[expanded.len() - EXACT..];

    if tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0') {
        let half_step = 0.5 * 10f64.powi(-(digits as i32));
        format!("{:.*}", digits, value + half_step.copysign(value))
    } else {
        format!("{:.*}", digits, value)
    }
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Confidence in `0.0..=1.0` as a whole percentage.
pub fn format_confidence(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

pub fn format_processing_time(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{}s", seconds.round() as i64)
    } else if seconds < 3600.0 {
        format!("{}m", (seconds / 60.0).round() as i64)
    } else {
        format!("{}h", (seconds / 3600.0).round() as i64)
    }
}

pub fn format_completed_at(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y, %I:%M %p").to_string()
}
