use colored::Color;

pub const HEADER: Color = Color::BrightWhite;
pub const ADDRESS: Color = Color::Cyan;
pub const NAME: Color = Color::BrightBlue;

/// Usage at or above this percentage is highlighted.
pub const WARNING_PERCENT: f64 = 80.0;
pub const CRITICAL_PERCENT: f64 = 90.0;

pub const USAGE_OK: Color = Color::Green;
pub const USAGE_WARNING: Color = Color::Yellow;
pub const USAGE_CRITICAL: Color = Color::Red;

pub fn usage(percent: f64) -> Color {
    if percent >= CRITICAL_PERCENT {
        USAGE_CRITICAL
    } else if percent >= WARNING_PERCENT {
        USAGE_WARNING
    } else {
        USAGE_OK
    }
}
