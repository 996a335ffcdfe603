/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Overtime color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_overtime(minutes: i64) -> &'static str {
    if minutes > 0 {
        GREEN
    } else if minutes < 0 {
        RED
    } else {
        RESET
    }
}

/// Comment color in the day listing: unknown days stand out,
/// weekends and holidays fade into the background.
pub fn color_for_comment(comment: &str) -> &'static str {
    if comment == "?" {
        YELLOW
    } else if comment == "#Saturday" || comment == "#Sunday" {
        GREY
    } else if comment.starts_with('#') {
        MAGENTA
    } else {
        RESET
    }
}
