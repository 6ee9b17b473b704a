//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Peg};
use colored::{ColoredString, Colorize};

/// Colour a peg glyph the way the peg looks on the board
#[must_use]
pub fn peg_glyph(peg: Peg) -> ColoredString {
    let glyph = "●";
    match peg.code() {
        'r' => glyph.red(),
        'g' => glyph.green(),
        'b' => glyph.blue(),
        'c' => glyph.cyan(),
        'm' => glyph.magenta(),
        'y' => glyph.yellow(),
        'o' => glyph.truecolor(255, 140, 0),
        _ => glyph.truecolor(128, 0, 160),
    }
}

/// Format a pattern as coloured pegs followed by its codes
#[must_use]
pub fn format_pattern(pattern: &Pattern) -> String {
    let pegs: Vec<String> = pattern.pegs().iter().map(|&p| peg_glyph(p).to_string()).collect();
    format!("{} {}", pegs.join(" "), pattern.to_string().bold())
}

/// Format feedback as key pegs, padded with empty holes to the pattern length
#[must_use]
pub fn feedback_pegs(feedback: Feedback, pattern_length: usize) -> String {
    let holes = pattern_length.saturating_sub(feedback.len());
    let mut result = String::with_capacity(pattern_length * 3);

    result.push_str(&"●".repeat(feedback.exact()));
    result.push_str(&"○".repeat(feedback.partial()));
    result.push_str(&"·".repeat(holes));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn feedback_pegs_mixed() {
        assert_eq!(feedback_pegs(Feedback::new(2, 1), 4), "●●○·");
    }

    #[test]
    fn feedback_pegs_empty() {
        assert_eq!(feedback_pegs(Feedback::default(), 5), "·····");
    }

    #[test]
    fn feedback_pegs_perfect() {
        assert_eq!(feedback_pegs(Feedback::perfect(4), 4), "●●●●");
    }

    #[test]
    fn pattern_shows_codes() {
        let pattern = Pattern::parse("rgby", &GameConfig::default()).unwrap();
        let text = format_pattern(&pattern);
        assert!(text.contains("rgby"));
        assert_eq!(text.matches('●').count(), 4);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
