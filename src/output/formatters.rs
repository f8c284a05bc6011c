//! Formatting utilities for terminal output

use crate::core::FeedbackCode;

/// Format a response as emoji squares
#[must_use]
pub fn response_to_emoji(code: &FeedbackCode) -> String {
    use crate::core::Feedback;

    code.clues()
        .iter()
        .map(|clue| match clue {
            Feedback::Match => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
