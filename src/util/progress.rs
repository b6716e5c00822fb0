//! Progress indicator rendering.

/// Render a fixed-width progress bar with a marker at the current position.
///
/// `fraction` is clamped to `[0, 1]`; NaN counts as no progress. The
/// output is always exactly `width` glyphs.
pub fn progress_bar(width: usize, fraction: f64) -> String {
    if width == 0 {
        return String::new();
    }

    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let marker = ((width as f64 * fraction) as usize).min(width - 1);

    (0..width)
        .map(|i| if i == marker { "🔘" } else { "▬" })
        .collect()
}
