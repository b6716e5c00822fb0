//! Playback status line rendering.

use crate::config::Config;
use crate::model::{PlaybackState, PlaybackStatus};
use crate::util::progress::progress_bar;
use crate::util::time::pretty_time;

/// Render the transport line: control glyph, progress bar, elapsed time.
///
/// The glyph shows the next available action (stop while playing, play
/// while paused), not the current state. Live tracks have no meaningful
/// elapsed time, so they get a `live` marker instead. Returns an empty
/// string when nothing is playing.
pub fn status_line(state: &PlaybackState, config: &Config) -> String {
    let Some(track) = state.current() else {
        return String::new();
    };

    let button = match state.status {
        PlaybackStatus::Playing => "⏹️",
        PlaybackStatus::Paused => "▶️",
    };

    let fraction = if track.length > 0.0 {
        state.position / track.length
    } else {
        0.0
    };
    let bar = progress_bar(config.progress_bar_width, fraction);

    let elapsed = if track.is_live {
        "live".to_string()
    } else {
        format!("{}/{}", pretty_time(state.position), pretty_time(track.length))
    };

    format!("{button} {bar} `[{elapsed}]` 🔉")
}
