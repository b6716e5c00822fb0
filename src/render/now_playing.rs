//! The single-track "now playing" panel.

use crate::config::Config;
use crate::error::{PanelError, Result};
use crate::model::{PlaybackState, PlaybackStatus};
use crate::panel::{ColorTag, DisplayPanel};
use crate::render::status::status_line;
use crate::render::title::song_title;

/// Build the now-playing panel for the current track.
///
/// Fails with [`PanelError::EmptyPlayback`] when nothing is playing.
pub fn now_playing_panel(state: &PlaybackState, config: &Config) -> Result<DisplayPanel> {
    let track = state.current().ok_or(PanelError::EmptyPlayback)?;

    let (title, color) = match state.status {
        PlaybackStatus::Playing => ("Now Playing", ColorTag::Active),
        PlaybackStatus::Paused => ("Paused", ColorTag::Inactive),
    };

    let description = format!(
        "**{}**\nRequested by: <@{}>\n\n{}",
        song_title(track, false, config),
        track.requested_by,
        status_line(state, config),
    );

    Ok(DisplayPanel {
        title: title.to_string(),
        color,
        description,
        fields: Vec::new(),
        footer: format!("Source: {}", track.artist),
        thumbnail_url: track.thumbnail_url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaSource, QueuedTrack};

    fn make_state(status: PlaybackStatus) -> PlaybackState {
        PlaybackState {
            status,
            position: 30.0,
            current_track: Some(QueuedTrack {
                title: "Test Song".to_string(),
                url: "dQw4w9WgXcQ".to_string(),
                offset: 0,
                source: MediaSource::Standard,
                length: 180.0,
                is_live: false,
                thumbnail_url: Some("https://img.example.com/thumb.jpg".to_string()),
                artist: "Test Artist".to_string(),
                playlist: None,
                requested_by: "42".to_string(),
            }),
            queue: Vec::new(),
        }
    }

    #[test]
    fn test_playing_panel() {
        let panel = now_playing_panel(&make_state(PlaybackStatus::Playing), &Config::default())
            .unwrap();

        assert_eq!(panel.title, "Now Playing");
        assert_eq!(panel.color, ColorTag::Active);
        assert_eq!(panel.footer, "Source: Test Artist");
        assert!(panel.description.starts_with(
            "**[Test Song](https://www.youtube.com/watch?v=dQw4w9WgXcQ)**\nRequested by: <@42>\n\n"
        ));
        assert!(panel.fields.is_empty());
    }

    #[test]
    fn test_paused_panel() {
        let panel = now_playing_panel(&make_state(PlaybackStatus::Paused), &Config::default())
            .unwrap();

        assert_eq!(panel.title, "Paused");
        assert_eq!(panel.color, ColorTag::Inactive);
    }

    #[test]
    fn test_thumbnail_passes_through() {
        let mut state = make_state(PlaybackStatus::Playing);
        let panel = now_playing_panel(&state, &Config::default()).unwrap();
        assert_eq!(
            panel.thumbnail_url.as_deref(),
            Some("https://img.example.com/thumb.jpg")
        );

        state.current_track.as_mut().unwrap().thumbnail_url = None;
        let panel = now_playing_panel(&state, &Config::default()).unwrap();
        assert_eq!(panel.thumbnail_url, None);
    }

    #[test]
    fn test_no_current_track_fails() {
        let state = PlaybackState::default();
        assert_eq!(
            now_playing_panel(&state, &Config::default()),
            Err(PanelError::EmptyPlayback)
        );
    }
}
