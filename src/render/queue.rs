//! The paginated queue panel.

use crate::config::Config;
use crate::error::{PanelError, Result};
use crate::model::{PlaybackState, PlaybackStatus, QueuedTrack};
use crate::panel::{ColorTag, DisplayPanel, PanelField};
use crate::render::status::status_line;
use crate::render::title::song_title;
use crate::util::time::pretty_time;

/// Aggregate facts about the upcoming queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueSummary {
    pub count: usize,
    pub total_seconds: f64,
}

impl QueueSummary {
    /// Summarize a queue. Live entries contribute whatever length the
    /// engine reports for them; they are not special-cased here.
    pub fn of(queue: &[QueuedTrack]) -> Self {
        Self {
            count: queue.len(),
            total_seconds: queue.iter().map(|track| track.length).sum(),
        }
    }

    /// Display text for the entry count.
    pub fn count_text(&self) -> String {
        match self.count {
            0 => "-".to_string(),
            1 => "1 song".to_string(),
            n => format!("{n} songs"),
        }
    }

    /// Display text for the combined length.
    pub fn total_text(&self) -> String {
        if self.total_seconds > 0.0 {
            pretty_time(self.total_seconds)
        } else {
            "-".to_string()
        }
    }
}

/// Build one page of the queue panel.
///
/// Pages are 1-indexed. The current track occupies a conceptual slot on
/// page one, which is why the page count is computed over `queue + 1`
/// even though the rendered rows only cover the upcoming queue.
///
/// Fails with [`PanelError::EmptyQueue`] when nothing is playing and with
/// [`PanelError::PageOutOfRange`] when `page` is past the last page.
pub fn queue_panel(state: &PlaybackState, page: usize, config: &Config) -> Result<DisplayPanel> {
    let track = state.current().ok_or(PanelError::EmptyQueue)?;

    // A misconfigured page size of 0 would make every page unreachable
    let page_size = config.page_size.max(1);

    let queue_size = state.queue_size();
    let max_page = (queue_size + 1).div_ceil(page_size);
    if page == 0 || page > max_page {
        return Err(PanelError::PageOutOfRange { page, max_page });
    }

    let page_begin = (page - 1) * page_size;
    let page_end = (page_begin + page_size).min(queue_size);

    let rows: Vec<String> = state.queue[page_begin..page_end]
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let number = page_begin + i + 1;
            let duration = if song.is_live {
                "live".to_string()
            } else {
                pretty_time(song.length)
            };
            format!("`{number}.` {} `[{duration}]`", song_title(song, true, config))
        })
        .collect();

    let mut description = format!("**{}**\n", song_title(track, false, config));
    description.push_str(&format!("Requested by: <@{}>\n\n", track.requested_by));
    description.push_str(&format!("{}\n\n", status_line(state, config)));
    if !state.queue.is_empty() {
        description.push_str("**Up next:**\n");
        description.push_str(&rows.join("\n"));
    }

    let summary = QueueSummary::of(&state.queue);

    let (title, color) = match state.status {
        PlaybackStatus::Playing => ("Now Playing", ColorTag::Active),
        PlaybackStatus::Paused => ("Queued songs", ColorTag::Neutral),
    };

    let playlist_title = track
        .playlist
        .as_ref()
        .map(|playlist| format!("({})", playlist.title))
        .unwrap_or_default();

    Ok(DisplayPanel {
        title: title.to_string(),
        color,
        description,
        fields: vec![
            PanelField::new("In queue", summary.count_text()),
            PanelField::new("Total length", summary.total_text()),
            PanelField::new("Page", format!("{page} out of {max_page}")),
        ],
        footer: format!("Source: {} {}", track.artist, playlist_title),
        thumbnail_url: track.thumbnail_url.clone(),
    })
}
