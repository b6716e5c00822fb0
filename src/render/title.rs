//! Song title rendering.
//!
//! Titles render as markdown links against the canonical watch URL. Source
//! titles tend to arrive with `[Official Video]`-style annotations and no
//! length discipline, so queue rows clean and shorten them; live streams
//! skip all of that because their URLs are already canonical and their
//! titles are shown verbatim.

use lazy_regex::regex;

use crate::config::Config;
use crate::model::{MediaSource, QueuedTrack};
use crate::util::text::ellipsize;
use crate::util::video_id::video_id;

const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";
const VIDEO_ID_LEN: usize = 11;

/// Render a track title as a single-line markdown link.
///
/// With `shorten` set, the cleaned title is cut to the configured budget:
/// the narrow one for all-ASCII titles, the wide-glyph one otherwise.
pub fn song_title(track: &QueuedTrack, shorten: bool, config: &Config) -> String {
    if track.source == MediaSource::LiveStream {
        return format!("[{}]({})", track.title, track.url);
    }

    let clean_title = regex!(r"\[.*\]").replacen(&track.title, 1, "");
    let clean_title = clean_title.trim();

    let title = if shorten {
        ellipsize(clean_title, title_budget(clean_title, config))
    } else {
        clean_title.to_string()
    };

    // A bare 11-character url is already the id
    let id = if track.url.len() == VIDEO_ID_LEN {
        track.url.clone()
    } else {
        video_id(&track.url).unwrap_or_default()
    };

    if track.offset == 0 {
        format!("[{title}]({WATCH_URL_BASE}{id})")
    } else {
        format!("[{title}]({WATCH_URL_BASE}{id}&t={})", track.offset)
    }
}

/// Character budget for a title, based on glyph width.
///
/// Anything outside 7-bit ASCII is assumed to render wide, which roughly
/// halves how much fits on a queue row.
fn title_budget(title: &str, config: &Config) -> usize {
    if title.is_ascii() {
        config.title_limit
    } else {
        config.wide_title_limit
    }
}
