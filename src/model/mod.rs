//! Playback snapshot types.
//!
//! These mirror what the playback engine reports: the track currently
//! playing, the upcoming queue, and the transport status. The renderer
//! treats all of it as read-only; a snapshot is taken by the caller and
//! handed in by reference.

/// Where a queued track's audio comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource {
    /// A regular hosted video with a canonical 11-character id
    Standard,
    /// A live stream; its URL is already canonical and its duration is unbounded
    LiveStream,
}

/// Current transport status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    Playing,
    #[default]
    Paused,
}

/// The playlist a track was queued from, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub title: String,
}

/// One entry in the playback engine's queue.
#[derive(Debug, Clone)]
pub struct QueuedTrack {
    /// Track title as reported by the source
    pub title: String,
    /// Full source URL, or a bare 11-character video id
    pub url: String,
    /// Seconds into the track this entry starts at
    pub offset: u64,
    pub source: MediaSource,
    /// Track length in seconds (engine-reported sentinel for live streams)
    pub length: f64,
    pub is_live: bool,
    pub thumbnail_url: Option<String>,
    pub artist: String,
    pub playlist: Option<Playlist>,
    /// Opaque id of the user who queued this track
    pub requested_by: String,
}

/// A read-only snapshot of the playback engine.
///
/// `queue` holds the upcoming tracks in play order; the current track is
/// not part of it.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    pub status: PlaybackStatus,
    /// Playback position in seconds; only meaningful while a track is current
    pub position: f64,
    pub current_track: Option<QueuedTrack>,
    pub queue: Vec<QueuedTrack>,
}

impl PlaybackState {
    /// Get the currently playing track, if any.
    pub fn current(&self) -> Option<&QueuedTrack> {
        self.current_track.as_ref()
    }

    /// Number of upcoming tracks (current track excluded).
    pub fn queue_size(&self) -> usize {
        self.queue.len()
    }
}
