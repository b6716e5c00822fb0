//! Playbill - renders music playback state into chat display panels.
//!
//! Given a read-only snapshot of the playback engine ([`PlaybackState`]),
//! this crate produces platform-neutral [`DisplayPanel`] value objects for
//! the "now playing" view and the paginated queue view. A thin adapter on
//! the chat side translates panels into the platform's rich message type;
//! nothing in here depends on any chat library.
//!
//! All rendering is synchronous and pure: panels are built fresh on every
//! call, inputs are never mutated, and no I/O happens outside of the
//! optional [`config`] file helpers.

pub mod config;
pub mod error;
pub mod model;
pub mod panel;
pub mod render;
pub mod util;

pub use config::Config;
pub use error::{PanelError, Result};
pub use model::{MediaSource, PlaybackState, PlaybackStatus, Playlist, QueuedTrack};
pub use panel::{ColorTag, DisplayPanel, PanelField};
pub use render::{QueueSummary, now_playing_panel, queue_panel, song_title, status_line};
