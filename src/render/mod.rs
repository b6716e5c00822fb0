//! Panel renderers.
//!
//! Two public panels (now-playing and paginated queue) sit on top of the
//! title/status/summary helpers. Everything here is pure: a snapshot goes
//! in, strings and panels come out.

pub mod now_playing;
pub mod queue;
pub mod status;
pub mod title;

pub use now_playing::now_playing_panel;
pub use queue::{QueueSummary, queue_panel};
pub use status::status_line;
pub use title::song_title;
