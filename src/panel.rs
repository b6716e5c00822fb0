//! Platform-neutral display panels.
//!
//! A [`DisplayPanel`] is the renderer's entire output: a value object with
//! no identity beyond its content, built fresh per render call and handed
//! off to whatever adapter talks to the chat platform. Keeping platform
//! types out of here is what lets the rendering logic be tested without a
//! live chat connection.

/// Accent color for a panel, mapped to a concrete color by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    /// Playback is running
    Active,
    /// Playback is paused (single-track panel tone)
    Inactive,
    /// Playback is paused (queue panel tone)
    Neutral,
}

/// One labeled value in a panel's field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelField {
    pub label: String,
    pub value: String,
}

impl PanelField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A rendered block of playback state, ready for the envelope adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPanel {
    pub title: String,
    pub color: ColorTag,
    /// Pre-formatted, line-broken text block
    pub description: String,
    pub fields: Vec<PanelField>,
    pub footer: String,
    /// Omitted from the rendered message entirely when `None`
    pub thumbnail_url: Option<String>,
}
