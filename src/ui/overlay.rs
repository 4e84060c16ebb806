//! The shared image-preview overlay. One instance serves every gallery on
//! the page; opening it again just overwrites what it shows.

use crate::catalog::ProductRecord;

#[derive(Debug, Clone, Default)]
pub struct Overlay {
    open: bool,
    image_ref: String,
    caption: String,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the overlay for a product. Also the transition from Open to
    /// Open: content is overwritten, nothing is queued.
    pub fn open(&mut self, record: &ProductRecord) {
        self.image_ref = record.image_ref.clone();
        self.caption = format!("{} - {}", record.name, record.description);
        self.open = true;
    }

    /// Hide the overlay. A no-op when already closed. Content is left
    /// stale until the next open; nothing reads it while hidden.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}
