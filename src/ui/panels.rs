//! Exclusive panel groups: the services accordion and the about tabs.
//!
//! A group is built from an explicit list of (toggle, body) pairs and
//! keeps at most one panel open. Accordion toggles flip, so activating
//! the open one closes it; tabs force-set, so a tab never closes itself.

/// An explicit (toggle, body) pair. Groups are constructed from these
/// lists; nothing is discovered from the layout at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub toggle: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Accordion,
    Tabs,
}

#[derive(Debug, Clone)]
pub struct PanelGroup {
    pub kind: PanelKind,
    entries: Vec<PanelEntry>,
    open: Option<usize>,
    cursor: usize,
}

impl PanelGroup {
    pub fn accordion(pairs: &[(&str, &str)]) -> Self {
        Self::with_kind(PanelKind::Accordion, pairs)
    }

    /// Tabs start with no active panel; the first activation picks one.
    pub fn tabs(pairs: &[(&str, &str)]) -> Self {
        Self::with_kind(PanelKind::Tabs, pairs)
    }

    fn with_kind(kind: PanelKind, pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(toggle, body)| PanelEntry {
                toggle: (*toggle).to_string(),
                body: (*body).to_string(),
            })
            .collect();
        Self {
            kind,
            entries,
            open: None,
            cursor: 0,
        }
    }

    pub fn entries(&self) -> &[PanelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the open panel, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.open == Some(idx)
    }

    /// The toggle the keyboard cursor rests on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_next(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
    }

    pub fn cursor_previous(&mut self) {
        if !self.entries.is_empty() {
            if self.cursor > 0 {
                self.cursor -= 1;
            } else {
                self.cursor = self.entries.len() - 1;
            }
        }
    }

    /// Activate the toggle at `idx`. Every sibling closes; the accordion
    /// flips the target, tabs force it open. Out-of-range indexes are
    /// ignored.
    pub fn activate(&mut self, idx: usize) {
        if idx >= self.entries.len() {
            return;
        }
        self.cursor = idx;
        self.open = match self.kind {
            PanelKind::Accordion if self.open == Some(idx) => None,
            _ => Some(idx),
        };
    }

    pub fn activate_cursor(&mut self) {
        self.activate(self.cursor);
    }
}
