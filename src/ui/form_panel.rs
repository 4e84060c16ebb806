//! One page's form flow: field editing, the blocking validation notice,
//! the simulated submission and the timed confirmation region.
//!
//! The submit/reveal/hide cycle runs on deadline slots like the popover:
//! a re-submit overwrites the pending one and a reveal re-arms the hide,
//! so stale timers never fire into the wrong state.

use std::time::Instant;

use crate::forms::{FieldKind, FormSpec, SubmissionService};

/// An accepted submission waiting out the simulated latency.
#[derive(Debug, Clone)]
struct PendingSubmission {
    message: String,
    reveal_at: Instant,
}

/// A visible confirmation and its scheduled hide.
#[derive(Debug, Clone)]
struct Confirmation {
    message: String,
    hide_at: Instant,
}

#[derive(Debug)]
pub struct FormPanel {
    pub spec: FormSpec,
    values: Vec<String>,
    cursor: usize,
    notice: Option<String>,
    pending: Option<PendingSubmission>,
    confirmation: Option<Confirmation>,
}

impl FormPanel {
    pub fn new(spec: FormSpec) -> Self {
        let values = vec![String::new(); spec.fields.len()];
        Self {
            spec,
            values,
            cursor: 0,
            notice: None,
            pending: None,
            confirmation: None,
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn value(&self, idx: usize) -> &str {
        self.values.get(idx).map(String::as_str).unwrap_or("")
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn field_count(&self) -> usize {
        self.spec.fields.len()
    }

    /// The blocking validation notice, if one is up.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The visible confirmation message, if one is up.
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation
            .as_ref()
            .map(|confirmation| confirmation.message.as_str())
    }

    /// Whether a submission is waiting out its simulated latency.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn focus_next_field(&mut self) {
        if !self.values.is_empty() {
            self.cursor = (self.cursor + 1) % self.values.len();
        }
    }

    pub fn focus_previous_field(&mut self) {
        if !self.values.is_empty() {
            if self.cursor > 0 {
                self.cursor -= 1;
            } else {
                self.cursor = self.values.len() - 1;
            }
        }
    }

    /// Put the cursor on a field directly, e.g. after a mouse click.
    pub fn focus_field(&mut self, idx: usize) {
        if idx < self.values.len() {
            self.cursor = idx;
        }
    }

    fn focused_kind(&self) -> Option<FieldKind> {
        self.spec.fields.get(self.cursor).map(|field| field.kind)
    }

    /// Type into the focused field. Select fields ignore typed text.
    pub fn input_char(&mut self, c: char) {
        if matches!(self.focused_kind(), Some(FieldKind::Select(_))) {
            return;
        }
        if let Some(value) = self.values.get_mut(self.cursor) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if matches!(self.focused_kind(), Some(FieldKind::Select(_))) {
            return;
        }
        if let Some(value) = self.values.get_mut(self.cursor) {
            value.pop();
        }
    }

    /// Cycle a focused select field forward. From the unset placeholder
    /// this lands on the first option.
    pub fn select_next_option(&mut self) {
        self.cycle_select(1);
    }

    /// Cycle backward; from the placeholder this lands on the last option.
    pub fn select_previous_option(&mut self) {
        self.cycle_select(-1);
    }

    fn cycle_select(&mut self, step: isize) {
        let Some(FieldKind::Select(options)) = self.focused_kind() else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let Some(value) = self.values.get_mut(self.cursor) else {
            return;
        };
        let next = match options.iter().position(|option| *option == value.as_str()) {
            Some(current) => {
                let len = options.len() as isize;
                (current as isize + step).rem_euclid(len) as usize
            }
            None if step < 0 => options.len() - 1,
            None => 0,
        };
        *value = options[next].to_string();
    }

    /// Intercept a submit. A validation failure raises the blocking
    /// notice and leaves the fields untouched; an accepted submission is
    /// parked until its simulated latency runs out. Submitting again
    /// while one is parked just replaces it.
    pub fn submit(&mut self, service: &mut dyn SubmissionService, now: Instant) {
        match service.submit(&self.spec, &self.values) {
            Ok(receipt) => {
                self.pending = Some(PendingSubmission {
                    message: receipt.message,
                    reveal_at: now + receipt.latency,
                });
            }
            Err(err) => {
                self.notice = Some(err.to_string());
            }
        }
    }

    /// Drop the blocking validation notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Fire due deadlines: reveal a parked confirmation (clearing the
    /// fields), then hide it once its window lapses.
    pub fn tick(&mut self, now: Instant) {
        let reveal_due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.reveal_at <= now);
        if reveal_due {
            if let Some(pending) = self.pending.take() {
                self.confirmation = Some(Confirmation {
                    message: pending.message,
                    hide_at: now + self.spec.confirmation_visible,
                });
                for value in &mut self.values {
                    value.clear();
                }
                self.cursor = 0;
            }
        }
        let hide_due = self
            .confirmation
            .as_ref()
            .is_some_and(|confirmation| confirmation.hide_at <= now);
        if hide_due {
            self.confirmation = None;
        }
    }

    /// Whether a reveal or hide is armed, so the event loop can poll
    /// faster.
    pub fn has_deadline(&self) -> bool {
        self.pending.is_some() || self.confirmation.is_some()
    }
}
