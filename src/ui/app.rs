//! Application state and event dispatch for one page of the kiosk.
//!
//! `App::new` is the bootstrap: it wires every widget the chosen page
//! mounts and leaves the rest absent, so components shared across pages
//! silently no-op where their mount does not exist. All timed behavior
//! runs through [`App::tick`] with an injected `Instant`, never through
//! background tasks.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::catalog::{normalize_query, Store};
use crate::forms::{contact_form, enquiry_form, order_form, SimulatedSubmission};
use crate::pages::{copy, MountId, Page, SEARCH_BINDING};
use crate::ui::form_panel::FormPanel;
use crate::ui::gallery::Gallery;
use crate::ui::layout;
use crate::ui::overlay::Overlay;
use crate::ui::panels::PanelGroup;
use crate::ui::popover::Popover;
use crate::ui::theme::Theme;

/// Which widget keyboard input currently goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Gallery(MountId),
    Search,
    Panels,
    Form,
}

pub struct App {
    pub page: Page,
    pub store: Store,
    pub theme: Theme,
    pub overlay: Overlay,
    /// Present only where the page mounts the offer popover.
    pub popover: Option<Popover>,
    /// The page's accordion or tab group, if it has one.
    pub panels: Option<PanelGroup>,
    /// The page's form flow, if it has one.
    pub form: Option<FormPanel>,
    pub focus: Focus,
    pub should_quit: bool,
    pub terminal_size: (u16, u16),
    home_grid: Option<Gallery>,
    services_gallery: Option<Gallery>,
    search_query: String,
    service: SimulatedSubmission,
}

impl App {
    pub fn new(page: Page, store: Store, theme: Theme, now: Instant) -> Self {
        let mut app = Self {
            page,
            store,
            theme,
            overlay: Overlay::new(),
            popover: None,
            panels: None,
            form: None,
            focus: Self::ring_for(page)[0],
            should_quit: false,
            terminal_size: (80, 24),
            home_grid: None,
            services_gallery: None,
            search_query: String::new(),
            service: SimulatedSubmission,
        };

        // point the catalog renderer at every mount; absent ones no-op
        for mount in MountId::ALL {
            app.render_catalog(mount);
        }

        if page.has_mount(MountId::ServicesAccordion) {
            app.panels = Some(PanelGroup::accordion(copy::SERVICE_SECTIONS));
        }
        if page.has_mount(MountId::AboutTabs) {
            app.panels = Some(PanelGroup::tabs(copy::ABOUT_TABS));
        }

        if page.has_mount(MountId::ContactForm) {
            app.form = Some(FormPanel::new(contact_form()));
        }
        if page.has_mount(MountId::OrderForm) {
            app.form = Some(FormPanel::new(order_form()));
        }
        if page.has_mount(MountId::EnquiryForm) {
            app.form = Some(FormPanel::new(enquiry_form()));
        }

        if page.has_mount(MountId::OfferPopover) {
            app.popover = Some(Popover::with_auto_show(now));
        }

        app
    }

    /// Rebuild the gallery behind a catalog mount from the store. When
    /// the current page does not carry the mount this is a silent no-op,
    /// the expected case for components shared across pages.
    pub fn render_catalog(&mut self, mount: MountId) {
        if !mount.is_catalog_grid() || !self.page.has_mount(mount) {
            return;
        }
        let slot = match mount {
            MountId::CakeGrid => &mut self.home_grid,
            MountId::ServicesGallery => &mut self.services_gallery,
            _ => return,
        };
        slot.get_or_insert_with(Gallery::new).rebuild(&self.store);
    }

    pub fn gallery(&self, mount: MountId) -> Option<&Gallery> {
        match mount {
            MountId::CakeGrid => self.home_grid.as_ref(),
            MountId::ServicesGallery => self.services_gallery.as_ref(),
            _ => None,
        }
    }

    fn gallery_mut(&mut self, mount: MountId) -> Option<&mut Gallery> {
        match mount {
            MountId::CakeGrid => self.home_grid.as_mut(),
            MountId::ServicesGallery => self.services_gallery.as_mut(),
            _ => None,
        }
    }

    /// The catalog grid the current page carries, if any.
    pub fn grid_mount(&self) -> Option<MountId> {
        self.page
            .mounts()
            .iter()
            .copied()
            .find(|mount| mount.is_catalog_grid())
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn search_push_char(&mut self, c: char) {
        self.search_query.push(c);
        self.apply_search();
    }

    pub fn search_pop_char(&mut self) {
        self.search_query.pop();
        self.apply_search();
    }

    /// Re-run the filter over the grid the search box is bound to.
    fn apply_search(&mut self) {
        let normalized = normalize_query(&self.search_query);
        let (_, grid) = SEARCH_BINDING;
        let slot = match grid {
            MountId::CakeGrid => &mut self.home_grid,
            MountId::ServicesGallery => &mut self.services_gallery,
            _ => return,
        };
        if let Some(gallery) = slot {
            gallery.apply_filter(&self.store, &normalized);
        }
    }

    /// Card selection: hand the record under the cursor to the overlay.
    pub fn open_selected(&mut self) {
        let Focus::Gallery(mount) = self.focus else {
            return;
        };
        let Some(id) = self.gallery(mount).and_then(Gallery::selected_id) else {
            return;
        };
        if let Some(record) = self.store.product_by_id(id) {
            self.overlay.open(record);
        }
    }

    pub fn show_popover(&mut self, now: Instant) {
        if let Some(popover) = &mut self.popover {
            popover.show(now);
        }
    }

    /// The global Escape pass: the overlay and the popover hide together.
    /// Returns whether either was up.
    pub fn escape_pass(&mut self) -> bool {
        let mut any = self.overlay.is_open();
        self.overlay.close();
        if let Some(popover) = &mut self.popover {
            any |= popover.is_visible();
            popover.hide();
        }
        any
    }

    /// Fire every deadline that has come due.
    pub fn tick(&mut self, now: Instant) {
        if let Some(popover) = &mut self.popover {
            popover.tick(now);
        }
        if let Some(form) = &mut self.form {
            form.tick(now);
        }
    }

    /// Whether any timer is armed, so the event loop can poll faster.
    pub fn has_deadline(&self) -> bool {
        self.popover.as_ref().is_some_and(Popover::has_deadline)
            || self.form.as_ref().is_some_and(FormPanel::has_deadline)
    }

    fn ring_for(page: Page) -> &'static [Focus] {
        match page {
            Page::Home => &[Focus::Gallery(MountId::CakeGrid), Focus::Search],
            Page::Services => &[
                Focus::Gallery(MountId::ServicesGallery),
                Focus::Panels,
                Focus::Form,
            ],
            Page::About => &[Focus::Panels],
            Page::Order | Page::Contact => &[Focus::Form],
        }
    }

    pub fn cycle_focus(&mut self) {
        let ring = Self::ring_for(self.page);
        let pos = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = ring[(pos + 1) % ring.len()];
    }

    fn is_text_focus(&self) -> bool {
        matches!(self.focus, Focus::Search | Focus::Form)
    }

    fn area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_size.0, self.terminal_size.1)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C always quits; form pages have no other non-text key
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // the validation notice blocks everything behind it
        if let Some(form) = &mut self.form {
            if form.notice().is_some() {
                if matches!(
                    key.code,
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
                ) {
                    form.dismiss_notice();
                }
                return;
            }
        }

        if key.code == KeyCode::Esc {
            if !self.escape_pass() {
                // nothing floating was up: leave the text widget instead
                self.focus = Self::ring_for(self.page)[0];
            }
            return;
        }

        // the open overlay swallows keys; only its close triggers work
        if self.overlay.is_open() {
            if key.code == KeyCode::Char('x') {
                self.overlay.close();
            }
            return;
        }

        if key.code == KeyCode::Tab {
            self.cycle_focus();
            return;
        }

        if !self.is_text_focus() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('o') => {
                    self.show_popover(now);
                    return;
                }
                KeyCode::Char('/') if self.page.has_mount(MountId::SearchInput) => {
                    self.focus = Focus::Search;
                    return;
                }
                _ => {}
            }
        }

        match self.focus {
            Focus::Gallery(mount) => self.gallery_key(mount, key),
            Focus::Search => self.search_key(key),
            Focus::Panels => self.panels_key(key),
            Focus::Form => self.form_key(key, now),
        }
    }

    fn gallery_key(&mut self, mount: MountId, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.open_selected();
            return;
        }
        let columns = layout::compute(self, self.area()).grid_columns.max(1);
        let Some(gallery) = self.gallery_mut(mount) else {
            return;
        };
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => gallery.select_previous(),
            KeyCode::Right | KeyCode::Char('l') => gallery.select_next(),
            KeyCode::Down | KeyCode::Char('j') => gallery.select_row_down(columns),
            KeyCode::Up | KeyCode::Char('k') => gallery.select_row_up(columns),
            _ => {}
        }
    }

    fn search_key(&mut self, key: KeyEvent) {
        match key.code {
            // back to browsing the filtered cards
            KeyCode::Enter | KeyCode::Down => self.focus = Self::ring_for(self.page)[0],
            KeyCode::Backspace => self.search_pop_char(),
            KeyCode::Char(c) => self.search_push_char(c),
            _ => {}
        }
    }

    fn panels_key(&mut self, key: KeyEvent) {
        let Some(panels) = &mut self.panels else {
            return;
        };
        match key.code {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
                panels.cursor_next();
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
                panels.cursor_previous();
            }
            KeyCode::Enter | KeyCode::Char(' ') => panels.activate_cursor(),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                panels.activate((c as u8 - b'1') as usize);
            }
            _ => {}
        }
    }

    fn form_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match key.code {
            // browser semantics: Enter submits from any field
            KeyCode::Enter => form.submit(&mut self.service, now),
            KeyCode::Down => form.focus_next_field(),
            KeyCode::Up => form.focus_previous_field(),
            KeyCode::Right => form.select_next_option(),
            KeyCode::Left => form.select_previous_option(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.input_char(c),
            _ => {}
        }
    }

    /// Route a mouse event by hit-testing the same rects the renderer
    /// draws into.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);
        let layout = layout::compute(self, self.area());

        // the blocking notice eats the click wherever it lands
        if layout.notice.is_some() {
            if let Some(form) = &mut self.form {
                form.dismiss_notice();
            }
            return;
        }

        if let Some(overlay) = layout.overlay {
            // the close button or the backdrop close it; clicks on the
            // content itself do not
            if overlay.close.contains(pos) || !overlay.frame.contains(pos) {
                self.overlay.close();
            }
            return;
        }

        if let Some(popover) = layout.popover {
            if popover.close.contains(pos) {
                if let Some(p) = &mut self.popover {
                    p.hide();
                }
                return;
            }
            if popover.frame.contains(pos) {
                return;
            }
        }

        let clicked_card = layout
            .cards
            .iter()
            .find(|(_, _, rect)| rect.contains(pos))
            .map(|(card_pos, id, _)| (*card_pos, *id));
        if let Some((card_pos, id)) = clicked_card {
            if let Some(mount) = self.grid_mount() {
                self.focus = Focus::Gallery(mount);
                if let Some(gallery) = self.gallery_mut(mount) {
                    gallery.select_pos(card_pos);
                }
            }
            if let Some(record) = self.store.product_by_id(id) {
                self.overlay.open(record);
            }
            return;
        }

        if layout.search.is_some_and(|rect| rect.contains(pos)) {
            self.focus = Focus::Search;
            return;
        }

        if let Some(idx) = layout.toggles.iter().position(|rect| rect.contains(pos)) {
            self.focus = Focus::Panels;
            if let Some(panels) = &mut self.panels {
                panels.activate(idx);
            }
            return;
        }

        if let Some(idx) = layout.fields.iter().position(|rect| rect.contains(pos)) {
            self.focus = Focus::Form;
            if let Some(form) = &mut self.form {
                form.focus_field(idx);
            }
            return;
        }

        if layout.submit.is_some_and(|rect| rect.contains(pos)) {
            self.focus = Focus::Form;
            if let Some(form) = self.form.as_mut() {
                form.submit(&mut self.service, now);
            }
        }
    }
}
