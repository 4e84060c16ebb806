//! Pure page layout: the rects the renderer draws into and mouse clicks
//! are hit-tested against.
//!
//! Rendering and mouse dispatch both call [`compute`], so a click always
//! lands exactly where the widget was drawn. No terminal I/O happens
//! here, which keeps click routing testable with plain `Rect` math.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::forms::{FieldKind, FieldSpec};
use crate::pages::{MountId, Page};
use crate::ui::app::App;

/// Height of one product card in rows.
const CARD_HEIGHT: u16 = 7;
/// Minimum card width before the grid drops a column.
const CARD_MIN_WIDTH: u16 = 22;
/// Six cakes sit best in at most three columns.
const MAX_COLUMNS: usize = 3;

/// A floating surface: its frame plus the `[x]` close target in the top
/// border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupRects {
    pub frame: Rect,
    pub close: Rect,
}

/// Every rect the current frame draws, in screen coordinates.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub grid_columns: usize,
    pub search: Option<Rect>,
    /// Visible cards in draw order: (visible position, record id, rect).
    /// The position indexes the gallery's visible cards, so it stays
    /// aligned with selection even when a clipped bottom row drops
    /// entries from this list.
    pub cards: Vec<(usize, u32, Rect)>,
    pub testimonials: Option<Rect>,
    /// Accordion rows or tab headers, indexed like the panel entries.
    pub toggles: Vec<Rect>,
    pub panel_body: Option<Rect>,
    pub fields: Vec<Rect>,
    pub submit: Option<Rect>,
    pub confirmation: Option<Rect>,
    pub notice: Option<Rect>,
    pub popover: Option<PopupRects>,
    pub overlay: Option<PopupRects>,
}

/// Lay the current page out over `area`.
pub fn compute(app: &App, area: Rect) -> PageLayout {
    let mut layout = PageLayout::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);
    layout.header = chunks[0];
    layout.body = chunks[1];
    layout.footer = chunks[2];

    match app.page {
        Page::Home => home_layout(app, chunks[1], &mut layout),
        Page::Services => services_layout(app, chunks[1], &mut layout),
        Page::About => about_layout(app, chunks[1], &mut layout),
        Page::Order | Page::Contact => {
            let column = centered_rect(62, 100, chunks[1]);
            form_layout(app, column, &mut layout);
        }
    }

    // floating surfaces sit above the page
    if app.popover.as_ref().is_some_and(|p| p.is_visible()) {
        layout.popover = Some(popover_rects(area));
    }
    if app.overlay.is_open() {
        layout.overlay = Some(overlay_rects(area));
    }
    if app.form.as_ref().is_some_and(|f| f.notice().is_some()) {
        layout.notice = Some(notice_rect(area));
    }

    layout
}

fn home_layout(app: &App, body: Rect, layout: &mut PageLayout) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(body);
    layout.testimonials = Some(columns[1]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[0]);
    layout.search = Some(main[0]);
    grid_layout(app, MountId::CakeGrid, main[1], layout);
}

fn services_layout(app: &App, body: Rect, layout: &mut PageLayout) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(38),
            Constraint::Percentage(28),
            Constraint::Percentage(34),
        ])
        .split(body);
    grid_layout(app, MountId::ServicesGallery, rows[0], layout);
    accordion_layout(app, rows[1], layout);
    form_layout(app, rows[2], layout);
}

fn about_layout(app: &App, body: Rect, layout: &mut PageLayout) {
    let Some(panels) = &app.panels else { return };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);

    // one header cell per tab, sized to its title
    let mut x = rows[0].x;
    for entry in panels.entries() {
        let width = entry.toggle.chars().count() as u16 + 4;
        let rect = Rect::new(x, rows[0].y, width, rows[0].height).intersection(rows[0]);
        if rect.width > 0 {
            layout.toggles.push(rect);
        }
        x = x.saturating_add(width);
    }
    layout.panel_body = Some(rows[1]);
}

/// Row-major card grid over the mount's visible cards.
fn grid_layout(app: &App, mount: MountId, area: Rect, layout: &mut PageLayout) {
    let Some(gallery) = app.gallery(mount) else {
        return;
    };
    let columns = grid_columns(area.width);
    layout.grid_columns = columns;

    let card_width = area.width / columns as u16;
    for (pos, id) in gallery.visible_ids().into_iter().enumerate() {
        let col = (pos % columns) as u16;
        let row = (pos / columns) as u16;
        let rect = Rect::new(
            area.x + col * card_width,
            area.y + row * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        )
        .intersection(area);
        // a clipped bottom row is still drawn and clickable
        if rect.height >= 3 {
            layout.cards.push((pos, id, rect));
        }
    }
}

/// Accordion rows: one line per toggle, with the open body pushed in
/// right below its toggle.
fn accordion_layout(app: &App, area: Rect, layout: &mut PageLayout) {
    let Some(panels) = &app.panels else { return };
    let bottom = area.bottom();
    let mut y = area.y;
    for idx in 0..panels.len() {
        if y >= bottom {
            break;
        }
        layout.toggles.push(Rect::new(area.x, y, area.width, 1));
        y += 1;
        if panels.is_open(idx) {
            // leave one line for each toggle still to come
            let later = (panels.len() - idx - 1) as u16;
            let available = bottom.saturating_sub(y).saturating_sub(later);
            if available > 0 {
                layout.panel_body = Some(Rect::new(area.x, y, area.width, available));
                y += available;
            }
        }
    }
}

/// Stacked form fields, the submit row, and the confirmation region when
/// one is up.
fn form_layout(app: &App, area: Rect, layout: &mut PageLayout) {
    let Some(form) = &app.form else { return };
    let mut y = area.y;
    for field in &form.spec.fields {
        let rect = Rect::new(area.x, y, area.width, field_height(field)).intersection(area);
        if rect.height >= 2 {
            layout.fields.push(rect);
        }
        y = y.saturating_add(field_height(field));
    }

    let submit = Rect::new(area.x, y, area.width, 3).intersection(area);
    if submit.height >= 2 {
        layout.submit = Some(submit);
    }
    y = y.saturating_add(3);

    if form.confirmation().is_some() {
        let confirmation = Rect::new(area.x, y, area.width, 4).intersection(area);
        if confirmation.height >= 3 {
            layout.confirmation = Some(confirmation);
        }
    }
}

fn field_height(field: &FieldSpec) -> u16 {
    match field.kind {
        FieldKind::Message => 4,
        _ => 3,
    }
}

/// How many cards fit side by side in `width` columns of text.
pub fn grid_columns(width: u16) -> usize {
    ((width / CARD_MIN_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

/// Rect centered in `r`, `percent_x` by `percent_y` of its size.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn overlay_rects(area: Rect) -> PopupRects {
    let frame = centered_rect(72, 68, area);
    PopupRects {
        frame,
        close: close_cell(frame),
    }
}

/// Bottom-right corner, floating above the footer.
fn popover_rects(area: Rect) -> PopupRects {
    let width = area.width.min(44);
    let height = area.height.min(7);
    let x = area.right().saturating_sub(width + 1).max(area.x);
    let y = area.bottom().saturating_sub(height + 1).max(area.y);
    let frame = Rect::new(x, y, width, height).intersection(area);
    PopupRects {
        frame,
        close: close_cell(frame),
    }
}

fn notice_rect(area: Rect) -> Rect {
    let width = (area.width * 56 / 100).clamp(20.min(area.width), area.width.max(1));
    let height = area.height.min(5);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// The `[x]` target in a popup's top border.
fn close_cell(frame: Rect) -> Rect {
    Rect::new(frame.right().saturating_sub(5), frame.y, 3, 1).intersection(frame)
}
