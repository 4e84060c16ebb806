//! Keyboard and mouse event handling tests
//!
//! Tests for key dispatch (quit keys, search editing, panel activation,
//! overlay close triggers) and for mouse routing through the same rects
//! the renderer draws into.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use sugarplum::catalog::Store;
use sugarplum::pages::{MountId, Page};
use sugarplum::ui::app::Focus;
use sugarplum::ui::layout;
use sugarplum::ui::theme::Theme;
use sugarplum::ui::App;

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// Helper to create a left mouse click
fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

fn create_test_app(page: Page) -> App {
    let mut app = App::new(
        page,
        Store::built_in(),
        Theme::default_theme().clone(),
        Instant::now(),
    );
    app.terminal_size = (100, 40);
    app
}

fn screen() -> Rect {
    Rect::new(0, 0, 100, 40)
}

#[tokio::test]
async fn test_q_quits_from_the_gallery() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Home);

    app.handle_key(key(KeyCode::Char('q')), now);
    assert!(app.should_quit);

    let mut app = create_test_app(Page::Home);
    app.handle_key(key(KeyCode::Char('Q')), now);
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_q_types_into_the_search_box() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Home);

    app.handle_key(key(KeyCode::Char('/')), now);
    assert_eq!(app.focus, Focus::Search);

    app.handle_key(key(KeyCode::Char('q')), now);
    assert!(!app.should_quit);
    assert_eq!(app.search_query(), "q");
}

#[tokio::test]
async fn test_search_keys_filter_the_grid() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Home);

    app.handle_key(key(KeyCode::Char('/')), now);
    for c in "  CHOC".chars() {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
    let grid = app.gallery(MountId::CakeGrid).expect("home grid");
    assert_eq!(grid.visible_ids(), vec![1, 6]);

    app.handle_key(key(KeyCode::Backspace), now);
    app.handle_key(key(KeyCode::Backspace), now);
    let grid = app.gallery(MountId::CakeGrid).expect("home grid");
    assert_eq!(grid.visible_count(), 6);

    // Enter hands focus back to the cards
    app.handle_key(key(KeyCode::Enter), now);
    assert_eq!(app.focus, Focus::Gallery(MountId::CakeGrid));
}

#[tokio::test]
async fn test_enter_previews_the_selected_card() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Home);

    app.handle_key(key(KeyCode::Enter), now);
    assert!(app.overlay.is_open());
    assert!(app.overlay.caption().starts_with("Classic Chocolate"));

    app.handle_key(key(KeyCode::Char('x')), now);
    assert!(!app.overlay.is_open());

    app.handle_key(key(KeyCode::Char('l')), now);
    app.handle_key(key(KeyCode::Enter), now);
    assert!(app.overlay.caption().starts_with("Vanilla Dream"));
}

#[tokio::test]
async fn test_open_overlay_swallows_other_keys() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Home);
    app.handle_key(key(KeyCode::Enter), now);
    assert!(app.overlay.is_open());

    app.handle_key(key(KeyCode::Char('q')), now);
    assert!(!app.should_quit);
    app.handle_key(key(KeyCode::Char('l')), now);
    let grid = app.gallery(MountId::CakeGrid).expect("home grid");
    assert_eq!(grid.selected_pos(), 0);

    app.handle_key(key(KeyCode::Char('x')), now);
    assert!(!app.overlay.is_open());
}

#[tokio::test]
async fn test_escape_closes_overlay_and_popover_in_one_pass() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Home);

    app.handle_key(key(KeyCode::Char('o')), now);
    app.handle_key(key(KeyCode::Enter), now);
    assert!(app.overlay.is_open());
    assert!(app.popover.as_ref().expect("home popover").is_visible());

    app.handle_key(key(KeyCode::Esc), now);
    assert!(!app.overlay.is_open());
    assert!(!app.popover.as_ref().expect("home popover").is_visible());
}

#[tokio::test]
async fn test_tab_key_cycles_the_focus_ring() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Services);
    assert_eq!(app.focus, Focus::Gallery(MountId::ServicesGallery));

    app.handle_key(key(KeyCode::Tab), now);
    assert_eq!(app.focus, Focus::Panels);
    app.handle_key(key(KeyCode::Tab), now);
    assert_eq!(app.focus, Focus::Form);
    app.handle_key(key(KeyCode::Tab), now);
    assert_eq!(app.focus, Focus::Gallery(MountId::ServicesGallery));
}

#[tokio::test]
async fn test_tab_group_activation_keys() {
    let now = Instant::now();
    let mut app = create_test_app(Page::About);
    assert_eq!(app.focus, Focus::Panels);
    assert_eq!(app.panels.as_ref().expect("tabs").open_index(), None);

    app.handle_key(key(KeyCode::Char('l')), now);
    app.handle_key(key(KeyCode::Enter), now);
    assert_eq!(app.panels.as_ref().expect("tabs").open_index(), Some(1));

    // tabs never close themselves
    app.handle_key(key(KeyCode::Enter), now);
    assert_eq!(app.panels.as_ref().expect("tabs").open_index(), Some(1));

    // digits jump straight to an entry; out-of-range digits are ignored
    app.handle_key(key(KeyCode::Char('3')), now);
    assert_eq!(app.panels.as_ref().expect("tabs").open_index(), Some(2));
    app.handle_key(key(KeyCode::Char('9')), now);
    assert_eq!(app.panels.as_ref().expect("tabs").open_index(), Some(2));
}

#[tokio::test]
async fn test_accordion_toggle_keys() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Services);
    app.handle_key(key(KeyCode::Tab), now);
    assert_eq!(app.focus, Focus::Panels);

    app.handle_key(key(KeyCode::Enter), now);
    assert_eq!(
        app.panels.as_ref().expect("accordion").open_index(),
        Some(0)
    );

    // a second activation of the open section closes it
    app.handle_key(key(KeyCode::Enter), now);
    assert_eq!(app.panels.as_ref().expect("accordion").open_index(), None);

    app.handle_key(key(KeyCode::Char('j')), now);
    app.handle_key(key(KeyCode::Char(' ')), now);
    assert_eq!(
        app.panels.as_ref().expect("accordion").open_index(),
        Some(1)
    );
}

#[tokio::test]
async fn test_click_on_a_card_opens_the_preview() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Home);

    let page = layout::compute(&app, screen());
    let (pos, id, rect) = page.cards[1];
    assert_eq!((pos, id), (1, 2));

    app.handle_mouse(click(rect.x + 2, rect.y + 1), now);
    assert!(app.overlay.is_open());
    assert!(app.overlay.caption().starts_with("Vanilla Dream"));
    let grid = app.gallery(MountId::CakeGrid).expect("home grid");
    assert_eq!(grid.selected_pos(), 1);
}

#[tokio::test]
async fn test_backdrop_click_closes_but_content_click_does_not() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Home);
    app.handle_key(key(KeyCode::Enter), now);

    let page = layout::compute(&app, screen());
    let frame = page.overlay.expect("overlay rects").frame;

    // a click inside the content leaves the overlay open
    app.handle_mouse(
        click(frame.x + frame.width / 2, frame.y + frame.height / 2),
        now,
    );
    assert!(app.overlay.is_open());

    // a click on the backdrop closes it
    app.handle_mouse(click(0, frame.y), now);
    assert!(!app.overlay.is_open());
}

#[tokio::test]
async fn test_popover_close_button_click() {
    let now = Instant::now();
    let mut app = create_test_app(Page::Home);
    app.handle_key(key(KeyCode::Char('o')), now);

    let page = layout::compute(&app, screen());
    let close = page.popover.expect("popover rects").close;

    app.handle_mouse(click(close.x, close.y), now);
    assert!(!app.popover.as_ref().expect("home popover").is_visible());
}

#[tokio::test]
async fn test_click_activates_toggles_and_focuses_fields() {
    let now = Instant::now();
    let mut app = create_test_app(Page::About);
    let page = layout::compute(&app, screen());

    app.handle_mouse(click(page.toggles[2].x + 1, page.toggles[2].y), now);
    assert_eq!(app.panels.as_ref().expect("tabs").open_index(), Some(2));

    let mut app = create_test_app(Page::Contact);
    let page = layout::compute(&app, screen());

    app.handle_mouse(click(page.fields[1].x + 1, page.fields[1].y + 1), now);
    assert_eq!(app.focus, Focus::Form);
    assert_eq!(app.form.as_ref().expect("contact form").cursor(), 1);

    // clicking submit with empty fields raises the blocking notice
    let submit = page.submit.expect("submit row");
    app.handle_mouse(click(submit.x + 1, submit.y + 1), now);
    assert!(app.form.as_ref().expect("contact form").notice().is_some());
}
