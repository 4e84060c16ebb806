//! Form flow tests
//!
//! End-to-end runs of the three form flows through the public API:
//! validation notices, the simulated submission latency, the timed
//! confirmation region and field clearing, all with synthetic instants.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use sugarplum::catalog::Store;
use sugarplum::pages::Page;
use sugarplum::ui::app::Focus;
use sugarplum::ui::theme::Theme;
use sugarplum::ui::App;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn create_test_app(page: Page, now: Instant) -> App {
    App::new(page, Store::built_in(), Theme::default_theme().clone(), now)
}

fn type_str(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
}

#[tokio::test]
async fn test_contact_flow_reveals_clears_then_hides() {
    let t0 = Instant::now();
    let mut app = create_test_app(Page::Contact, t0);
    assert_eq!(app.focus, Focus::Form);

    type_str(&mut app, "Nadia", t0);
    app.handle_key(key(KeyCode::Down), t0);
    type_str(&mut app, "nadia@example.com", t0);
    app.handle_key(key(KeyCode::Down), t0);
    type_str(&mut app, "Do you deliver on Sundays?", t0);

    app.handle_key(key(KeyCode::Enter), t0);
    let form = app.form.as_ref().expect("contact form");
    assert!(form.is_pending());
    assert!(form.confirmation().is_none());

    // the confirmation appears once the simulated latency elapses,
    // carrying the submitted name and email, and the fields clear
    app.tick(t0 + Duration::from_millis(499));
    assert!(app.form.as_ref().expect("contact form").confirmation().is_none());

    let reveal = t0 + Duration::from_millis(500);
    app.tick(reveal);
    let form = app.form.as_ref().expect("contact form");
    let message = form.confirmation().expect("confirmation visible");
    assert!(message.contains("Nadia"));
    assert!(message.contains("nadia@example.com"));
    assert!(form.values().iter().all(String::is_empty));

    // and hides itself after its seven second window
    app.tick(reveal + Duration::from_secs(6));
    assert!(app.form.as_ref().expect("contact form").confirmation().is_some());
    app.tick(reveal + Duration::from_secs(7));
    assert!(app.form.as_ref().expect("contact form").confirmation().is_none());
    assert!(!app.has_deadline());
}

#[tokio::test]
async fn test_invalid_submit_raises_a_blocking_notice() {
    let t0 = Instant::now();
    let mut app = create_test_app(Page::Contact, t0);

    type_str(&mut app, "Nadia", t0);
    app.handle_key(key(KeyCode::Enter), t0);
    let form = app.form.as_ref().expect("contact form");
    assert_eq!(form.notice(), Some("Please fill in the email field."));
    assert!(!form.is_pending());

    // the notice blocks everything else: typing edits nothing, q does
    // not quit
    app.handle_key(key(KeyCode::Char('x')), t0);
    app.handle_key(key(KeyCode::Char('q')), t0);
    assert!(!app.should_quit);
    assert_eq!(app.form.as_ref().expect("contact form").value(0), "Nadia");

    app.handle_key(key(KeyCode::Enter), t0);
    assert!(app.form.as_ref().expect("contact form").notice().is_none());

    // no confirmation ever follows a refused submit
    app.tick(t0 + Duration::from_secs(60));
    assert!(app.form.as_ref().expect("contact form").confirmation().is_none());
}

#[tokio::test]
async fn test_short_message_is_refused() {
    let t0 = Instant::now();
    let mut app = create_test_app(Page::Contact, t0);

    type_str(&mut app, "Nadia", t0);
    app.handle_key(key(KeyCode::Down), t0);
    type_str(&mut app, "nadia@example.com", t0);
    app.handle_key(key(KeyCode::Down), t0);
    type_str(&mut app, "too short", t0);

    app.handle_key(key(KeyCode::Enter), t0);
    assert_eq!(
        app.form.as_ref().expect("contact form").notice(),
        Some("The message must be at least 10 characters.")
    );
}

#[tokio::test]
async fn test_enquiry_flow_quotes_the_chosen_service() {
    let t0 = Instant::now();
    let mut app = create_test_app(Page::Services, t0);

    // the enquiry form is the third stop on the services focus ring
    app.handle_key(key(KeyCode::Tab), t0);
    app.handle_key(key(KeyCode::Tab), t0);
    assert_eq!(app.focus, Focus::Form);

    type_str(&mut app, "Amelia", t0);
    app.handle_key(key(KeyCode::Down), t0);
    type_str(&mut app, "amelia@example.com", t0);
    app.handle_key(key(KeyCode::Down), t0);
    // the service field is a select: typing is ignored, arrows choose
    type_str(&mut app, "zzz", t0);
    app.handle_key(key(KeyCode::Right), t0);
    app.handle_key(key(KeyCode::Right), t0);
    assert_eq!(
        app.form.as_ref().expect("enquiry form").value(2),
        "Wedding Cakes"
    );
    app.handle_key(key(KeyCode::Down), t0);
    type_str(&mut app, "Tasting for next June please", t0);

    app.handle_key(key(KeyCode::Enter), t0);
    app.tick(t0 + Duration::from_millis(600));
    let message = app
        .form
        .as_ref()
        .expect("enquiry form")
        .confirmation()
        .expect("confirmation visible");
    assert!(message.contains("Amelia"));
    assert!(message.contains("\"Wedding Cakes\""));
    assert!(message.contains("amelia@example.com"));
}

#[tokio::test]
async fn test_order_flow_uses_its_own_template_and_window() {
    let t0 = Instant::now();
    let mut app = create_test_app(Page::Order, t0);

    type_str(&mut app, "Sipho", t0);
    app.handle_key(key(KeyCode::Down), t0);
    type_str(&mut app, "Dlamini", t0);
    app.handle_key(key(KeyCode::Down), t0);
    type_str(&mut app, "021 555 0101", t0);

    app.handle_key(key(KeyCode::Enter), t0);
    let reveal = t0 + Duration::from_millis(500);
    app.tick(reveal);
    let message = app
        .form
        .as_ref()
        .expect("order form")
        .confirmation()
        .expect("confirmation visible");
    assert!(message.starts_with("Thanks Sipho!"));
    assert!(message.contains("number provided"));

    // the order confirmation stays up for eight seconds, not seven
    app.tick(reveal + Duration::from_secs(7));
    assert!(app.form.as_ref().expect("order form").confirmation().is_some());
    app.tick(reveal + Duration::from_secs(8));
    assert!(app.form.as_ref().expect("order form").confirmation().is_none());
}

#[tokio::test]
async fn test_quick_resubmit_restarts_the_timers() {
    let t0 = Instant::now();
    let mut app = create_test_app(Page::Order, t0);

    type_str(&mut app, "Sipho", t0);
    app.handle_key(key(KeyCode::Down), t0);
    type_str(&mut app, "Dlamini", t0);
    app.handle_key(key(KeyCode::Down), t0);
    type_str(&mut app, "021 555 0101", t0);

    app.handle_key(key(KeyCode::Enter), t0);
    let t1 = t0 + Duration::from_millis(200);
    app.handle_key(key(KeyCode::Enter), t1);

    // the first reveal deadline was overwritten by the second submit
    app.tick(t0 + Duration::from_millis(500));
    assert!(app.form.as_ref().expect("order form").confirmation().is_none());
    app.tick(t1 + Duration::from_millis(500));
    assert!(app.form.as_ref().expect("order form").confirmation().is_some());
}
