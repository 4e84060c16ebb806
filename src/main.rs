//! # Sugarplum CLI Entry Point
//!
//! The terminal storefront for the Sugarplum Bakery. One run shows one
//! page of the site, the way one browser tab shows one page: the cake
//! gallery with search and preview on the home page, the services page
//! with its accordion and enquiry form, the about tabs, and the order
//! and contact forms.
//!
//! ## Usage
//!
//! ```bash
//! # Open the home page
//! sugarplum
//!
//! # Open another page (names or URL-style paths both work)
//! sugarplum --page services
//! sugarplum --page /about.html
//!
//! # Load a replacement catalog and pick a theme
//! sugarplum --catalog menu.json --theme "Vanilla Cream"
//!
//! # Debug mode - print the resolved page and catalog, then exit
//! sugarplum --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `q` / `Q` - quit (outside text inputs)
//! - `Tab` - switch between the page's widgets
//! - arrows / `hjkl` - move within the focused widget
//! - `Enter` / `Space` - preview a cake, open a panel, submit a form
//! - `/` - jump to the search box (home page)
//! - `o` - show the weekly offer (home page)
//! - `Esc` / `x` - close the preview and the offer popover
//!
//! The mouse works everywhere a key does: click a card to preview it,
//! a toggle to open it, a field to focus it, `[x]` or the backdrop to
//! close a popup.

use sugarplum::catalog::Store;
use sugarplum::pages::Page;
use sugarplum::ui::config::Config;
use sugarplum::ui::theme::Theme;
use sugarplum::ui::{self, App};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read input event")?))
        } else {
            Ok(None)
        }
    }
}

/// Sugarplum - a cozy terminal storefront for the Sugarplum Bakery
#[derive(Parser, Debug)]
#[command(name = "sugarplum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse the cake gallery and send orders without leaving your terminal", long_about = None)]
struct Args {
    /// Page of the site to show, as a name or URL-style path
    /// (home, services, about, order, contact, or e.g. "/index.html")
    #[arg(short, long, value_name = "PATH", value_parser = parse_page)]
    page: Option<Page>,

    /// JSON file with a replacement catalog (products and testimonials)
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Color theme, e.g. "Vanilla Cream"; remembered for the next run
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the resolved page and catalog, then exit
    #[arg(long)]
    debug: bool,
}

fn parse_page(raw: &str) -> Result<Page, String> {
    Page::from_path(raw).ok_or_else(|| {
        format!("unknown page '{raw}' (expected one of: home, services, about, order, contact)")
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    let mut config = Config::load();

    // --theme overrides the remembered theme and is saved for next time
    let theme = match &args.theme {
        Some(name) => {
            let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            let theme = Theme::by_name(name).with_context(|| {
                format!("Unknown theme: {name} (available: {})", names.join(", "))
            })?;
            config.theme = theme.name.to_string();
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not save config: {e}");
            }
            theme
        }
        None => Theme::by_name(&config.theme).unwrap_or_else(Theme::default_theme),
    };

    // without --page the kiosk opens the page pinned in the config file
    let page = match args.page {
        Some(page) => page,
        None => Page::from_path(&config.page).unwrap_or(Page::Home),
    };

    let store = match &args.catalog {
        Some(path) => Store::from_json_file(path)?,
        None => Store::built_in(),
    };

    // Debug mode: print the resolved page and catalog and exit
    if args.debug {
        println!("=== Page ===");
        println!("  {} ({})", page.name(), page.title());
        for mount in page.mounts() {
            println!("    {mount:?}");
        }
        println!("\n=== Products ===");
        for record in store.products() {
            println!(
                "  [{}] {} ({})\n      {}",
                record.id, record.name, record.category, record.description
            );
        }
        println!("\n=== Testimonials ===");
        for quote in store.testimonials() {
            println!("  {}: {}", quote.author, quote.text);
        }
        println!(
            "\nTotal: {} products, {} testimonials",
            store.products().len(),
            store.testimonials().len()
        );
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(page, store, theme.clone(), Instant::now());

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    app.terminal_size = (size.width, size.height);

    loop {
        app.tick(Instant::now());

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Poll faster while a timer is armed so reveals and hides land
        // close to their deadlines
        let poll_timeout = if app.has_deadline() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        let event = event_reader.read_event(poll_timeout)?;

        // If no event, continue the loop (tick timers and re-render)
        let event = match event {
            Some(e) => e,
            None => continue,
        };

        match event {
            Event::Key(key) => app.handle_key(key, Instant::now()),
            Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
            Event::Resize(width, height) => app.terminal_size = (width, height),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    /// Helper to create a key event
    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_mock_event_reader() {
        let events = vec![
            key_event(KeyCode::Char('a')),
            key_event(KeyCode::Char('b')),
            key_event(KeyCode::Enter),
        ];

        let mut reader = MockEventReader::new(events);

        // Should return events in order
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('b'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }))
        ));

        // Should return None when no more events
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        // Just verify that CrosstermEventReader exists and implements the trait
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_parse_page_accepts_names_and_paths() {
        assert_eq!(parse_page("services"), Ok(Page::Services));
        assert_eq!(parse_page("/index.html"), Ok(Page::Home));
        assert_eq!(parse_page("About"), Ok(Page::About));
        assert!(parse_page("checkout").is_err());
    }

    #[tokio::test]
    async fn test_run_application_missing_catalog_file() {
        let args = Args {
            page: Some(Page::Home),
            catalog: Some(PathBuf::from("/nonexistent/catalog.json")),
            theme: None,
            debug: false,
        };

        let result = run_application(args).await;
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read catalog file"));
    }

    #[tokio::test]
    async fn test_run_application_unknown_theme() {
        let args = Args {
            page: Some(Page::Home),
            catalog: None,
            theme: Some("Pistachio Swirl".to_string()),
            debug: false,
        };

        let result = run_application(args).await;
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Unknown theme"));
    }

    #[tokio::test]
    async fn test_run_application_debug_mode_exits_cleanly() {
        // Debug mode prints the catalog and returns before any terminal
        // setup, so it is safe to run headless
        let args = Args {
            page: Some(Page::Services),
            catalog: None,
            theme: None,
            debug: true,
        };

        let result = run_application(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_application_rejects_invalid_catalog() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, r#"{"products": []}"#).unwrap();

        let args = Args {
            page: Some(Page::Home),
            catalog: Some(path),
            theme: None,
            debug: true,
        };

        let result = run_application(args).await;
        assert!(result.is_err());
        let err_msg = format!("{:?}", result.unwrap_err());
        assert!(err_msg.contains("no products"));
    }
}
