//! Drawing for the kiosk: header, the current page's body, footer key
//! hints, then any floating surfaces on top. Every widget draws into the
//! rects [`layout::compute`] hands out, the same ones mouse dispatch
//! hit-tests against.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::forms::FieldKind;
use crate::pages::copy;
use crate::ui::app::{App, Focus};
use crate::ui::form_panel::FormPanel;
use crate::ui::layout::{self, PageLayout, PopupRects};
use crate::ui::panels::{PanelGroup, PanelKind};

pub fn render(frame: &mut Frame, app: &App) {
    let page = layout::compute(app, frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg).fg(app.theme.fg)),
        frame.area(),
    );

    render_header(frame, app, page.header);

    if let Some(area) = page.search {
        render_search(frame, app, area);
    }
    render_cards(frame, app, &page);
    if let Some(area) = page.testimonials {
        render_testimonials(frame, app, area);
    }
    if let Some(panels) = &app.panels {
        render_panels(frame, app, panels, &page);
    }
    if let Some(form) = &app.form {
        render_form(frame, app, form, &page);
    }

    render_footer(frame, app, page.footer);

    // floating surfaces, back to front
    if let Some(rects) = page.popover {
        render_popover(frame, app, rects);
    }
    if let Some(rects) = page.overlay {
        render_overlay(frame, app, rects);
    }
    if let Some(area) = page.notice {
        render_notice(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(Span::styled(
        format!("  Sugarplum Bakery · {}  ", app.page.title()),
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    ));

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent)),
    );
    frame.render_widget(header, area);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let border = if focused {
        app.theme.accent
    } else {
        app.theme.fg_dim
    };

    let text = if app.search_query().is_empty() && !focused {
        Line::from(Span::styled(
            "Press / to filter cakes by name or flavour",
            Style::default().fg(app.theme.fg_dim),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                app.search_query().to_string(),
                Style::default().fg(app.theme.secondary),
            ),
            Span::styled(
                if focused { "_" } else { "" },
                Style::default().fg(app.theme.fg_dim),
            ),
        ])
    };

    let search = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(search, area);
}

fn render_cards(frame: &mut Frame, app: &App, page: &PageLayout) {
    let Some(mount) = app.grid_mount() else {
        return;
    };
    let Some(gallery) = app.gallery(mount) else {
        return;
    };
    let gallery_focused = app.focus == Focus::Gallery(mount);

    for (pos, id, rect) in &page.cards {
        let Some(record) = app.store.product_by_id(*id) else {
            continue;
        };
        let selected = gallery_focused && *pos == gallery.selected_pos();
        let border = if selected {
            app.theme.accent
        } else {
            app.theme.fg_dim
        };
        let card_style = if selected {
            Style::default().bg(app.theme.selection_bg)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                record.name.clone(),
                Style::default()
                    .fg(app.theme.fg)
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(border))
            .style(card_style);
        let inner = block.inner(*rect);
        frame.render_widget(block, *rect);

        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                record.category.clone(),
                Style::default().fg(app.theme.secondary),
            )),
            Line::from(record.description.clone()),
            Line::from(Span::styled(
                record.image_ref.clone(),
                Style::default().fg(app.theme.fg_dim),
            )),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(body, inner);
    }
}

fn render_testimonials(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for quote in app.store.testimonials() {
        lines.push(Line::from(format!("\u{201c}{}\u{201d}", quote.text)));
        lines.push(Line::from(Span::styled(
            format!("    {}", quote.author),
            Style::default().fg(app.theme.fg_dim),
        )));
        lines.push(Line::from(""));
    }

    let testimonials = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(copy::TESTIMONIALS_TITLE)
                .border_style(Style::default().fg(app.theme.fg_dim)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(testimonials, area);
}

fn render_panels(frame: &mut Frame, app: &App, panels: &PanelGroup, page: &PageLayout) {
    let focused = app.focus == Focus::Panels;

    for (idx, rect) in page.toggles.iter().enumerate() {
        let Some(entry) = panels.entries().get(idx) else {
            continue;
        };
        let open = panels.is_open(idx);
        let at_cursor = focused && idx == panels.cursor();

        let mut style = Style::default().fg(if open { app.theme.accent } else { app.theme.fg });
        if open {
            style = style.add_modifier(Modifier::BOLD);
        }
        if at_cursor {
            style = style.bg(app.theme.selection_bg);
        }

        let line = match panels.kind {
            PanelKind::Accordion => {
                let marker = if open { "\u{25be}" } else { "\u{25b8}" };
                Line::from(Span::styled(format!("{marker} {}", entry.toggle), style))
            }
            PanelKind::Tabs => Line::from(Span::styled(format!("  {}  ", entry.toggle), style)),
        };
        frame.render_widget(Paragraph::new(line), *rect);
    }

    let Some(body_rect) = page.panel_body else {
        return;
    };
    let body = match panels.open_index().and_then(|idx| panels.entries().get(idx)) {
        Some(entry) => Paragraph::new(entry.body.clone()).wrap(Wrap { trim: true }),
        // tabs before first interaction: no panel is active yet
        None => Paragraph::new(Span::styled(
            "Choose a tab to read more.",
            Style::default().fg(app.theme.fg_dim),
        )),
    };
    match panels.kind {
        PanelKind::Tabs => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.fg_dim));
            let inner = block.inner(body_rect);
            frame.render_widget(block, body_rect);
            frame.render_widget(body, inner);
        }
        PanelKind::Accordion => frame.render_widget(body, body_rect),
    }
}

fn render_form(frame: &mut Frame, app: &App, form: &FormPanel, page: &PageLayout) {
    let focused = app.focus == Focus::Form;

    for (idx, rect) in page.fields.iter().enumerate() {
        let Some(field) = form.spec.fields.get(idx) else {
            continue;
        };
        let active = focused && idx == form.cursor();
        let border = if active {
            app.theme.accent
        } else {
            app.theme.fg_dim
        };

        let value = form.value(idx);
        let text = match field.kind {
            FieldKind::Select(_) if value.is_empty() => Line::from(Span::styled(
                "(Left/Right to choose)",
                Style::default().fg(app.theme.fg_dim),
            )),
            FieldKind::Select(_) => Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(app.theme.secondary),
            )),
            _ => Line::from(vec![
                Span::raw(value.to_string()),
                Span::styled(
                    if active { "_" } else { "" },
                    Style::default().fg(app.theme.fg_dim),
                ),
            ]),
        };

        let widget = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.label)
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(widget, *rect);
    }

    if let Some(rect) = page.submit {
        let submit = Paragraph::new(Span::styled(
            form.spec.submit_label,
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.accent)),
        );
        frame.render_widget(submit, rect);
    }

    if let (Some(rect), Some(message)) = (page.confirmation, form.confirmation()) {
        let confirmation = Paragraph::new(message.to_string())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(app.theme.success))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Thank you")
                    .border_style(Style::default().fg(app.theme.success)),
            );
        frame.render_widget(confirmation, rect);
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.overlay.is_open() {
        "[Esc/x] Close preview"
    } else if app.form.as_ref().is_some_and(|f| f.notice().is_some()) {
        "[Enter] Dismiss"
    } else {
        match app.focus {
            Focus::Gallery(_) if app.page.has_mount(crate::pages::MountId::SearchInput) => {
                "[\u{2190}\u{2192}\u{2191}\u{2193}] Browse  [Enter] Preview  [/] Search  [o] Offer  [Tab] Switch  [Q] Quit"
            }
            Focus::Gallery(_) => {
                "[\u{2190}\u{2192}\u{2191}\u{2193}] Browse  [Enter] Preview  [Tab] Switch  [Q] Quit"
            }
            Focus::Search => "[Type] Filter  [Enter] Back to cakes  [Esc] Done",
            Focus::Panels => "[\u{2191}\u{2193}] Choose  [Enter] Open  [1-9] Jump  [Tab] Switch  [Q] Quit",
            Focus::Form => "[\u{2191}\u{2193}] Field  [Enter] Submit  [Tab] Switch  [Ctrl+C] Quit",
        }
    };

    let footer = Paragraph::new(hints).style(Style::default().fg(app.theme.fg_dim));
    frame.render_widget(footer, area);
}

fn render_popover(frame: &mut Frame, app: &App, rects: PopupRects) {
    frame.render_widget(Clear, rects.frame);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            copy::OFFER_TITLE,
            Style::default()
                .fg(app.theme.secondary)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(app.theme.secondary))
        .style(Style::default().bg(app.theme.bg));
    let inner = block.inner(rects.frame);
    frame.render_widget(block, rects.frame);

    let body = Paragraph::new(copy::OFFER_BODY).wrap(Wrap { trim: true });
    frame.render_widget(body, inner);

    render_close_button(frame, app, rects.close);
}

fn render_overlay(frame: &mut Frame, app: &App, rects: PopupRects) {
    frame.render_widget(Clear, rects.frame);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Preview ",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(app.theme.accent))
        .style(Style::default().bg(app.theme.bg));
    let inner = block.inner(rects.frame);
    frame.render_widget(block, rects.frame);

    // a placeholder tile stands in for the photo
    let mut lines = Vec::new();
    let fill = inner.height.saturating_sub(3) / 2;
    for _ in 0..fill {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", app.overlay.image_ref()),
        Style::default().fg(app.theme.fg_dim),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        app.overlay.caption().to_string(),
        Style::default().fg(app.theme.fg),
    )));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);

    render_close_button(frame, app, rects.close);
}

fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.form.as_ref().and_then(FormPanel::notice) else {
        return;
    };
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Check the form")
        .border_style(Style::default().fg(app.theme.error))
        .style(Style::default().bg(app.theme.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(app.theme.fg_dim),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}

fn render_close_button(frame: &mut Frame, app: &App, rect: Rect) {
    let close = Paragraph::new(Span::styled(
        "[x]",
        Style::default().fg(app.theme.error),
    ));
    frame.render_widget(close, rect);
}
