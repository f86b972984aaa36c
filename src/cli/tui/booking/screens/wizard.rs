//! The booking modal: step progress, fields with inline errors, summary

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::booking::{BookingWizard, Field, Package, Step};
use crate::cli::tui::booking::modal::{centered_rect, render_modal_background};
use crate::cli::tui::booking::state::FormView;
use crate::cli::tui::booking::theme::Theme;

pub fn render(frame: &mut Frame, wizard: &BookingWizard, view: &FormView, theme: &Theme) {
    let area = centered_rect(70, 80, frame.area());
    render_modal_background(frame, area);

    let block = Block::default()
        .title(" 🎂 Book a Birthday Party ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.modal_border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let step = wizard.step();
    let summary_height = if step.is_last() { 7 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),              // Progress
            Constraint::Min(6),                 // Fields
            Constraint::Length(summary_height), // Summary
            Constraint::Length(2),              // Status
            Constraint::Length(1),              // Help
        ])
        .split(inner);

    render_progress(frame, chunks[0], step, theme);
    render_fields(frame, chunks[1], wizard, view, theme);
    if step.is_last() {
        render_summary(frame, chunks[2], wizard, theme);
    }
    render_status(frame, chunks[3], wizard, view, theme);
    render_help(frame, chunks[4], step, theme);
}

fn render_progress(frame: &mut Frame, area: Rect, current: Step, theme: &Theme) {
    let mut spans = Vec::new();
    for step in Step::ALL {
        if step.index() > 0 {
            spans.push(Span::styled("  ──  ", theme.muted));
        }
        let style = if step == current {
            theme.focused
        } else if step < current {
            theme.success
        } else {
            theme.muted
        };
        spans.push(Span::styled(
            format!(
                "{} {}",
                Theme::step_marker(step.index(), current.index()),
                step.title()
            ),
            style,
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_fields(
    frame: &mut Frame,
    area: Rect,
    wizard: &BookingWizard,
    view: &FormView,
    theme: &Theme,
) {
    let step = wizard.step();
    let focused = view.focused_field(step);
    let mut lines = Vec::new();

    for field in step.fields() {
        let is_focused = *field == focused;
        let label_style = if is_focused { theme.focused } else { theme.label };
        let marker = if is_focused { "▸ " } else { "  " };
        let optional = if *field == Field::Message { " (optional)" } else { "" };

        let mut spans = vec![
            Span::styled(marker, theme.focused),
            Span::styled(format!("{:<18}", format!("{}{}", field.label(), optional)), label_style),
        ];
        spans.extend(value_spans(wizard, view, *field, is_focused, theme));
        lines.push(Line::from(spans));

        match wizard.errors().get(*field) {
            Some(message) => lines.push(Line::from(vec![
                Span::raw(" ".repeat(20)),
                Span::styled(format!("⚠ {}", message), theme.error),
            ])),
            None => lines.push(Line::from("")),
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn value_spans<'a>(
    wizard: &'a BookingWizard,
    view: &'a FormView,
    field: Field,
    is_focused: bool,
    theme: &Theme,
) -> Vec<Span<'a>> {
    let value = wizard.form().get(field);

    if field.is_select() {
        let shown = match field {
            Field::Package => value
                .parse::<Package>()
                .map(|p| format!("{} · {}", p.display_name(), p.price_label()))
                .unwrap_or_default(),
            _ => value.to_string(),
        };
        let text = if shown.is_empty() {
            Span::styled("select", theme.muted)
        } else {
            Span::raw(shown)
        };
        return if is_focused {
            vec![
                Span::styled("‹ ", theme.highlight),
                text,
                Span::styled(" ›", theme.highlight),
            ]
        } else {
            vec![text]
        };
    }

    if is_focused {
        // Render text with cursor
        let text = view.input.value();
        let cursor = view.input.cursor().min(text.chars().count());
        let split = text
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        vec![
            Span::raw(&text[..split]),
            Span::styled("█", Style::default()),
            Span::raw(&text[split..]),
        ]
    } else if value.is_empty() {
        vec![Span::styled(placeholder(field), theme.muted)]
    } else {
        vec![Span::raw(value)]
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::ParentName => "Your full name",
        Field::Email => "you@example.com",
        Field::Phone => "10-digit mobile number",
        Field::ChildName => "Birthday star's name",
        Field::PartyDate => "YYYY-MM-DD",
        Field::Message => "Allergies, themes, anything else",
        _ => "",
    }
}

fn render_summary(frame: &mut Frame, area: Rect, wizard: &BookingWizard, theme: &Theme) {
    let form = wizard.form();
    let package = form.package.parse::<Package>().ok();

    let lines = vec![
        Line::from(vec![
            Span::styled("Package   ", theme.muted),
            Span::raw(
                package
                    .map(|p| format!("{} ({} min)", p.display_name(), p.duration_minutes()))
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]),
        Line::from(vec![
            Span::styled("Price     ", theme.muted),
            Span::styled(
                package.map(|p| p.price_label()).unwrap_or_else(|| "-".to_string()),
                theme.highlight,
            ),
        ]),
        Line::from(vec![
            Span::styled("Birthday  ", theme.muted),
            Span::raw(format!("{}, turning {}", form.child_name, form.child_age)),
        ]),
        Line::from(vec![
            Span::styled("Contact   ", theme.muted),
            Span::raw(format!("{} · {} · {}", form.parent_name, form.email, form.phone)),
        ]),
    ];

    let summary = Paragraph::new(lines).block(
        Block::default()
            .title(" Booking Summary ")
            .borders(Borders::ALL)
            .border_style(theme.muted),
    );
    frame.render_widget(summary, area);
}

fn render_status(
    frame: &mut Frame,
    area: Rect,
    wizard: &BookingWizard,
    view: &FormView,
    theme: &Theme,
) {
    let line = if wizard.is_submitting() {
        Line::from(vec![
            Span::styled(view.spinner(), theme.highlight),
            Span::raw(" Booking your party..."),
        ])
    } else if let Some(failure) = wizard.last_failure() {
        Line::from(Span::styled(
            format!("✗ {}. Press Enter to try again.", failure),
            theme.error,
        ))
    } else if !wizard.errors().is_empty() {
        Line::from(Span::styled(
            format!("{} field(s) need attention", wizard.errors().len()),
            theme.error,
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_help(frame: &mut Frame, area: Rect, step: Step, theme: &Theme) {
    let next_label = if step.is_last() { " Confirm booking  " } else { " Next  " };
    let mut spans = vec![
        Span::styled("[Enter]", theme.highlight),
        Span::raw(next_label),
    ];
    if step.index() > 0 {
        spans.push(Span::styled("[PgUp]", theme.highlight));
        spans.push(Span::raw(" Back  "));
    }
    spans.extend([
        Span::styled("[Tab]", theme.highlight),
        Span::raw(" Field  "),
        Span::styled("[←/→]", theme.highlight),
        Span::raw(" Choose  "),
        Span::styled("[Esc]", theme.highlight),
        Span::raw(" Close"),
    ]);

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(theme.muted),
        area,
    );
}
