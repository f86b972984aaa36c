//! Booking confirmation shown inside the modal

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use crate::booking::BookingWizard;
use crate::cli::tui::booking::modal::{centered_rect, render_modal_background};
use crate::cli::tui::booking::theme::Theme;
use crate::config::SiteConfig;

pub fn render(frame: &mut Frame, wizard: &BookingWizard, config: &SiteConfig, theme: &Theme) {
    let area = centered_rect(60, 60, frame.area());
    render_modal_background(frame, area);

    let block = Block::default()
        .title(" ✅ Party Booked! ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.success);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Headline
            Constraint::Min(6),    // Details
            Constraint::Length(2), // Follow-up
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let Some(confirmation) = wizard.confirmation() else {
        return;
    };

    let headline = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Booking reference "),
            Span::styled(confirmation.reference.as_str(), theme.highlight),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(headline).alignment(Alignment::Center),
        chunks[0],
    );

    render_details(frame, chunks[1], wizard, theme);

    let follow_up = Paragraph::new(Line::from(Span::styled(
        format!(
            "Our party team will call you within 24 hours. Questions? {}",
            config.business.phone
        ),
        theme.muted,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(follow_up, chunks[2]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", theme.highlight),
        Span::raw(" Done"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn render_details(frame: &mut Frame, area: Rect, wizard: &BookingWizard, theme: &Theme) {
    let Some(confirmation) = wizard.confirmation() else {
        return;
    };
    let request = &confirmation.request;

    let rows = vec![
        Row::new(vec![
            Cell::from("Package"),
            Cell::from(format!(
                "{} · {}",
                request.package.display_name(),
                request.package.price_label()
            )),
        ]),
        Row::new(vec![
            Cell::from("Birthday"),
            Cell::from(format!("{} (age {})", request.child_name, request.child_age)),
        ]),
        Row::new(vec![
            Cell::from("When"),
            Cell::from(format!(
                "{} at {}",
                request.party_date.format("%A, %d %B %Y"),
                request.party_time
            )),
        ]),
        Row::new(vec![
            Cell::from("Guests"),
            Cell::from(request.guest_count.as_str()),
        ]),
        Row::new(vec![
            Cell::from("Contact"),
            Cell::from(format!("{} · {}", request.parent_name, request.email)),
        ]),
    ];

    let table = Table::new(rows, vec![Constraint::Length(10), Constraint::Min(30)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.muted),
        )
        .column_spacing(2);

    frame.render_widget(table, area);
}
