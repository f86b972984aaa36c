//! Home screen: header navigation, package cards and location footer

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::booking::Package;
use crate::cli::tui::booking::state::HomeState;
use crate::cli::tui::booking::theme::Theme;
use crate::config::SiteConfig;

pub fn render(frame: &mut Frame, config: &SiteConfig, state: &HomeState, theme: &Theme) {
    let footer_height = footer_height(config.locations.len());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(4),             // Hero
            Constraint::Min(8),                // Package cards
            Constraint::Length(footer_height), // Locations
            Constraint::Length(1),             // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], config, theme);
    render_hero(frame, chunks[1], config, theme);
    render_packages(frame, chunks[2], state, theme);
    render_footer(frame, chunks[3], config, theme);
    render_help_bar(frame, chunks[4], theme);
}

/// Rows for the locations footer: one per location plus its border, capped
/// so the package cards keep their space
pub fn footer_height(locations: usize) -> u16 {
    const MAX_LISTED: u16 = 8;
    u16::try_from(locations)
        .unwrap_or(u16::MAX)
        .clamp(1, MAX_LISTED)
        .saturating_add(2)
}

fn render_header(frame: &mut Frame, area: Rect, config: &SiteConfig, theme: &Theme) {
    let mut spans = vec![
        Span::styled(format!(" {} ", config.business.name), theme.brand),
        Span::raw("  "),
    ];
    for (i, link) in config.navigation.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", theme.muted));
        }
        spans.push(Span::styled(link.label.as_str(), theme.label));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.muted),
    );
    frame.render_widget(header, area);
}

fn render_hero(frame: &mut Frame, area: Rect, config: &SiteConfig, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Birthday Parties that Bounce!",
            theme.highlight,
        )),
        Line::from(config.business.tagline.as_str()),
        Line::from(Span::styled(
            format!("Call {} or email {}", config.business.phone, config.business.email),
            theme.muted,
        )),
    ];
    let hero = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hero, area);
}

fn render_packages(frame: &mut Frame, area: Rect, state: &HomeState, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, package) in Package::ALL.iter().enumerate() {
        let selected = i == state.selected_package;
        let accent = Style::default().fg(theme.package_color(*package));

        let mut lines = vec![
            Line::from(Span::styled(
                package.price_label(),
                accent.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} min", package.duration_minutes()),
                theme.muted,
            )),
            Line::from(""),
        ];
        lines.extend(
            package
                .features()
                .iter()
                .map(|feature| Line::from(format!("• {}", feature))),
        );

        let border_style = if selected { theme.focused } else { accent };
        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", package.display_name()))
                    .borders(Borders::ALL)
                    .border_type(if selected {
                        BorderType::Thick
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(border_style),
            );
        frame.render_widget(card, columns[i]);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, config: &SiteConfig, theme: &Theme) {
    let lines: Vec<Line> = if config.locations.is_empty() {
        vec![Line::from(Span::styled("No locations configured", theme.muted))]
    } else {
        config
            .locations
            .iter()
            .map(|location| {
                let mut spans = vec![
                    Span::styled(location.name.as_str(), theme.highlight),
                    Span::raw(format!("  {}", location.address)),
                ];
                if !location.hours.is_empty() {
                    spans.push(Span::styled(format!("  {}", location.hours), theme.muted));
                }
                Line::from(spans)
            })
            .collect()
    };

    let footer = Paragraph::new(lines).block(
        Block::default()
            .title(" Our Parks ")
            .borders(Borders::TOP)
            .border_style(theme.muted),
    );
    frame.render_widget(footer, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help_text = Line::from(vec![
        Span::raw(" "),
        Span::styled("[←/→]", theme.highlight),
        Span::raw(" Browse  "),
        Span::styled("[Enter]", theme.highlight),
        Span::raw(" Book this package  "),
        Span::styled("[b]", theme.highlight),
        Span::raw(" Book a party  "),
        Span::styled("[q]", theme.highlight),
        Span::raw(" Quit"),
    ]);

    frame.render_widget(Paragraph::new(help_text).style(theme.help_bar), area);
}
