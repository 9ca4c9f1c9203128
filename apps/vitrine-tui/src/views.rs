//! Rendering: tab bar, chip row, card lists, and the lightbox overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use vitrine_domain::{Faceted, GalleryImage, PastTeam, Project, Resource, Student};
use vitrine_filter::partition_by;
use vitrine_lightbox::Focus;

use crate::app::{App, Browser, ChipBrowser, Page};

/// How a record renders as a list row and inside the overlay.
pub trait Card: Faceted {
    fn summary(&self) -> String;
    fn details(&self) -> Vec<String>;
}

impl Card for GalleryImage {
    fn summary(&self) -> String {
        format!("{} ({}, {})", self.description, self.year, self.category)
    }

    fn details(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            format!("{} / {}", self.year, self.category),
            self.src.clone(),
        ]
    }
}

impl Card for Project {
    fn summary(&self) -> String {
        format!("{} ({}, {})", self.title, self.year, self.category)
    }

    fn details(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone(), self.description.clone()];
        if let Some(github) = &self.github {
            lines.push(format!("Code: {github}"));
        }
        if let Some(demo) = &self.demo {
            lines.push(format!("Demo: {demo}"));
        }
        lines
    }
}

impl Card for Student {
    fn summary(&self) -> String {
        format!("{} ({})", self.name, self.batch)
    }

    fn details(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} [{}]", self.name, self.initials()),
            format!("Batch {}", self.batch),
        ];
        if let Some(email) = &self.email {
            lines.push(email.clone());
        }
        for cert in &self.certifications {
            lines.push(format!("- {cert}"));
        }
        lines
    }
}

impl Card for Resource {
    fn summary(&self) -> String {
        format!("{} [{}]", self.title, self.category.display_name())
    }

    fn details(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone(), self.description.clone(), self.url.clone()];
        if let Some(size) = &self.size {
            lines.push(size.clone());
        }
        lines
    }
}

impl Card for PastTeam {
    fn summary(&self) -> String {
        format!("Team of {}", self.year)
    }

    fn details(&self) -> Vec<String> {
        let mut lines = vec![format!("Team of {}", self.year), self.description.clone()];
        lines.extend(self.members.iter().cloned());
        lines
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tabs(f, chunks[0], app.page);
    render_page(f, chunks[1], app);
    render_help(f, chunks[2]);
}

fn render_tabs(f: &mut Frame, area: Rect, active: Page) {
    let mut spans = Vec::new();
    for page in Page::ALL {
        let style = if page == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", page.title()), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = "Tab pages | j/k move | f chip | d dimension | r reset | Enter open | n/p step | Esc close | q quit";
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_page(f: &mut Frame, area: Rect, app: &App) {
    match app.page {
        Page::Gallery => render_browser(f, area, &app.gallery),
        Page::Projects => render_chip_browser(f, area, &app.projects),
        Page::Students => render_browser(f, area, &app.students),
        Page::Announcements => render_announcements(f, area, app),
        Page::Resources => render_browser(f, area, &app.resources),
        Page::PastTeams => render_browser(f, area, &app.past_teams),
    }
}

fn render_browser<T: Card>(f: &mut Frame, area: Rect, browser: &Browser<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    // Chip row: every dimension with its current value, active one marked.
    let mut spans = vec![Span::raw("Filter: ")];
    for (index, dimension) in browser.collection().dimensions().iter().enumerate() {
        let value = browser.selection().value(&dimension.key).unwrap_or("All");
        let style = if index == browser.active_dimension() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{}: {}  ", dimension.key, value), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let visible = browser.visible();
    render_cards(f, chunks[1], &visible, browser.cursor());
    render_overlay(f, browser.focus(), &visible);
}

fn render_chip_browser<T: Card>(f: &mut Frame, area: Rect, browser: &ChipBrowser<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let line = Line::from(vec![
        Span::raw("Filter: "),
        Span::styled(
            browser.chip().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), chunks[0]);

    let visible = browser.visible();
    render_cards(f, chunks[1], &visible, browser.cursor());
    render_overlay(f, browser.focus(), &visible);
}

fn render_cards<T: Card>(f: &mut Frame, area: Rect, visible: &[&T], cursor: usize) {
    if visible.is_empty() {
        // The explicit empty state, never silence.
        f.render_widget(
            Paragraph::new("No items found for the selected filters.")
                .style(Style::default().fg(Color::Gray)),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = if index == cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(item.summary()).style(style)
        })
        .collect();
    f.render_widget(List::new(items), area);
}

fn render_announcements(f: &mut Frame, area: Rect, app: &App) {
    let (pinned, regular) = partition_by(&app.announcements, |a| a.pinned);

    let mut lines = Vec::new();
    if !pinned.is_empty() {
        lines.push(Line::styled(
            "Pinned",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for a in &pinned {
            lines.push(Line::raw(format!(
                "  {} [{}] {}",
                a.formatted_date(),
                a.category.display_name(),
                a.title
            )));
        }
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(
        "Recent",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    for a in &regular {
        lines.push(Line::raw(format!(
            "  {} [{}] {}",
            a.formatted_date(),
            a.category.display_name(),
            a.title
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Centered overlay for the focused item, with the `i / N` footer.
fn render_overlay<T: Card>(f: &mut Frame, focus: Focus, visible: &[&T]) {
    let Some(id) = focus.focused_id() else {
        return;
    };
    let Some(item) = visible.iter().find(|item| item.id() == id) else {
        return;
    };

    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = item.details().into_iter().map(Line::raw).collect();
    if let Some((position, total)) = focus.position(visible) {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("{position} / {total}"),
            Style::default().fg(Color::Gray),
        ));
    }

    let block = Block::default().borders(Borders::ALL).title(" View ");
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
