//! Application state and key handling.

use crossterm::event::KeyCode;
use ratatui::Frame;
use vitrine_content::ContentBundle;
use vitrine_domain::{
    Announcement, Faceted, GalleryImage, PastTeam, Project, Resource, Student,
};
use vitrine_filter::{Collection, Dimension, FilterSelection, ALL};
use vitrine_lightbox::{Direction, Focus};

use crate::views;

/// The pages of the site, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Gallery,
    Projects,
    Students,
    Announcements,
    Resources,
    PastTeams,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Gallery,
        Page::Projects,
        Page::Students,
        Page::Announcements,
        Page::Resources,
        Page::PastTeams,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Gallery => "Gallery",
            Page::Projects => "Projects",
            Page::Students => "Students",
            Page::Announcements => "Announcements",
            Page::Resources => "Resources",
            Page::PastTeams => "Past Teams",
        }
    }

    fn next(&self) -> Page {
        let index = Page::ALL.iter().position(|p| p == self).unwrap_or(0);
        Page::ALL[(index + 1) % Page::ALL.len()]
    }
}

/// One page's browsing state: a static collection, the per-dimension
/// selection, the highlighted card, and the lightbox focus.
pub struct Browser<T: Faceted> {
    collection: Collection<T>,
    selection: FilterSelection,
    /// Which declared dimension the `f` key cycles.
    active_dimension: usize,
    cursor: usize,
    focus: Focus,
}

impl<T: Faceted> Browser<T> {
    pub fn new(items: Vec<T>, dimensions: Vec<Dimension>) -> Self {
        let collection = Collection::new(items, dimensions);
        let selection = collection.selection();
        Self {
            collection,
            selection,
            active_dimension: 0,
            cursor: 0,
            focus: Focus::Idle,
        }
    }

    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active_dimension(&self) -> usize {
        self.active_dimension
    }

    pub fn visible(&self) -> Vec<&T> {
        self.collection.visible(&self.selection)
    }

    /// Switch which dimension the `f` key cycles.
    pub fn next_dimension(&mut self) {
        let n = self.collection.dimensions().len();
        if n > 0 {
            self.active_dimension = (self.active_dimension + 1) % n;
        }
    }

    /// Advance the active dimension's chip to the next domain value,
    /// wrapping back to `"All"`.
    pub fn cycle_chip(&mut self) {
        let Some(dimension) = self.collection.dimensions().get(self.active_dimension) else {
            return;
        };
        let key = dimension.key.clone();
        let Some(domain) = self.collection.domain(&key) else {
            return;
        };
        let current = self.selection.value(&key).unwrap_or(ALL);
        let index = domain.iter().position(|v| v == current).unwrap_or(0);
        let value = domain[(index + 1) % domain.len()].clone();

        match self.collection.set(&mut self.selection, &key, &value) {
            Ok(()) => {
                tracing::debug!(dimension = %key, %value, "filter changed");
                self.after_filter_change();
            }
            Err(err) => {
                // Chips come from the domain, so this is unreachable in
                // practice; log instead of crashing the console.
                tracing::warn!(%err, "rejected filter update");
            }
        }
    }

    /// Reset every dimension back to `"All"`.
    pub fn reset_filters(&mut self) {
        self.selection.reset();
        self.after_filter_change();
    }

    fn after_filter_change(&mut self) {
        let visible = self.collection.visible(&self.selection);
        self.cursor = self.cursor.min(visible.len().saturating_sub(1));
        self.focus.retain_visible(&visible);
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let len = len as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    /// Open the lightbox on the highlighted card.
    pub fn open_cursor(&mut self) {
        let visible = self.collection.visible(&self.selection);
        let Some(item) = visible.get(self.cursor) else {
            return;
        };
        let id = item.id();
        if let Err(err) = self.focus.open(&visible, id) {
            tracing::warn!(%err, "lightbox open rejected");
        }
    }

    pub fn close(&mut self) {
        self.focus.close();
    }

    pub fn step(&mut self, direction: Direction) {
        let visible = self.collection.visible(&self.selection);
        self.focus.step(&visible, direction);
    }
}

/// One page's browsing state for the combined single-row chip filter
/// (the projects page), where a chip matches on any dimension.
pub struct ChipBrowser<T: Faceted> {
    collection: Collection<T>,
    chips: Vec<String>,
    chip: usize,
    cursor: usize,
    focus: Focus,
}

impl<T: Faceted> ChipBrowser<T> {
    pub fn new(items: Vec<T>, dimensions: Vec<Dimension>) -> Self {
        let collection = Collection::new(items, dimensions);
        let chips = collection.combined_chips();
        Self {
            collection,
            chips,
            chip: 0,
            cursor: 0,
            focus: Focus::Idle,
        }
    }

    pub fn chip(&self) -> &str {
        &self.chips[self.chip]
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn visible(&self) -> Vec<&T> {
        self.collection.visible_any(&self.chips[self.chip])
    }

    pub fn cycle_chip(&mut self) {
        self.chip = (self.chip + 1) % self.chips.len();
        tracing::debug!(chip = %self.chips[self.chip], "combined filter changed");
        let visible = self.collection.visible_any(&self.chips[self.chip]);
        self.cursor = self.cursor.min(visible.len().saturating_sub(1));
        self.focus.retain_visible(&visible);
    }

    pub fn reset_filters(&mut self) {
        self.chip = 0;
        self.cursor = 0;
        let visible = self.collection.visible_any(&self.chips[self.chip]);
        self.focus.retain_visible(&visible);
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let len = len as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn open_cursor(&mut self) {
        let visible = self.collection.visible_any(&self.chips[self.chip]);
        let Some(item) = visible.get(self.cursor) else {
            return;
        };
        let id = item.id();
        if let Err(err) = self.focus.open(&visible, id) {
            tracing::warn!(%err, "lightbox open rejected");
        }
    }

    pub fn close(&mut self) {
        self.focus.close();
    }

    pub fn step(&mut self, direction: Direction) {
        let visible = self.collection.visible_any(&self.chips[self.chip]);
        self.focus.step(&visible, direction);
    }
}

/// Main application state.
pub struct App {
    pub page: Page,
    pub gallery: Browser<GalleryImage>,
    pub projects: ChipBrowser<Project>,
    pub students: Browser<Student>,
    pub announcements: Vec<Announcement>,
    pub resources: Browser<Resource>,
    pub past_teams: Browser<PastTeam>,
}

impl App {
    pub fn new(bundle: ContentBundle) -> Self {
        Self {
            page: Page::Gallery,
            gallery: Browser::new(
                bundle.gallery,
                vec![
                    Dimension::descending("year"),
                    Dimension::ascending("category"),
                ],
            ),
            projects: ChipBrowser::new(
                bundle.projects,
                vec![
                    Dimension::ascending("category"),
                    Dimension::descending("year"),
                ],
            ),
            students: Browser::new(bundle.students, vec![Dimension::ascending("batch")]),
            announcements: bundle.announcements,
            resources: Browser::new(bundle.resources, vec![Dimension::ascending("category")]),
            past_teams: Browser::new(bundle.past_teams, vec![Dimension::descending("year")]),
        }
    }

    /// Handle a key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => {
                self.page = self.page.next();
            }
            KeyCode::Esc => self.close_overlay(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Char('f') => self.cycle_chip(),
            KeyCode::Char('d') => self.next_dimension(),
            KeyCode::Char('r') => self.reset_filters(),
            KeyCode::Enter => self.open_cursor(),
            KeyCode::Right | KeyCode::Char('n') => self.step(Direction::Next),
            KeyCode::Left | KeyCode::Char('p') => self.step(Direction::Prev),
            _ => {}
        }
        false
    }

    fn close_overlay(&mut self) {
        match self.page {
            Page::Gallery => self.gallery.close(),
            Page::Projects => self.projects.close(),
            Page::Students => self.students.close(),
            Page::Announcements => {}
            Page::Resources => self.resources.close(),
            Page::PastTeams => self.past_teams.close(),
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.page {
            Page::Gallery => self.gallery.move_cursor(delta),
            Page::Projects => self.projects.move_cursor(delta),
            Page::Students => self.students.move_cursor(delta),
            Page::Announcements => {}
            Page::Resources => self.resources.move_cursor(delta),
            Page::PastTeams => self.past_teams.move_cursor(delta),
        }
    }

    fn cycle_chip(&mut self) {
        match self.page {
            Page::Gallery => self.gallery.cycle_chip(),
            Page::Projects => self.projects.cycle_chip(),
            Page::Students => self.students.cycle_chip(),
            Page::Announcements => {}
            Page::Resources => self.resources.cycle_chip(),
            Page::PastTeams => self.past_teams.cycle_chip(),
        }
    }

    fn next_dimension(&mut self) {
        match self.page {
            Page::Gallery => self.gallery.next_dimension(),
            Page::Students => self.students.next_dimension(),
            Page::Resources => self.resources.next_dimension(),
            Page::PastTeams => self.past_teams.next_dimension(),
            Page::Projects | Page::Announcements => {}
        }
    }

    fn reset_filters(&mut self) {
        match self.page {
            Page::Gallery => self.gallery.reset_filters(),
            Page::Projects => self.projects.reset_filters(),
            Page::Students => self.students.reset_filters(),
            Page::Announcements => {}
            Page::Resources => self.resources.reset_filters(),
            Page::PastTeams => self.past_teams.reset_filters(),
        }
    }

    fn open_cursor(&mut self) {
        match self.page {
            Page::Gallery => self.gallery.open_cursor(),
            Page::Projects => self.projects.open_cursor(),
            Page::Students => self.students.open_cursor(),
            Page::Announcements => {}
            Page::Resources => self.resources.open_cursor(),
            Page::PastTeams => self.past_teams.open_cursor(),
        }
    }

    fn step(&mut self, direction: Direction) {
        match self.page {
            Page::Gallery => self.gallery.step(direction),
            Page::Projects => self.projects.step(direction),
            Page::Students => self.students.step(direction),
            Page::Announcements => {}
            Page::Resources => self.resources.step(direction),
            Page::PastTeams => self.past_teams.step(direction),
        }
    }

    pub fn render(&self, f: &mut Frame) {
        views::render(f, self);
    }
}
