//! End-to-end scenarios: content through the filter engine and lightbox,
//! the way the pages drive them.

use vitrine_content::ContentBundle;
use vitrine_domain::GalleryImage;
use vitrine_filter::{partition_by, Collection, Dimension};
use vitrine_lightbox::{Direction, Focus};

fn image(id: u32, year: &str, category: &str) -> GalleryImage {
    GalleryImage {
        id,
        src: String::new(),
        alt: String::new(),
        year: year.into(),
        category: category.into(),
        description: String::new(),
    }
}

fn gallery_dimensions() -> Vec<Dimension> {
    vec![Dimension::descending("year"), Dimension::ascending("category")]
}

#[test]
fn gallery_filter_and_lightbox_walkthrough() {
    // The worked scenario: three items across two years and two categories.
    let collection = Collection::new(
        vec![image(1, "2024", "A"), image(2, "2024", "B"), image(3, "2023", "A")],
        gallery_dimensions(),
    );

    assert_eq!(collection.domain("year").unwrap(), ["All", "2024", "2023"]);

    let mut selection = collection.selection();
    collection.set(&mut selection, "year", "2024").unwrap();
    let visible = collection.visible(&selection);
    let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let mut focus = Focus::Idle;
    focus.open(&visible, 1).unwrap();
    focus.step(&visible, Direction::Next);
    assert_eq!(focus.focused_id(), Some(2));
    focus.step(&visible, Direction::Next);
    assert_eq!(focus.focused_id(), Some(1));
    assert_eq!(focus.position(&visible), Some((1, 2)));
}

#[test]
fn filter_change_closes_stale_focus() {
    let collection = Collection::new(
        vec![image(1, "2024", "A"), image(2, "2024", "B"), image(3, "2023", "A")],
        gallery_dimensions(),
    );

    let mut selection = collection.selection();
    let visible = collection.visible(&selection);
    let mut focus = Focus::Idle;
    focus.open(&visible, 2).unwrap();

    // Narrowing to category A removes the focused item; the page runs
    // retain_visible after every chip click.
    collection.set(&mut selection, "category", "A").unwrap();
    let visible = collection.visible(&selection);
    focus.retain_visible(&visible);
    assert!(focus.is_idle());
}

#[test]
fn empty_collection_is_a_valid_terminal_state() {
    let collection: Collection<GalleryImage> = Collection::new(vec![], gallery_dimensions());
    assert_eq!(collection.domain("year").unwrap(), ["All"]);
    assert_eq!(collection.domain("category").unwrap(), ["All"]);

    let selection = collection.selection();
    let visible = collection.visible(&selection);
    assert!(visible.is_empty());

    // Opening anything against an empty visible set is the contract
    // violation the lightbox reports.
    let mut focus = Focus::Idle;
    assert!(focus.open(&visible, 1).is_err());
    assert!(focus.is_idle());
}

#[test]
fn builtin_gallery_drives_the_real_page_flow() {
    let bundle = ContentBundle::builtin();
    let collection = Collection::new(bundle.gallery, gallery_dimensions());

    // Chip rows come straight from the domains.
    let years = collection.domain("year").unwrap();
    assert_eq!(years[0], "All");
    assert!(years.windows(2).all(|w| w[0] != w[1]));

    // Cycle through a full year of photos and return to the start.
    let selection = collection.selection();
    let visible = collection.visible(&selection);
    let first = visible[0].id;
    let mut focus = Focus::Idle;
    focus.open(&visible, first).unwrap();
    for _ in 0..visible.len() {
        focus.step(&visible, Direction::Next);
    }
    assert_eq!(focus.focused_id(), Some(first));
}

#[test]
fn builtin_announcements_partition_pinned_first() {
    let bundle = ContentBundle::builtin();
    let (pinned, regular) = partition_by(&bundle.announcements, |a| a.pinned);

    assert!(!pinned.is_empty());
    assert!(pinned.iter().all(|a| a.pinned));
    assert!(regular.iter().all(|a| !a.pinned));
    assert_eq!(pinned.len() + regular.len(), bundle.announcements.len());

    // Source order survives within each group.
    let pinned_ids: Vec<u32> = pinned.iter().map(|a| a.id).collect();
    let mut sorted = pinned_ids.clone();
    sorted.sort_unstable();
    assert_eq!(pinned_ids, sorted);
}

#[test]
fn projects_combined_chips_match_on_any_dimension() {
    let bundle = ContentBundle::builtin();
    let collection = Collection::new(
        bundle.projects,
        vec![Dimension::ascending("category"), Dimension::descending("year")],
    );

    let chips = collection.combined_chips();
    assert_eq!(chips[0], "All");

    for chip in &chips {
        let visible = collection.visible_any(chip);
        if chip == "All" {
            assert_eq!(visible.len(), collection.items().len());
        } else {
            assert!(visible
                .iter()
                .all(|p| p.category == *chip || p.year == *chip));
            assert!(!visible.is_empty(), "chip {chip} came from the domains");
        }
    }
}

#[test]
fn past_teams_navigate_unfiltered() {
    let bundle = ContentBundle::builtin();
    let collection = Collection::new(bundle.past_teams, vec![Dimension::descending("year")]);

    let selection = collection.selection();
    let visible = collection.visible(&selection);
    assert_eq!(visible.len(), collection.items().len());

    let mut focus = Focus::Idle;
    focus.open(&visible, visible[0].id).unwrap();
    focus.step(&visible, Direction::Prev);
    // Prev from the first team wraps to the last.
    assert_eq!(focus.focused_id(), Some(visible[visible.len() - 1].id));
}
