//! Visible-set computation.

use vitrine_domain::Faceted;

use crate::dimension::{Dimension, ALL};
use crate::selection::FilterSelection;

/// Ordered subsequence of `items` matching every dimension selection.
///
/// Deterministic and side-effect free; source order is preserved. An empty
/// result is a valid terminal state the presentation layer renders as an
/// explicit empty message.
pub fn compute_visible<'a, T: Faceted>(
    items: &'a [T],
    selection: &FilterSelection,
) -> Vec<&'a T> {
    items.iter().filter(|item| selection.matches(item)).collect()
}

/// Ordered subsequence of `items` matching `value` on *any* declared
/// dimension.
///
/// This is the combined single-row chip filter used by the projects page,
/// where one row mixes category and year chips: a non-`"All"` chip matches
/// an item when any of its dimension values equals the chip.
pub fn compute_visible_any<'a, T: Faceted>(
    items: &'a [T],
    dimensions: &[Dimension],
    value: &str,
) -> Vec<&'a T> {
    if value == ALL {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            dimensions
                .iter()
                .any(|d| item.dimension_value(&d.key) == Some(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use vitrine_domain::GalleryImage;

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

    fn dimensions() -> Vec<Dimension> {
        vec![Dimension::descending("year"), Dimension::ascending("category")]
    }

    fn items() -> Vec<GalleryImage> {
        vec![
            image(1, "2024", "A"),
            image(2, "2024", "B"),
            image(3, "2023", "A"),
        ]
    }

    #[test]
    fn wildcard_selection_keeps_source_order() {
        let items = items();
        let selection = FilterSelection::new(&dimensions());
        let visible = compute_visible(&items, &selection);
        let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn single_dimension_selection_filters() {
        let items = items();
        let mut selection = FilterSelection::new(&dimensions());
        selection.set_raw("year", "2024");
        let visible = compute_visible(&items, &selection);
        let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(visible.iter().all(|i| i.year == "2024"));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let items = items();
        let mut selection = FilterSelection::new(&dimensions());
        selection.set_raw("category", "A");
        let first: Vec<u32> = compute_visible(&items, &selection).iter().map(|i| i.id).collect();
        let second: Vec<u32> = compute_visible(&items, &selection).iter().map(|i| i.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn no_match_is_an_empty_set_not_an_error() {
        let items = items();
        let mut selection = FilterSelection::new(&dimensions());
        selection.set_raw("year", "2024");
        selection.set_raw("category", "A");
        selection.set_raw("year", "2023");
        let visible = compute_visible(&items, &selection);
        let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3]);

        selection.set_raw("category", "B");
        assert!(compute_visible(&items, &selection).is_empty());
    }

    #[rstest]
    #[case("All", vec![1, 2, 3])]
    #[case("A", vec![1, 3])]
    #[case("2024", vec![1, 2])]
    #[case("B", vec![2])]
    #[case("1999", vec![])]
    fn any_dimension_chip_matches_union(#[case] chip: &str, #[case] expected: Vec<u32>) {
        let items = items();
        let visible = compute_visible_any(&items, &dimensions(), chip);
        let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
        assert_eq!(ids, expected);
    }
}
