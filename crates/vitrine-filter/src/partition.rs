//! Stable pinned/regular partition for announcement-style lists.

/// Split `items` into `(pinned, regular)` by predicate.
///
/// This is a stable partition, not a sort: each group keeps the items'
/// original relative order, and every item lands in exactly one group.
pub fn partition_by<T, F>(items: &[T], is_pinned: F) -> (Vec<&T>, Vec<&T>)
where
    F: Fn(&T) -> bool,
{
    let mut pinned = Vec::new();
    let mut regular = Vec::new();
    for item in items {
        if is_pinned(item) {
            pinned.push(item);
        } else {
            regular.push(item);
        }
    }
    (pinned, regular)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vitrine_domain::{Announcement, AnnouncementCategory};

    fn announcement(id: u32, pinned: bool) -> Announcement {
        Announcement {
            id,
            title: format!("Announcement {id}"),
            date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            description: String::new(),
            link: None,
            pinned,
            category: AnnouncementCategory::General,
        }
    }

    #[test]
    fn one_pinned_among_three() {
        let items = vec![
            announcement(4, false),
            announcement(5, true),
            announcement(6, false),
        ];
        let (pinned, regular) = partition_by(&items, |a| a.pinned);
        let pinned_ids: Vec<u32> = pinned.iter().map(|a| a.id).collect();
        let regular_ids: Vec<u32> = regular.iter().map(|a| a.id).collect();
        assert_eq!(pinned_ids, vec![5]);
        assert_eq!(regular_ids, vec![4, 6]);
    }

    #[test]
    fn groups_cover_the_input_exactly_once() {
        let items: Vec<Announcement> =
            (1..=6).map(|id| announcement(id, id % 2 == 0)).collect();
        let (pinned, regular) = partition_by(&items, |a| a.pinned);
        assert_eq!(pinned.len() + regular.len(), items.len());

        let mut ids: Vec<u32> = pinned
            .iter()
            .chain(regular.iter())
            .map(|a| a.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn order_within_each_group_matches_source() {
        let items: Vec<Announcement> =
            (1..=6).map(|id| announcement(id, id % 2 == 0)).collect();
        let (pinned, regular) = partition_by(&items, |a| a.pinned);
        let pinned_ids: Vec<u32> = pinned.iter().map(|a| a.id).collect();
        let regular_ids: Vec<u32> = regular.iter().map(|a| a.id).collect();
        assert_eq!(pinned_ids, vec![2, 4, 6]);
        assert_eq!(regular_ids, vec![1, 3, 5]);
    }

    #[test]
    fn empty_input_yields_empty_groups() {
        let items: Vec<Announcement> = vec![];
        let (pinned, regular) = partition_by(&items, |a| a.pinned);
        assert!(pinned.is_empty());
        assert!(regular.is_empty());
    }
}
