//! Search filtering for the user listing.
//!
//! The listing recomputes its visible subset from scratch whenever the query
//! or the backing list changes. The working set is at most a few thousand
//! records, so a full rescan per keystroke is an explicit design choice and
//! there is no caching of previous results.

use super::models::UserRecord;

/// Lower-cases `text` and strips every whitespace character.
///
/// This is the normalization applied to the query and to the searchable
/// projections of a record, so "New York" and "NEWYORK" compare equal.
///
/// # Examples
///
/// ```
/// use tudash::domain::filter::normalize;
///
/// assert_eq!(normalize("New  York"), "newyork");
/// assert_eq!(normalize("  "), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Strips whitespace without changing case.
///
/// Used for phone numbers, where lower-casing is a no-op but interior spaces
/// still have to be ignored ("555 123" should match "555123").
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether `record` matches the already-normalized query.
///
/// A record matches when the query is a contiguous substring of any of the
/// four normalized projections: name, city (empty when the record has no
/// address), email, or phone.
fn matches_query(record: &UserRecord, normalized_query: &str) -> bool {
    let name = normalize(&record.name);
    let city = record.city().map(normalize).unwrap_or_default();
    let email = normalize(&record.email);
    let phone = strip_whitespace(&record.phone);

    name.contains(normalized_query)
        || city.contains(normalized_query)
        || email.contains(normalized_query)
        || phone.contains(normalized_query)
}

/// Computes the visible subset of `records` for a free-text `query`.
///
/// An empty query (after normalization) yields the full list. Otherwise the
/// result contains exactly the records matching the query, in their original
/// relative order.
///
/// # Examples
///
/// ```
/// use tudash::domain::filter::compute_visible;
/// use tudash::domain::models::{Address, UserRecord};
///
/// let records = vec![UserRecord {
///     id: 1,
///     name: "Leanne Graham".to_string(),
///     email: "Sincere@april.biz".to_string(),
///     phone: "1-770-736-8031".to_string(),
///     address: Some(Address { city: "Gwenborough".to_string() }),
/// }];
///
/// assert_eq!(compute_visible(&records, "leanne").len(), 1);
/// assert_eq!(compute_visible(&records, "elsewhere").len(), 0);
/// assert_eq!(compute_visible(&records, ""), records);
/// ```
pub fn compute_visible(records: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let normalized_query = normalize(query);

    if normalized_query.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches_query(record, &normalized_query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Address;

    fn user(id: u64, name: &str, email: &str, phone: &str, city: Option<&str>) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: city.map(|c| Address {
                city: c.to_string(),
            }),
        }
    }

    fn sample_records() -> Vec<UserRecord> {
        vec![
            user(
                1,
                "Leanne Graham",
                "Sincere@april.biz",
                "1-770-736-8031 x56442",
                Some("Gwenborough"),
            ),
            user(
                2,
                "Ervin Howell",
                "Shanna@melissa.tv",
                "010-692-6593 x09125",
                Some("Wisokyburgh"),
            ),
            user(3, "Clementine Bauch", "Nathan@yesenia.net", "1-463-123-4447", None),
            user(
                4,
                "Patricia Lebsack",
                "Julianne.OConner@kory.org",
                "493-170-9623 x156",
                Some("New York"),
            ),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = sample_records();
        assert_eq!(compute_visible(&records, ""), records);
        // Whitespace-only queries normalize to empty
        assert_eq!(compute_visible(&records, "   \t "), records);
    }

    #[test]
    fn test_result_is_subset_and_matches() {
        let records = sample_records();
        let visible = compute_visible(&records, "biz");

        assert!(!visible.is_empty());
        assert!(visible.len() <= records.len());
        for v in &visible {
            assert!(records.contains(v));
            assert!(matches_query(v, "biz"));
        }
    }

    #[test]
    fn test_matches_by_name() {
        let records = sample_records();
        let visible = compute_visible(&records, "clementine");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);
    }

    #[test]
    fn test_matches_by_city() {
        let records = sample_records();
        let visible = compute_visible(&records, "gwen");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_matches_by_email() {
        let records = sample_records();
        let visible = compute_visible(&records, "melissa.tv");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let records = sample_records();
        assert_eq!(
            compute_visible(&records, "NEW YORK"),
            compute_visible(&records, "new  york")
        );
        assert_eq!(compute_visible(&records, "NEW YORK").len(), 1);
        assert_eq!(compute_visible(&records, "NEW YORK")[0].id, 4);
    }

    #[test]
    fn test_phone_whitespace_stripped() {
        let records = vec![user(9, "Ann", "ann@x.co", "555 123 4567", None)];
        assert_eq!(compute_visible(&records, "555123").len(), 1);
        assert_eq!(compute_visible(&records, "5551234567").len(), 1);
    }

    #[test]
    fn test_missing_city_never_matches_city_query() {
        // Record 3 has no address; a city-ish query must not match it via the
        // empty projection.
        let records = sample_records();
        let visible = compute_visible(&records, "burgh");
        assert_eq!(visible.iter().filter(|u| u.id == 3).count(), 0);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let records = sample_records();
        // "o" hits several records; relative order must be the input order.
        let visible = compute_visible(&records, "o");
        let ids: Vec<u64> = visible.iter().map(|u| u.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let records = sample_records();
        assert!(compute_visible(&records, "zzzzzz").is_empty());
    }
}
