use crate::contact::Contact;
use std::fmt;

/// State of the contact list screen.
///
/// The collection itself is owned by the caller, only the search query
/// lives here. The visible rows are a projection derived from both via
/// [`ContactList::derive`], recomputed on every render and never cached,
/// so a stale collection snapshot can always be re-derived safely.
#[derive(Debug, Clone, Default)]
pub struct ContactList {
    query: String,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list state with the query already applied, for
    /// request-scoped use where the query arrives with the request.
    pub fn with_query(input: &str) -> Self {
        let mut list = Self::new();
        list.set_query(input);
        list
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a non-empty query currently narrows the list.
    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty()
    }

    /// Updates the query from raw input. Surrounding whitespace carries no
    /// meaning for matching and is stripped before storing.
    pub fn set_query(&mut self, input: &str) {
        self.query = input.trim().to_owned();
    }

    /// The show-all control, drops the query entirely.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Computes the visible rows for the given collection snapshot.
    ///
    /// A contact is included if its name contains the query as a literal
    /// substring, ignoring case. The query is plain text, never a pattern,
    /// so characters like `.` or `*` only match themselves. An empty query
    /// includes everything. Included rows are sorted by name ascending with
    /// a stable sort, ties keep their relative order from the input.
    pub fn derive<'c>(&self, contacts: &'c [Contact]) -> ListView<'c> {
        let query = self.query.to_lowercase();
        let mut rows: Vec<&'c Contact> = contacts
            .iter()
            .filter(|contact| {
                query.is_empty() || contact.name.to_lowercase().contains(query.as_str())
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        ListView {
            rows,
            total: contacts.len(),
        }
    }
}

/// A derived, read-only view of the contact collection. Holds references
/// into the snapshot it was derived from and is thrown away after
/// rendering.
#[derive(Debug)]
pub struct ListView<'c> {
    rows: Vec<&'c Contact>,
    total: usize,
}

impl<'c> ListView<'c> {
    /// The visible rows, filtered and sorted by name.
    pub fn rows(&self) -> &[&'c Contact] {
        &self.rows
    }

    pub fn shown(&self) -> usize {
        self.rows.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The "showing x of y" line, present only while the query actually
    /// narrows the list. An unfiltered view has no summary, including the
    /// empty-collection case where 0 of 0 are shown.
    pub fn summary(&self) -> Option<ListSummary> {
        if self.shown() == self.total() {
            return None;
        }
        Some(ListSummary {
            shown: self.shown(),
            total: self.total,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSummary {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for ListSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "showing {} of {}", self.shown, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, name: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            avatar_url: format!("/avatars/{id}.png"),
        }
    }

    fn demo_contacts() -> Vec<Contact> {
        // deliberately not in display order
        vec![
            contact("tyler", "Tyler McGinnis"),
            contact("ryan", "Ryan Florence"),
            contact("michael", "Michael Jackson"),
        ]
    }

    fn names<'c>(view: &ListView<'c>) -> Vec<&'c str> {
        view.rows().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn derive_baseline() {
        let contacts = demo_contacts();
        let list = ContactList::new();
        let view = list.derive(&contacts);
        assert_eq!(
            names(&view),
            vec!["Michael Jackson", "Ryan Florence", "Tyler McGinnis"]
        );
        assert_eq!(view.shown(), 3);
        assert_eq!(view.total(), 3);
        assert!(view.summary().is_none());
    }

    #[test]
    fn derive_filters_case_insensitively() {
        let contacts = demo_contacts();
        let view_lower = ContactList::with_query("ry").derive(&contacts);
        let view_upper = ContactList::with_query("RY").derive(&contacts);
        assert_eq!(names(&view_lower), vec!["Ryan Florence"]);
        assert_eq!(names(&view_lower), names(&view_upper));
        assert_eq!(
            view_lower.summary().map(|s| s.to_string()),
            Some("showing 1 of 3".to_string())
        );
    }

    #[test]
    fn derive_sorts_matches_by_name() {
        let contacts = demo_contacts();
        // matches Michael Jackson and Ryan Florence, but not Tyler McGinnis
        let view = ContactList::with_query("a").derive(&contacts);
        assert_eq!(names(&view), vec!["Michael Jackson", "Ryan Florence"]);
    }

    #[test]
    fn derive_treats_pattern_chars_literally() {
        let contacts = vec![contact("axb", "axb"), contact("adotb", "a.b")];
        let view = ContactList::with_query("a.b").derive(&contacts);
        assert_eq!(names(&view), vec!["a.b"]);

        let star = ContactList::with_query("*").derive(&contacts);
        assert!(star.is_empty());
    }

    #[test]
    fn derive_empty_collection() {
        let view = ContactList::with_query("ry").derive(&[]);
        assert!(view.is_empty());
        assert_eq!(view.total(), 0);
        assert!(view.summary().is_none());
    }

    #[test]
    fn derive_no_matches_keeps_summary() {
        let contacts = demo_contacts();
        let view = ContactList::with_query("zzz").derive(&contacts);
        assert!(view.is_empty());
        assert_eq!(
            view.summary().map(|s| s.to_string()),
            Some("showing 0 of 3".to_string())
        );
    }

    #[test]
    fn derive_is_idempotent() {
        let contacts = demo_contacts();
        let list = ContactList::with_query("an");
        let first: Vec<String> = list
            .derive(&contacts)
            .rows()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        let second: Vec<String> = list
            .derive(&contacts)
            .rows()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn derive_keeps_tie_order_stable() {
        let contacts = vec![
            contact("second", "Ann Lee"),
            contact("first", "Ann Lee"),
            contact("aaron", "Aaron Aa"),
        ];
        let view = ContactList::new().derive(&contacts);
        let ids: Vec<&str> = view.rows().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["aaron", "second", "first"]);
    }

    #[test]
    fn set_query_trims_input() {
        let contacts = demo_contacts();
        let mut list = ContactList::new();
        list.set_query("  ry  ");
        assert_eq!(list.query(), "ry");
        assert!(list.is_filtering());
        assert_eq!(names(&list.derive(&contacts)), vec!["Ryan Florence"]);
    }

    #[test]
    fn set_query_all_whitespace_means_no_filter() {
        let contacts = demo_contacts();
        let mut list = ContactList::new();
        list.set_query("   ");
        assert!(!list.is_filtering());
        assert_eq!(list.derive(&contacts).shown(), 3);
    }

    #[test]
    fn clear_query_restores_full_view() {
        let contacts = demo_contacts();
        let mut list = ContactList::with_query("ry");
        assert_eq!(list.derive(&contacts).shown(), 1);

        list.clear_query();
        let view = list.derive(&contacts);
        assert_eq!(
            names(&view),
            vec!["Michael Jackson", "Ryan Florence", "Tyler McGinnis"]
        );
        assert!(view.summary().is_none());
    }

    #[test]
    fn derive_reflects_removal_only_via_collection() {
        let mut contacts = demo_contacts();
        let list = ContactList::with_query("an");
        assert_eq!(names(&list.derive(&contacts)), vec!["Ryan Florence"]);

        contacts.retain(|c| c.id != "ryan");
        let view = list.derive(&contacts);
        assert!(view.is_empty());
        assert_eq!(view.total(), 2);
    }
}
