use std::collections::HashSet;

/// A deduplicating, unordered collection of strings.
///
/// Iteration order is unspecified; callers that need a stable order must sort
/// the result of [`StringSet::into_list`].
#[derive(Clone, Debug, Default)]
pub struct StringSet(HashSet<String>);

impl StringSet {
    /// Merges every string from every list into the set. Duplicates within
    /// and across lists coalesce silently.
    pub fn add_lists<'a, I>(mut self, lists: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        for list in lists {
            self.0.extend(list.iter().cloned());
        }
        self
    }

    /// Consumes the set, yielding each distinct string exactly once.
    pub fn into_list(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::StringSet;

    fn lists(lists: &[&[&str]]) -> Vec<Vec<String>> {
        lists
            .iter()
            .map(|l| l.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn merged(input: &[&[&str]]) -> Vec<String> {
        let owned = lists(input);
        let mut out = StringSet::default()
            .add_lists(owned.iter().map(Vec::as_slice))
            .into_list();
        out.sort();
        out
    }

    #[test]
    fn merges_and_dedups_across_lists() {
        let out = merged(&[&["a", "b"], &["b", "c"], &["a"]]);
        assert_eq!(out, vec!["a", "b", "c"]);
    }

    #[test]
    fn no_lists_yields_empty() {
        assert_eq!(StringSet::default().into_list(), Vec::<String>::new());
    }

    #[test]
    fn empty_lists_yield_empty() {
        assert_eq!(merged(&[&[], &[]]), Vec::<String>::new());
    }

    #[test]
    fn merging_twice_is_idempotent() {
        let once = merged(&[&["x", "y"]]);
        let twice = merged(&[&["x", "y"], &["x", "y"]]);
        assert_eq!(once, twice);
    }
}
