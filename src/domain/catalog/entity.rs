use std::collections::HashSet;

use crate::domain::movie::Movie;

/// The full set of movies that can ever be added
///
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Catalog movies whose title is not already displayed, sorted by name.
    ///
    /// Titles match case-insensitively. Ids are ignored: added movies carry
    /// fresh ids and never line up with the catalog. Ordering is a plain
    /// ordinal comparison of names and the sort is stable.
    pub fn available_for(&self, displayed: &[Movie]) -> Vec<Movie> {
        let existing: HashSet<String> = displayed.iter().map(Movie::title_key).collect();

        let mut available: Vec<Movie> = self
            .movies
            .iter()
            .filter(|m| !existing.contains(&m.title_key()))
            .cloned()
            .collect();

        available.sort_by(|a, b| a.name.cmp(&b.name));
        available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn movie(id: &str, name: &str) -> Movie {
        Movie {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            is_favorite: false,
            image_name: String::new(),
        }
    }

    fn names(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_everything_available_when_nothing_displayed() {
        let catalog = Catalog::new(vec![movie("1", "Up"), movie("2", "Alien")]);
        let available = catalog.available_for(&[]);
        assert_eq!(names(&available), vec!["Alien", "Up"]);
    }

    #[test]
    fn test_displayed_titles_excluded_case_insensitively() {
        let catalog = Catalog::new(vec![
            movie("1", "Up"),
            movie("2", "Alien"),
            movie("3", "Heat"),
        ]);
        let displayed = vec![movie("X", "ALIEN")];

        let available = catalog.available_for(&displayed);
        assert_eq!(names(&available), vec!["Heat", "Up"]);
    }

    #[test]
    fn test_ids_do_not_take_part_in_matching() {
        let catalog = Catalog::new(vec![movie("1", "Up")]);
        let displayed = vec![movie("1", "Something Else")];

        assert_eq!(catalog.available_for(&displayed).len(), 1);
    }

    #[test]
    fn test_ordinal_sort_puts_uppercase_first() {
        let catalog = Catalog::new(vec![movie("1", "alpha"), movie("2", "Zulu")]);
        assert_eq!(names(&catalog.available_for(&[])), vec!["Zulu", "alpha"]);
    }

    #[test]
    fn test_all_displayed_leaves_nothing() {
        let catalog = Catalog::new(vec![movie("1", "Up")]);
        let displayed = vec![movie("9", "up")];
        assert!(catalog.available_for(&displayed).is_empty());
    }
}
