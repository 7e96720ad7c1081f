use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::movie::Movie;

/// The ordered, user-visible list of movies
///
/// Initialized from the seed and mutated freely afterwards.
/// Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedCollection {
    movies: Vec<Movie>,
}

/// Result of a reorder that touched at least one movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Ids of the relocated movies, in their preserved relative order
    pub moved_ids: Vec<String>,

    /// Position of the first relocated movie after the move
    pub destination: usize,
}

impl DisplayedCollection {
    /// Copy of the seed, order preserved
    pub fn from_seed(seed: &[Movie]) -> Self {
        Self {
            movies: seed.to_vec(),
        }
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

    /// Append to the end. Uniqueness is the caller's concern.
    pub fn push(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Movie> {
        self.movies.iter_mut().find(|m| m.id == id)
    }

    /// Remove every movie whose position is in `offsets`.
    ///
    /// Offsets refer to the list as it was before the call. Removal runs
    /// in descending order so earlier removals never shift later ones.
    /// Out-of-range offsets are skipped. Returns the removed movies in
    /// their original order.
    pub fn remove_at(&mut self, offsets: &BTreeSet<usize>) -> Vec<Movie> {
        let len = self.movies.len();
        let mut removed = Vec::with_capacity(offsets.len());

        for &index in offsets.iter().rev() {
            if index < len {
                removed.push(self.movies.remove(index));
            }
        }

        removed.reverse();
        removed
    }

    /// Relocate the movies at `from` so they form a contiguous block
    /// starting at `to`.
    ///
    /// `to` is measured in the list with the moved movies taken out and is
    /// clamped to its end. Relative order is preserved both inside the
    /// moved block and among the remaining movies. Returns `None`, leaving
    /// the list untouched, when no source offset is in range or when the
    /// move would not change the order.
    pub fn move_items(&mut self, from: &BTreeSet<usize>, to: usize) -> Option<MoveOutcome> {
        let sources: Vec<usize> = from
            .iter()
            .copied()
            .filter(|&index| index < self.movies.len())
            .collect();
        if sources.is_empty() {
            return None;
        }

        let destination = to.min(self.movies.len() - sources.len());
        if sources.iter().copied().eq(destination..destination + sources.len()) {
            return None;
        }

        let mut moved = Vec::with_capacity(from.len());
        let mut rest = Vec::with_capacity(self.movies.len());

        for (index, movie) in self.movies.drain(..).enumerate() {
            if from.contains(&index) {
                moved.push(movie);
            } else {
                rest.push(movie);
            }
        }

        let moved_ids = moved.iter().map(|m| m.id.clone()).collect();

        rest.splice(destination..destination, moved);
        self.movies = rest;

        Some(MoveOutcome {
            moved_ids,
            destination,
        })
    }
}
