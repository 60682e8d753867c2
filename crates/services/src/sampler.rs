//! Random round selection.
//!
//! Shuffle-and-truncate: every drawn session is a sample without
//! replacement, so no two rounds in one session reference the same catalog
//! entry. When the catalog is smaller than the requested size the draw is
//! capped at the catalog size.

use std::sync::Arc;

use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::Logo;

use crate::catalog::LogoCatalog;

/// Draws up to `count` distinct rounds using the thread-local rng.
#[must_use]
pub fn draw_rounds(catalog: &LogoCatalog, count: usize) -> Arc<[Logo]> {
    draw_rounds_with(catalog, count, &mut rng())
}

/// Draws up to `count` distinct rounds with a caller-supplied rng, for
/// deterministic tests.
#[must_use]
pub fn draw_rounds_with<R: Rng + ?Sized>(
    catalog: &LogoCatalog,
    count: usize,
    rng: &mut R,
) -> Arc<[Logo]> {
    let mut pool: Vec<Logo> = catalog.logos().to_vec();
    pool.as_mut_slice().shuffle(rng);
    pool.truncate(count);
    pool.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn catalog(size: usize) -> LogoCatalog {
        let logos = (0..size)
            .map(|i| {
                Logo::new(
                    format!("Logo {i}"),
                    format!("logo-{i}.png"),
                    "a hint",
                    vec![format!("logo {i}")],
                )
                .unwrap()
            })
            .collect();
        LogoCatalog::new(logos).unwrap()
    }

    #[test]
    fn draws_requested_count_without_duplicates() {
        let catalog = catalog(40);
        let mut rng = StdRng::seed_from_u64(7);
        let rounds = draw_rounds_with(&catalog, 30, &mut rng);
        assert_eq!(rounds.len(), 30);

        let names: HashSet<&str> = rounds.iter().map(Logo::name).collect();
        assert_eq!(names.len(), rounds.len());
    }

    #[test]
    fn clamps_to_catalog_size_when_undersized() {
        let catalog = catalog(5);
        let mut rng = StdRng::seed_from_u64(7);
        let rounds = draw_rounds_with(&catalog, 30, &mut rng);
        assert_eq!(rounds.len(), 5);
    }

    #[test]
    fn different_seeds_produce_different_orderings() {
        let catalog = catalog(40);
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        let first = draw_rounds_with(&catalog, 30, &mut a);
        let second = draw_rounds_with(&catalog, 30, &mut b);
        let first_names: Vec<&str> = first.iter().map(Logo::name).collect();
        let second_names: Vec<&str> = second.iter().map(Logo::name).collect();
        assert_ne!(first_names, second_names);
    }
}
