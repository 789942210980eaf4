use crate::{Category, Exercise};

/// Curate a category's exercise list: drop banned names, then move preferred
/// names to the front. The relative order within each partition is preserved
/// and no exercise is duplicated.
#[must_use]
pub fn curate(exercises: &[Exercise], category: Category) -> Vec<Exercise> {
    let banned = category.banned_names();
    let preferred = category.preferred_names();

    let clean = exercises
        .iter()
        .filter(|exercise| {
            let name = exercise.name.to_lowercase();
            !banned.iter().any(|b| name.contains(&b.to_lowercase()))
        })
        .collect::<Vec<_>>();

    let is_preferred = |exercise: &Exercise| {
        let name = exercise.name.to_lowercase();
        preferred.iter().any(|p| name.contains(&p.to_lowercase()))
    };

    clean
        .iter()
        .filter(|exercise| is_preferred(exercise))
        .chain(clean.iter().filter(|exercise| !is_preferred(exercise)))
        .map(|exercise| (*exercise).clone())
        .collect()
}
