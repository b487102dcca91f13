//! People records for the dashboard: loading from and saving to JSON files,
//! plus a seeded generator for sample tables.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use shared::domain::{Person, PersonId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write dataset '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed people JSON")]
    Decode(#[from] serde_json::Error),
    #[error("duplicate person id {0}")]
    DuplicateId(PersonId),
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Åsa", "Bruno", "bea", "Chloé", "Dmitri", "Émile", "Farah", "Grace", "Hiro", "Ines",
    "Jonas", "Kemal", "Léa", "Mateo", "Nadia", "Oskar", "Priya", "Quinn", "Rafael", "Søren",
    "Tomás", "Uma", "Viktor", "Wen", "Yara", "Zoë",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Ångström", "Baker", "Çelik", "de la Cruz", "Dvořák", "Eriksen", "Fischer",
    "García", "Hansen", "Ibáñez", "Jensen", "Kowalski", "Lindqvist", "Müller", "Nakamura",
    "Novák", "O'Brien", "Øverby", "Petrov", "Quintero", "Rossi", "Schäfer", "Tanaka", "van Dijk",
    "Weiß", "Zephyr",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "people.dev"];

pub fn parse_people(json: &str) -> Result<Vec<Person>, DatasetError> {
    let people: Vec<Person> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(people.len());
    for person in &people {
        if !seen.insert(person.id) {
            return Err(DatasetError::DuplicateId(person.id));
        }
    }
    Ok(people)
}

pub fn load_people(path: impl AsRef<Path>) -> Result<Vec<Person>, DatasetError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let people = parse_people(&raw)?;
    tracing::info!(path = %path.display(), rows = people.len(), "loaded people dataset");
    Ok(people)
}

pub fn save_people(path: impl AsRef<Path>, people: &[Person]) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(people)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| DatasetError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, json).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = people.len(), "saved people dataset");
    Ok(())
}

/// Deterministic sample data: the same `count` and `seed` always produce the
/// same rows. Ids run from 1 to `count`.
pub fn generate_people(count: usize, seed: u64) -> Vec<Person> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|n| {
            let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
            let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Smith");
            let domain = EMAIL_DOMAINS.choose(&mut rng).copied().unwrap_or("example.com");
            let phone = format!(
                "{:03}-{:03}-{:04}",
                rng.gen_range(200..1000),
                rng.gen_range(0..1000),
                rng.gen_range(0..10000)
            );
            Person::new(
                n as i64,
                first,
                last,
                format!("{}.{}{n}@{domain}", email_part(first), email_part(last)),
                phone,
            )
        })
        .collect()
}

fn email_part(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
