//! Reads the static list of locations to track.

use std::{fs, path::PathBuf};

use tracing::{debug, warn};

use crate::{
    error::FeedError,
    model::{FeedEntry, MAX_COUNTRY_LEN, MAX_NAME_LEN},
};

pub const FIELD_DELIMITER: char = ',';

/// Source of `(name, country)` pairs, re-read on every cycle.
pub trait LocationFeed: Send + Sync {
    fn read(&self) -> Result<Vec<FeedEntry>, FeedError>;
}

/// Plain-text feed: one `<name>, <country>` pair per line.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LocationFeed for FileFeed {
    fn read(&self) -> Result<Vec<FeedEntry>, FeedError> {
        debug!(path = %self.path.display(), "Reading locations feed");
        let contents = fs::read_to_string(&self.path)
            .map_err(|source| FeedError { path: self.path.clone(), source })?;
        Ok(parse_feed(&contents))
    }
}

#[cfg(test)]
impl LocationFeed for Vec<FeedEntry> {
    fn read(&self) -> Result<Vec<FeedEntry>, FeedError> {
        Ok(self.clone())
    }
}

/// Parses feed contents, preserving line order.
///
/// Blank lines are ignored. Lines that cannot be stored (no delimiter, an
/// empty field, or a field longer than its column) are skipped with a warning.
pub fn parse_feed(contents: &str) -> Vec<FeedEntry> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| match parse_line(line) {
            Some(entry) => Some(entry),
            None => {
                warn!(line = idx + 1, content = line, "Skipping malformed feed line");
                None
            }
        })
        .collect()
}

fn parse_line(line: &str) -> Option<FeedEntry> {
    let (name, country) = line.split_once(FIELD_DELIMITER)?;
    let (name, country) = (name.trim(), country.trim());

    if name.is_empty() || country.is_empty() {
        return None;
    }
    if name.chars().count() > MAX_NAME_LEN || country.chars().count() > MAX_COUNTRY_LEN {
        return None;
    }

    Some(FeedEntry::new(name, country))
}
