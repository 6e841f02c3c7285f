//! Local filename allocation for one output directory
//!
//! Distinct source URLs can sanitize to the same filename
//! (`/a/logo.png` and `/b/logo.png`). The registry applies the run's
//! [`CollisionPolicy`] when a name is claimed.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::config::CollisionPolicy;

/// Tracks which source URL owns each local filename in one directory
#[derive(Debug, Default)]
pub struct FilenameRegistry {
    policy: CollisionPolicy,
    owners: DashMap<String, String>,
}

/// Insert a counter before the extension: `logo.png` -> `logo-2.png`
fn with_suffix(filename: &str, counter: usize) -> String {
    match filename.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => format!("{stem}-{counter}.{extension}"),
        _ => format!("{filename}-{counter}"),
    }
}

impl FilenameRegistry {
    #[must_use]
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            owners: DashMap::new(),
        }
    }

    /// Claim a local filename for `url`
    ///
    /// Under `Overwrite` the sanitized name is returned unchanged. Under
    /// `Disambiguate` the same URL always receives the same name, and a
    /// distinct URL never receives a name already owned by another one.
    pub fn claim(&self, url: &str, filename: &str) -> String {
        if self.policy == CollisionPolicy::Overwrite {
            self.owners.insert(filename.to_string(), url.to_string());
            return filename.to_string();
        }

        let mut counter = 0;
        loop {
            let candidate = if counter == 0 {
                filename.to_string()
            } else {
                with_suffix(filename, counter)
            };

            match self.owners.entry(candidate) {
                Entry::Occupied(owner) if owner.get() == url => return owner.key().clone(),
                Entry::Occupied(_) => counter += 1,
                Entry::Vacant(slot) => {
                    let name = slot.key().clone();
                    slot.insert(url.to_string());
                    if counter > 0 {
                        log::debug!(
                            target: "sitemirror::assets",
                            "Filename collision on {filename}: {url} stored as {name}"
                        );
                    }
                    return name;
                }
            }
        }
    }

    /// Number of distinct filenames handed out so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
