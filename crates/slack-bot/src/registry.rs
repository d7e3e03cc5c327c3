//! Action registration and discovery.
//!
//! Actions describe themselves with a static [`ActionEntry`] submitted to a
//! global [`inventory`] at compile time. Hosts iterate [`actions`] to list
//! what the plugin offers and to render documentation.

use serde::Serialize;

use crate::config::OptionSpec;

/// Build target platforms a pipeline may run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Mac,
}

impl Platform {
    pub const ALL: [Self; 3] = [Self::Ios, Self::Android, Self::Mac];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Mac => "mac",
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "mac" | "macos" => Ok(Self::Mac),
            other => Err(format!("unknown platform '{other}'")),
        }
    }
}

/// Registration entry for an action in the plugin.
#[derive(Debug, Serialize)]
pub struct ActionEntry {
    /// Unique identifier, also the name pipelines call it by.
    pub id: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Longer explanation shown by `describe`.
    pub details: &'static str,
    pub authors: &'static [&'static str],
    pub options: &'static [OptionSpec],
    /// Sample invocations, one per entry.
    pub example_code: &'static [&'static str],
    #[serde(skip)]
    pub is_supported: fn(Platform) -> bool,
}

impl ActionEntry {
    /// Platforms this action reports support for.
    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| (self.is_supported)(*p))
            .collect()
    }
}

inventory::collect!(ActionEntry);

/// Iterates every registered action, sorted by id.
pub fn actions() -> impl Iterator<Item = &'static ActionEntry> {
    let mut entries: Vec<_> = inventory::iter::<ActionEntry>().collect();
    entries.sort_by_key(|entry| entry.id);
    entries.into_iter()
}

/// Looks up a registered action by id.
#[must_use]
pub fn find_action(id: &str) -> Option<&'static ActionEntry> {
    inventory::iter::<ActionEntry>().find(|entry| entry.id == id)
}
