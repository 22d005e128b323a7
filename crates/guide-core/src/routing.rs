//! Hash-based routes.
//!
//! - `#/` or empty: overview
//! - `#/<section>`: one collection, e.g. `#/npcs`
//! - `#/<section>/<key>`: one record, e.g. `#/npcs/maren-holt`
//!
//! The leading `#` and `/` are both optional when parsing.

use crate::error::{GuideError, GuideResult};
use crate::store::DataStore;
use crate::types::{RecordKey, RecordKind};

/// Top-level sections of the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Overview,
    Settlements,
    Npcs,
    Threats,
    Events,
    Locations,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Settlements,
        Section::Npcs,
        Section::Threats,
        Section::Events,
        Section::Locations,
    ];

    /// URL slug
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Overview => "",
            Section::Settlements => "settlements",
            Section::Npcs => "npcs",
            Section::Threats => "threats",
            Section::Events => "events",
            Section::Locations => "locations",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Settlements => "Settlements",
            Section::Npcs => "NPCs",
            Section::Threats => "Threats",
            Section::Events => "Events",
            Section::Locations => "Locations",
        }
    }

    /// The record collection this section lists, if any
    pub fn record_kind(&self) -> Option<RecordKind> {
        match self {
            Section::Overview => None,
            Section::Settlements => Some(RecordKind::Settlement),
            Section::Npcs => Some(RecordKind::Npc),
            Section::Threats => Some(RecordKind::Threat),
            Section::Events => Some(RecordKind::Event),
            Section::Locations => Some(RecordKind::Location),
        }
    }

    pub fn for_kind(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Settlement => Section::Settlements,
            RecordKind::Npc => Section::Npcs,
            RecordKind::Threat => Section::Threats,
            RecordKind::Event => Section::Events,
            RecordKind::Location => Section::Locations,
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A location in the guide
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Route {
    pub section: Section,
    pub item: Option<RecordKey>,
}

impl Route {
    pub fn overview() -> Self {
        Self::default()
    }

    pub fn section(section: Section) -> Self {
        Self {
            section,
            item: None,
        }
    }

    /// Route to a single record. Returns `None` for [`Section::Overview`],
    /// which has no records.
    pub fn record(section: Section, key: impl Into<RecordKey>) -> Option<Self> {
        section.record_kind()?;
        Some(Self {
            section,
            item: Some(key.into()),
        })
    }

    pub fn parse_hash(hash: &str) -> GuideResult<Self> {
        let path = hash.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Ok(Self::overview());
        }

        let mut parts = path.split('/');
        let slug = parts.next().unwrap_or_default();
        let item = parts.next().filter(|s| !s.is_empty());
        if parts.next().is_some() {
            return Err(GuideError::InvalidRoute(hash.to_string()));
        }

        let section = Section::from_slug(slug)
            .filter(|s| *s != Section::Overview)
            .ok_or_else(|| GuideError::InvalidRoute(hash.to_string()))?;

        Ok(Self {
            section,
            item: item.map(RecordKey::from),
        })
    }

    pub fn to_hash(&self) -> String {
        match (&self.section, &self.item) {
            (Section::Overview, _) => "#/".to_string(),
            (section, None) => format!("#/{}", section.slug()),
            (section, Some(key)) => format!("#/{}/{}", section.slug(), key),
        }
    }
}

/// Window/page title for a route.
///
/// Unknown record keys produce a "Not found" title rather than an error.
pub fn route_title(route: &Route, store: &DataStore) -> String {
    let section = route.section.title();
    match (route.section.record_kind(), &route.item) {
        (Some(kind), Some(key)) => match store.record_name(kind, key.as_str()) {
            Some(name) => format!("{} | {}", name, section),
            None => format!("Not found | {}", section),
        },
        (None, _) => store.title().to_string(),
        (Some(_), None) => section.to_string(),
    }
}
