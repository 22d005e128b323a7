//! Read-only campaign data store.
//!
//! Constructed once from the static campaign source and then shared (via
//! `Arc`) with every component that needs it. There is no global instance.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{GuideError, GuideResult};
use crate::types::{
    Campaign, CampaignEvent, Location, Npc, Record, RecordKey, RecordKind, Settlement, Threat,
};

/// Sample campaign bundled with the application
const EMBEDDED_CAMPAIGN: &str = include_str!("../data/campaign.json");

/// One collection plus its key index
#[derive(Debug, Clone, Default)]
struct Collection<T> {
    items: Vec<T>,
    index: HashMap<RecordKey, usize>,
}

impl<T: Record> Collection<T> {
    fn new(items: Vec<T>) -> GuideResult<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if !item.key().is_routable() {
                return Err(GuideError::InvalidKey {
                    kind: T::KIND,
                    key: item.key().to_string(),
                });
            }
            if index.insert(item.key().clone(), i).is_some() {
                return Err(GuideError::DuplicateKey {
                    kind: T::KIND,
                    key: item.key().to_string(),
                });
            }
        }
        Ok(Self { items, index })
    }

    fn get(&self, key: &str) -> Option<&T> {
        self.index
            .get(key)
            .and_then(|&i| self.items.get(i))
    }

    fn require(&self, key: &str) -> GuideResult<&T> {
        self.get(key).ok_or_else(|| GuideError::RecordNotFound {
            kind: T::KIND,
            key: key.to_string(),
        })
    }
}

/// A whole-store search hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub kind: RecordKind,
    pub key: RecordKey,
    pub name: String,
}

/// Immutable, indexed view of a [`Campaign`]
#[derive(Debug, Clone)]
pub struct DataStore {
    title: String,
    summary: Option<String>,
    settlements: Collection<Settlement>,
    npcs: Collection<Npc>,
    threats: Collection<Threat>,
    events: Collection<CampaignEvent>,
    locations: Collection<Location>,
}

impl DataStore {
    /// Index a campaign. Fails on duplicate or unroutable keys within a
    /// collection.
    pub fn new(campaign: Campaign) -> GuideResult<Self> {
        let store = Self {
            title: campaign.title,
            summary: campaign.summary,
            settlements: Collection::new(campaign.settlements)?,
            npcs: Collection::new(campaign.npcs)?,
            threats: Collection::new(campaign.threats)?,
            events: Collection::new(campaign.events)?,
            locations: Collection::new(campaign.locations)?,
        };
        tracing::info!(
            title = %store.title,
            settlements = store.settlements.items.len(),
            npcs = store.npcs.items.len(),
            threats = store.threats.items.len(),
            events = store.events.items.len(),
            locations = store.locations.items.len(),
            "campaign loaded"
        );
        Ok(store)
    }

    pub fn from_json(json: &str) -> GuideResult<Self> {
        let campaign: Campaign = serde_json::from_str(json)?;
        Self::new(campaign)
    }

    pub fn from_path(path: impl AsRef<Path>) -> GuideResult<Self> {
        let path = path.as_ref();
        tracing::debug!("loading campaign from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The sample campaign compiled into the binary
    pub fn embedded() -> GuideResult<Self> {
        Self::from_json(EMBEDDED_CAMPAIGN)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    // === Lookup by key ===

    pub fn settlement(&self, key: &str) -> Option<&Settlement> {
        self.settlements.get(key)
    }

    pub fn npc(&self, key: &str) -> Option<&Npc> {
        self.npcs.get(key)
    }

    pub fn threat(&self, key: &str) -> Option<&Threat> {
        self.threats.get(key)
    }

    pub fn event(&self, key: &str) -> Option<&CampaignEvent> {
        self.events.get(key)
    }

    pub fn location(&self, key: &str) -> Option<&Location> {
        self.locations.get(key)
    }

    pub fn require_settlement(&self, key: &str) -> GuideResult<&Settlement> {
        self.settlements.require(key)
    }

    pub fn require_npc(&self, key: &str) -> GuideResult<&Npc> {
        self.npcs.require(key)
    }

    pub fn require_threat(&self, key: &str) -> GuideResult<&Threat> {
        self.threats.require(key)
    }

    pub fn require_event(&self, key: &str) -> GuideResult<&CampaignEvent> {
        self.events.require(key)
    }

    pub fn require_location(&self, key: &str) -> GuideResult<&Location> {
        self.locations.require(key)
    }

    /// Display name of any record, if it exists
    pub fn record_name(&self, kind: RecordKind, key: &str) -> Option<&str> {
        match kind {
            RecordKind::Settlement => self.settlement(key).map(|r| r.name.as_str()),
            RecordKind::Npc => self.npc(key).map(|r| r.name.as_str()),
            RecordKind::Threat => self.threat(key).map(|r| r.name.as_str()),
            RecordKind::Event => self.event(key).map(|r| r.name.as_str()),
            RecordKind::Location => self.location(key).map(|r| r.name.as_str()),
        }
    }

    // === List all, in source order ===

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements.items
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs.items
    }

    pub fn threats(&self) -> &[Threat] {
        &self.threats.items
    }

    pub fn events(&self) -> &[CampaignEvent] {
        &self.events.items
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations.items
    }

    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Settlement => self.settlements.items.len(),
            RecordKind::Npc => self.npcs.items.len(),
            RecordKind::Threat => self.threats.items.len(),
            RecordKind::Event => self.events.items.len(),
            RecordKind::Location => self.locations.items.len(),
        }
    }

    // === Cross-collection lookups ===

    pub fn npcs_in_settlement(&self, settlement: &str) -> Vec<&Npc> {
        self.npcs
            .items
            .iter()
            .filter(|npc| npc.settlement.as_ref().is_some_and(|k| k.as_str() == settlement))
            .collect()
    }

    pub fn locations_in_settlement(&self, settlement: &str) -> Vec<&Location> {
        self.locations
            .items
            .iter()
            .filter(|loc| loc.settlement.as_ref().is_some_and(|k| k.as_str() == settlement))
            .collect()
    }

    pub fn threats_near_settlement(&self, settlement: &str) -> Vec<&Threat> {
        self.threats
            .items
            .iter()
            .filter(|t| t.settlements.iter().any(|k| k.as_str() == settlement))
            .collect()
    }

    pub fn events_in_settlement(&self, settlement: &str) -> Vec<&CampaignEvent> {
        self.events
            .items
            .iter()
            .filter(|e| e.settlement.as_ref().is_some_and(|k| k.as_str() == settlement))
            .collect()
    }

    // === Whole-store search ===

    /// Case-insensitive substring search over every collection.
    ///
    /// Looks at name and description (and role, for NPCs). Hits come back
    /// grouped by collection in source order. A blank query finds nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let contains = |s: Option<&str>| s.is_some_and(|s| s.to_lowercase().contains(&needle));

        let mut hits = Vec::new();
        let mut push = |kind: RecordKind, key: &RecordKey, name: &str| {
            hits.push(SearchHit {
                kind,
                key: key.clone(),
                name: name.to_string(),
            })
        };

        for s in self.settlements() {
            if contains(Some(s.name.as_str())) || contains(s.description.as_deref()) {
                push(RecordKind::Settlement, &s.key, &s.name);
            }
        }
        for n in self.npcs() {
            if contains(Some(n.name.as_str()))
                || contains(n.description.as_deref())
                || contains(n.role.as_deref())
            {
                push(RecordKind::Npc, &n.key, &n.name);
            }
        }
        for t in self.threats() {
            if contains(Some(t.name.as_str())) || contains(t.description.as_deref()) {
                push(RecordKind::Threat, &t.key, &t.name);
            }
        }
        for e in self.events() {
            if contains(Some(e.name.as_str())) || contains(e.description.as_deref()) {
                push(RecordKind::Event, &e.key, &e.name);
            }
        }
        for l in self.locations() {
            if contains(Some(l.name.as_str())) || contains(l.description.as_deref()) {
                push(RecordKind::Location, &l.key, &l.name);
            }
        }

        tracing::debug!(query = %needle, hits = hits.len(), "store search");
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_campaign_loads() {
        let store = DataStore::embedded().unwrap();
        assert!(!store.title().is_empty());
        for kind in RecordKind::ALL {
            assert!(store.count(kind) > 0, "embedded campaign has no {kind} records");
        }
    }

    #[test]
    fn embedded_cross_references_resolve() {
        let store = DataStore::embedded().unwrap();
        for npc in store.npcs() {
            if let Some(key) = &npc.settlement {
                assert!(store.settlement(key.as_str()).is_some(), "{} -> {}", npc.key, key);
            }
        }
        for loc in store.locations() {
            if let Some(key) = &loc.settlement {
                assert!(store.settlement(key.as_str()).is_some(), "{} -> {}", loc.key, key);
            }
        }
        for threat in store.threats() {
            for key in &threat.settlements {
                assert!(store.settlement(key.as_str()).is_some(), "{} -> {}", threat.key, key);
            }
        }
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let json = r#"{
            "title": "Dupes",
            "npcs": [
                {"key": "pip", "name": "Pip"},
                {"key": "pip", "name": "Pip Again"}
            ]
        }"#;
        let err = DataStore::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            GuideError::DuplicateKey { kind: RecordKind::Npc, ref key } if key == "pip"
        ));
    }

    #[test]
    fn unroutable_keys_are_rejected() {
        for key in ["old/pell", "old pell", "", "pell#2"] {
            let json = format!(
                r#"{{"title": "Bad keys", "settlements": [{{"key": {key:?}, "name": "Old Pell"}}]}}"#
            );
            let err = DataStore::from_json(&json).unwrap_err();
            assert!(
                matches!(err, GuideError::InvalidKey { kind: RecordKind::Settlement, key: ref k } if k == key),
                "{key:?}: {err}"
            );
        }
    }

    #[test]
    fn missing_keys_return_none_or_not_found() {
        let store = DataStore::embedded().unwrap();
        assert!(store.npc("nobody-at-all").is_none());
        let err = store.require_threat("nobody-at-all").unwrap_err();
        assert_eq!(err.to_string(), "Threat not found: nobody-at-all");
    }
}
