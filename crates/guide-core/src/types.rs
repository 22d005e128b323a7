//! Core record types for the Campaign Guide
//!
//! Every record is loaded once from the static campaign source and never
//! mutated afterwards. A record's identity is its [`RecordKey`].

use serde::{Deserialize, Serialize};

/// The five record collections of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Settlement,
    Npc,
    Threat,
    Event,
    Location,
}

impl RecordKind {
    /// All kinds, in collection order
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Settlement,
        RecordKind::Npc,
        RecordKind::Threat,
        RecordKind::Event,
        RecordKind::Location,
    ];

    /// Singular display label
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Settlement => "Settlement",
            RecordKind::Npc => "NPC",
            RecordKind::Threat => "Threat",
            RecordKind::Event => "Event",
            RecordKind::Location => "Location",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable identifier of a record within its collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(pub String);

impl RecordKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key can sit in a `#/<section>/<key>` hash and parse back.
    pub fn is_routable(&self) -> bool {
        !self.0.is_empty()
            && !self
                .0
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '/' | '#' | '?' | '%'))
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for RecordKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A town, village, or outpost
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settlement {
    pub key: RecordKey,
    pub name: String,
    /// e.g. "port town", "fishing village"
    pub kind: Option<String>,
    pub region: Option<String>,
    pub population: Option<u32>,
    /// Markdown
    pub description: Option<String>,
    pub features: Vec<String>,
    /// Adventure hooks the GM can pull on
    pub hooks: Vec<String>,
}

/// A non-player character
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Npc {
    pub key: RecordKey,
    pub name: String,
    pub role: Option<String>,
    /// Key of the settlement this NPC lives in
    pub settlement: Option<RecordKey>,
    /// Free-text whereabouts ("Harbor District")
    pub location: Option<String>,
    /// Markdown
    pub description: Option<String>,
    pub traits: Vec<String>,
    /// GM-only
    pub secret: Option<String>,
}

/// A faction, monster, or looming danger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Threat {
    pub key: RecordKey,
    pub name: String,
    pub kind: Option<String>,
    pub territory: Option<String>,
    /// Markdown
    pub description: Option<String>,
    /// Settlements under this threat's shadow
    pub settlements: Vec<RecordKey>,
    /// Warning signs the players may notice
    pub signs: Vec<String>,
    /// GM-only
    pub secret: Option<String>,
}

/// Something that happens, or has happened, in the campaign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignEvent {
    pub key: RecordKey,
    pub name: String,
    pub when: Option<String>,
    pub settlement: Option<RecordKey>,
    /// Markdown
    pub description: Option<String>,
    pub consequences: Vec<String>,
}

/// A place worth visiting: a tavern, a ruin, a shrine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub key: RecordKey,
    pub name: String,
    pub kind: Option<String>,
    pub settlement: Option<RecordKey>,
    /// Markdown
    pub description: Option<String>,
    pub features: Vec<String>,
    /// GM-only
    pub secret: Option<String>,
}

/// The whole static campaign source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub title: String,
    /// Markdown
    pub summary: Option<String>,
    pub settlements: Vec<Settlement>,
    pub npcs: Vec<Npc>,
    pub threats: Vec<Threat>,
    pub events: Vec<CampaignEvent>,
    pub locations: Vec<Location>,
}

/// Identity shared by every record type
pub trait Record {
    const KIND: RecordKind;

    fn key(&self) -> &RecordKey;
    fn name(&self) -> &str;
}

/// The four weighted fields the relevance filter looks at.
///
/// Every field is optional; an absent field never matches.
pub trait Searchable {
    fn search_name(&self) -> Option<&str>;
    fn search_location(&self) -> Option<&str>;
    fn search_role(&self) -> Option<&str>;
    fn search_description(&self) -> Option<&str>;
}

macro_rules! impl_record {
    ($ty:ty, $kind:expr) => {
        impl Record for $ty {
            const KIND: RecordKind = $kind;

            fn key(&self) -> &RecordKey {
                &self.key
            }

            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

impl_record!(Settlement, RecordKind::Settlement);
impl_record!(Npc, RecordKind::Npc);
impl_record!(Threat, RecordKind::Threat);
impl_record!(CampaignEvent, RecordKind::Event);
impl_record!(Location, RecordKind::Location);

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl Searchable for Npc {
    fn search_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
    fn search_location(&self) -> Option<&str> {
        self.location.as_deref()
    }
    fn search_role(&self) -> Option<&str> {
        self.role.as_deref()
    }
    fn search_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Searchable for Settlement {
    fn search_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
    fn search_location(&self) -> Option<&str> {
        self.region.as_deref()
    }
    fn search_role(&self) -> Option<&str> {
        self.kind.as_deref()
    }
    fn search_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Searchable for Threat {
    fn search_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
    fn search_location(&self) -> Option<&str> {
        self.territory.as_deref()
    }
    fn search_role(&self) -> Option<&str> {
        self.kind.as_deref()
    }
    fn search_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Searchable for CampaignEvent {
    fn search_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
    fn search_location(&self) -> Option<&str> {
        None
    }
    fn search_role(&self) -> Option<&str> {
        None
    }
    fn search_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Searchable for Location {
    fn search_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
    fn search_location(&self) -> Option<&str> {
        self.kind.as_deref()
    }
    fn search_role(&self) -> Option<&str> {
        None
    }
    fn search_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_kind_labels() {
        assert_eq!(RecordKind::Npc.to_string(), "NPC");
        assert_eq!(RecordKind::Event.label(), "Event");
        assert_eq!(RecordKind::ALL.len(), 5);
    }

    #[test]
    fn record_key_serializes_as_plain_string() {
        let key = RecordKey::new("new-bedford");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"new-bedford\"");
    }

    #[test]
    fn records_default_with_an_empty_key() {
        assert_eq!(RecordKey::default().as_str(), "");
        let settlement = Settlement {
            name: "Old Pell".to_string(),
            ..Default::default()
        };
        assert_eq!(settlement.key, RecordKey::default());
    }

    #[test]
    fn routable_keys() {
        assert!(RecordKey::new("maren-holt").is_routable());
        assert!(RecordKey::new("pier_7").is_routable());
        for bad in ["", "old/pell", "a#b", "why?", "50%", "old pell", "tab\there"] {
            assert!(!RecordKey::new(bad).is_routable(), "{bad:?}");
        }
    }

    #[test]
    fn npc_deserializes_with_missing_fields() {
        let npc: Npc = serde_json::from_str(r#"{"key": "flask", "name": "Flask"}"#).unwrap();
        assert_eq!(npc.name, "Flask");
        assert!(npc.role.is_none());
        assert!(npc.traits.is_empty());
        assert_eq!(npc.search_description(), None);
    }

    #[test]
    fn empty_name_is_not_searchable() {
        let npc = Npc::default();
        assert_eq!(npc.search_name(), None);
    }

    #[test]
    fn record_trait_exposes_kind() {
        assert_eq!(<CampaignEvent as Record>::KIND, RecordKind::Event);
        let loc = Location {
            key: "spouter-inn".into(),
            name: "The Spouter-Inn".to_string(),
            ..Default::default()
        };
        assert_eq!(loc.key().as_str(), "spouter-inn");
        assert_eq!(loc.name(), "The Spouter-Inn");
    }
}
