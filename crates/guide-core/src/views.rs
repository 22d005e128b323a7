//! Display-unit views for campaign records.
//!
//! [`RecordView`] renders any single record into a fixed skeleton of slots
//! (`header`, `body`, `details`, `related`, `secrets`). Settlements list
//! their residents using a child [`NpcCardView`] built from the factory the
//! parent holds. [`NpcListView`] renders NPC search results.

use crate::filter::{FilterConfig, ScoredMatch};
use crate::html::{el, markdown, Element, Node, RenderTree};
use crate::lifecycle::{render_detached, View};
use crate::routing::{Route, Section};
use crate::store::DataStore;
use crate::types::{
    CampaignEvent, Location, Npc, Record, RecordKey, RecordKind, Settlement, Threat,
};

pub const SLOT_HEADER: &str = "header";
pub const SLOT_BODY: &str = "body";
pub const SLOT_DETAILS: &str = "details";
pub const SLOT_RELATED: &str = "related";
pub const SLOT_SECRETS: &str = "secrets";

/// Everything [`RecordView`] needs to render one record.
///
/// Settlements carry their related records, resolved by the caller through
/// [`RecordPayload::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordPayload {
    Settlement {
        settlement: Settlement,
        npcs: Vec<Npc>,
        locations: Vec<Location>,
        threats: Vec<Threat>,
        events: Vec<CampaignEvent>,
    },
    Npc {
        npc: Npc,
        settlement: Option<(RecordKey, String)>,
    },
    Threat(Threat),
    Event(CampaignEvent),
    Location(Location),
    NotFound { kind: RecordKind, key: RecordKey },
}

impl RecordPayload {
    /// Look up a record and everything its view links to
    pub fn resolve(store: &DataStore, kind: RecordKind, key: &str) -> Self {
        let not_found = || RecordPayload::NotFound {
            kind,
            key: key.into(),
        };
        match kind {
            RecordKind::Settlement => match store.settlement(key) {
                Some(s) => RecordPayload::Settlement {
                    settlement: s.clone(),
                    npcs: store.npcs_in_settlement(key).into_iter().cloned().collect(),
                    locations: store
                        .locations_in_settlement(key)
                        .into_iter()
                        .cloned()
                        .collect(),
                    threats: store
                        .threats_near_settlement(key)
                        .into_iter()
                        .cloned()
                        .collect(),
                    events: store
                        .events_in_settlement(key)
                        .into_iter()
                        .cloned()
                        .collect(),
                },
                None => not_found(),
            },
            RecordKind::Npc => match store.npc(key) {
                Some(npc) => RecordPayload::Npc {
                    npc: npc.clone(),
                    settlement: npc.settlement.as_ref().and_then(|k| {
                        store
                            .settlement(k.as_str())
                            .map(|s| (s.key.clone(), s.name.clone()))
                    }),
                },
                None => not_found(),
            },
            RecordKind::Threat => store
                .threat(key)
                .cloned()
                .map(RecordPayload::Threat)
                .unwrap_or_else(not_found),
            RecordKind::Event => store
                .event(key)
                .cloned()
                .map(RecordPayload::Event)
                .unwrap_or_else(not_found),
            RecordKind::Location => store
                .location(key)
                .cloned()
                .map(RecordPayload::Location)
                .unwrap_or_else(not_found),
        }
    }
}

/// Full-page view of one record
pub struct RecordView {
    /// Show GM-only secrets
    pub show_secrets: bool,
    npc_card: fn() -> NpcCardView,
}

impl Default for RecordView {
    fn default() -> Self {
        Self {
            show_secrets: false,
            npc_card: NpcCardView::default,
        }
    }
}

impl RecordView {
    pub fn new(show_secrets: bool) -> Self {
        Self {
            show_secrets,
            ..Self::default()
        }
    }

    fn secret(&self, tree: &mut RenderTree, secret: Option<&str>) {
        if let (true, Some(secret)) = (self.show_secrets, secret) {
            tree.assign_slot(
                SLOT_SECRETS,
                vec![el("h3").text("GM Secret").into(), markdown(secret)],
            );
        }
    }

    fn render_settlement(
        &self,
        tree: &mut RenderTree,
        settlement: &Settlement,
        npcs: &[Npc],
        locations: &[Location],
        threats: &[Threat],
        events: &[CampaignEvent],
    ) {
        tree.assign_slot(
            SLOT_HEADER,
            header(&settlement.name, settlement.kind.as_deref().unwrap_or("Settlement")),
        );
        tree.assign_slot(SLOT_BODY, description(settlement.description.as_deref()));

        let mut details = Vec::new();
        details.extend(detail("Region", settlement.region.as_deref()));
        details.extend(detail(
            "Population",
            settlement.population.map(|p| p.to_string()).as_deref(),
        ));
        details.extend(list_section("Features", &settlement.features));
        tree.assign_slot(SLOT_DETAILS, details);

        let mut related: Vec<Node> = Vec::new();
        if !npcs.is_empty() {
            related.push(el("h3").text("Residents").into());
            let cards = npcs
                .iter()
                .flat_map(|npc| render_detached((self.npc_card)(), npc.clone()));
            related.push(el("div").class("npc-grid").children(cards).into());
        }
        related.extend(link_section("Locations", Section::Locations, locations));
        related.extend(link_section("Threats", Section::Threats, threats));
        related.extend(link_section("Events", Section::Events, events));
        tree.assign_slot(SLOT_RELATED, related);

        if self.show_secrets && !settlement.hooks.is_empty() {
            tree.assign_slot(SLOT_SECRETS, list_section("Hooks", &settlement.hooks));
        }
    }

    fn render_npc(
        &self,
        tree: &mut RenderTree,
        npc: &Npc,
        settlement: Option<&(RecordKey, String)>,
    ) {
        tree.assign_slot(SLOT_HEADER, header(&npc.name, npc.role.as_deref().unwrap_or("NPC")));
        tree.assign_slot(SLOT_BODY, description(npc.description.as_deref()));

        let mut details = Vec::new();
        details.extend(detail("Whereabouts", npc.location.as_deref()));
        if let Some((key, name)) = settlement {
            details.push(el("dt").text("Settlement").into());
            details.push(
                el("dd")
                    .child(record_link(Section::Settlements, key, name))
                    .into(),
            );
        }
        details.extend(list_section("Traits", &npc.traits));
        tree.assign_slot(SLOT_DETAILS, details);

        self.secret(tree, npc.secret.as_deref());
    }

    fn render_threat(&self, tree: &mut RenderTree, threat: &Threat) {
        tree.assign_slot(
            SLOT_HEADER,
            header(&threat.name, threat.kind.as_deref().unwrap_or("Threat")),
        );
        tree.assign_slot(SLOT_BODY, description(threat.description.as_deref()));

        let mut details = Vec::new();
        details.extend(detail("Territory", threat.territory.as_deref()));
        details.extend(list_section("Warning Signs", &threat.signs));
        tree.assign_slot(SLOT_DETAILS, details);

        if !threat.settlements.is_empty() {
            let links = threat
                .settlements
                .iter()
                .map(|key| el("li").child(record_link(Section::Settlements, key, key.as_str())));
            tree.assign_slot(
                SLOT_RELATED,
                vec![
                    el("h3").text("Endangered Settlements").into(),
                    el("ul").children(links).into(),
                ],
            );
        }

        self.secret(tree, threat.secret.as_deref());
    }

    fn render_event(&self, tree: &mut RenderTree, event: &CampaignEvent) {
        tree.assign_slot(
            SLOT_HEADER,
            header(&event.name, event.when.as_deref().unwrap_or("Event")),
        );
        tree.assign_slot(SLOT_BODY, description(event.description.as_deref()));
        tree.assign_slot(SLOT_DETAILS, list_section("Consequences", &event.consequences));
        if let Some(key) = &event.settlement {
            tree.assign_slot(
                SLOT_RELATED,
                vec![el("p")
                    .text("Takes place in ")
                    .child(record_link(Section::Settlements, key, key.as_str()))
                    .into()],
            );
        }
    }

    fn render_location(&self, tree: &mut RenderTree, location: &Location) {
        tree.assign_slot(
            SLOT_HEADER,
            header(&location.name, location.kind.as_deref().unwrap_or("Location")),
        );
        tree.assign_slot(SLOT_BODY, description(location.description.as_deref()));
        tree.assign_slot(SLOT_DETAILS, list_section("Features", &location.features));
        if let Some(key) = &location.settlement {
            tree.assign_slot(
                SLOT_RELATED,
                vec![el("p")
                    .text("Found in ")
                    .child(record_link(Section::Settlements, key, key.as_str()))
                    .into()],
            );
        }
        self.secret(tree, location.secret.as_deref());
    }
}

impl View for RecordView {
    type Payload = RecordPayload;

    fn build(&mut self) -> RenderTree {
        RenderTree::new(vec![el("article")
            .class("record-view")
            .child(el("header").class("record-view__header").child(Node::slot(SLOT_HEADER)))
            .child(el("div").class("record-view__body").child(Node::slot(SLOT_BODY)))
            .child(el("dl").class("record-view__details").child(Node::slot(SLOT_DETAILS)))
            .child(el("section").class("record-view__related").child(Node::slot(SLOT_RELATED)))
            .child(el("aside").class("record-view__secrets").child(Node::slot(SLOT_SECRETS)))
            .into()])
    }

    fn render(&mut self, tree: &mut RenderTree, payload: &RecordPayload) {
        match payload {
            RecordPayload::Settlement {
                settlement,
                npcs,
                locations,
                threats,
                events,
            } => self.render_settlement(tree, settlement, npcs, locations, threats, events),
            RecordPayload::Npc { npc, settlement } => {
                self.render_npc(tree, npc, settlement.as_ref())
            }
            RecordPayload::Threat(threat) => self.render_threat(tree, threat),
            RecordPayload::Event(event) => self.render_event(tree, event),
            RecordPayload::Location(location) => self.render_location(tree, location),
            RecordPayload::NotFound { kind, key } => {
                tree.assign_slot(SLOT_HEADER, header("Not found", kind.label()));
                tree.assign_slot(
                    SLOT_BODY,
                    vec![el("p")
                        .class("placeholder")
                        .text(format!("No {} is recorded under \u{201c}{}\u{201d}.", kind.label(), key))
                        .into()],
                );
            }
        }
    }
}

/// Compact NPC card
#[derive(Debug, Clone, Copy, Default)]
pub struct NpcCardView;

impl View for NpcCardView {
    type Payload = Npc;

    fn build(&mut self) -> RenderTree {
        RenderTree::new(vec![el("div")
            .class("npc-card")
            .child(Node::slot("name"))
            .child(Node::slot("meta"))
            .into()])
    }

    fn render(&mut self, tree: &mut RenderTree, npc: &Npc) {
        tree.assign_slot(
            "name",
            vec![el("h4")
                .class("npc-card__name")
                .child(record_link(Section::Npcs, &npc.key, &npc.name))
                .into()],
        );
        let meta: Vec<&str> = [npc.role.as_deref(), npc.location.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !meta.is_empty() {
            tree.assign_slot(
                "meta",
                vec![el("p").class("npc-card__meta").text(meta.join(" \u{b7} ")).into()],
            );
        }
    }
}

/// NPC list with optional relevance scores
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NpcList {
    pub entries: Vec<(Npc, Option<u32>)>,
    /// The active filter query, if any
    pub query: Option<String>,
}

impl NpcList {
    /// Every NPC, unscored
    pub fn all(npcs: &[Npc]) -> Self {
        Self {
            entries: npcs.iter().map(|n| (n.clone(), None)).collect(),
            query: None,
        }
    }

    /// Filter results for `query`
    pub fn scored(matches: &[ScoredMatch<'_, Npc>], query: &str) -> Self {
        Self {
            entries: matches
                .iter()
                .map(|m| (m.record.clone(), Some(m.score)))
                .collect(),
            query: Some(query.trim().to_string()),
        }
    }

    /// What a typeahead shows for `query`: ranked matches once the query
    /// passes the threshold, every NPC otherwise.
    pub fn for_query(npcs: &[Npc], filter: &FilterConfig, query: &str) -> Self {
        match filter.apply(npcs, Some(query)) {
            Some(matches) => Self::scored(&matches, query),
            None => Self::all(npcs),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NpcListView;

impl View for NpcListView {
    type Payload = NpcList;

    fn build(&mut self) -> RenderTree {
        RenderTree::new(vec![el("div")
            .class("npc-list")
            .child(Node::slot("summary"))
            .child(el("ul").class("npc-list__items").child(Node::slot("items")))
            .into()])
    }

    fn render(&mut self, tree: &mut RenderTree, list: &NpcList) {
        if list.entries.is_empty() {
            let text = match &list.query {
                Some(q) => format!("No NPCs match \u{201c}{}\u{201d}.", q),
                None => "No NPCs recorded.".to_string(),
            };
            tree.assign_slot("summary", vec![el("p").class("placeholder").text(text).into()]);
            return;
        }

        if let Some(q) = &list.query {
            tree.assign_slot(
                "summary",
                vec![el("p")
                    .class("npc-list__summary")
                    .text(format!("{} match \u{201c}{}\u{201d}", list.entries.len(), q))
                    .into()],
            );
        }

        let items = list.entries.iter().map(|(npc, score)| {
            let mut item = el("li").class("npc-list__item");
            if let Some(score) = score {
                item = item.child(el("span").class("score").text(score.to_string()));
            }
            item.children(render_detached(NpcCardView, npc.clone()))
        });
        tree.assign_slot("items", items.map(Node::from).collect());
    }
}

fn header(title: &str, subtitle: &str) -> Vec<Node> {
    vec![
        el("h2").class("record-view__title").text(title).into(),
        el("div").class("record-view__subtitle").text(subtitle).into(),
    ]
}

fn description(text: Option<&str>) -> Vec<Node> {
    text.map(|t| vec![markdown(t)]).unwrap_or_default()
}

fn detail(label: &str, value: Option<&str>) -> Vec<Node> {
    match value {
        Some(v) => vec![el("dt").text(label).into(), el("dd").text(v).into()],
        None => Vec::new(),
    }
}

fn list_section(title: &str, items: &[String]) -> Vec<Node> {
    if items.is_empty() {
        return Vec::new();
    }
    vec![
        el("h3").text(title).into(),
        el("ul")
            .children(items.iter().map(|i| el("li").text(i.as_str())))
            .into(),
    ]
}

fn link_section<R: Record>(title: &str, section: Section, records: &[R]) -> Vec<Node> {
    if records.is_empty() {
        return Vec::new();
    }
    let items = records
        .iter()
        .map(|r| el("li").child(record_link(section, r.key(), r.name())));
    vec![el("h3").text(title).into(), el("ul").children(items).into()]
}

fn record_link(section: Section, key: &RecordKey, text: &str) -> Element {
    let href = Route::record(section, key.clone())
        .map(|r| r.to_hash())
        .unwrap_or_else(|| Route::section(section).to_hash());
    el("a").class("record-link").attr("href", href).text(text)
}
