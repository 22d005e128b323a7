//! Display unit lifecycle contract, exercised through the real record views.

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;

use guide_core::html::{el, Node, RenderTree};
use guide_core::{DataStore, DisplayUnit, RecordKind, RecordPayload, RecordView, View};
use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output for assertions
#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, writer.contents())
}

/// Counts how often its skeleton is built
struct Counting {
    builds: Rc<Cell<usize>>,
}

impl View for Counting {
    type Payload = &'static str;

    fn build(&mut self) -> RenderTree {
        self.builds.set(self.builds.get() + 1);
        RenderTree::new(vec![el("p").child(Node::slot("body")).into()])
    }

    fn render(&mut self, tree: &mut RenderTree, payload: &&'static str) {
        tree.assign_slot("body", vec![Node::text(*payload)]);
    }
}

fn store() -> DataStore {
    DataStore::embedded().expect("bundled campaign loads")
}

#[test]
fn record_panel_buffers_until_attached() {
    let store = store();
    let mut unit = DisplayUnit::new(RecordView::default());

    unit.set_data(RecordPayload::resolve(&store, RecordKind::Npc, "wren"));
    unit.set_data(RecordPayload::resolve(&store, RecordKind::Npc, "maren-holt"));
    assert!(unit.html().is_none());

    unit.attach();
    let html = unit.html().unwrap();
    assert!(html.contains("Maren Holt"));
    assert!(!html.contains("Wren"));
}

#[test]
fn build_happens_exactly_once() {
    let builds = Rc::new(Cell::new(0));
    let mut unit = DisplayUnit::new(Counting {
        builds: builds.clone(),
    });

    for _ in 0..3 {
        unit.attach();
        unit.set_data("tick");
        unit.detach();
    }
    unit.attach();
    assert_eq!(builds.get(), 1);
}

#[test]
fn ready_notification_counts_attachments() {
    let fired = Rc::new(Cell::new(0));
    let mut unit = DisplayUnit::new(Counting {
        builds: Rc::default(),
    });
    let counter = fired.clone();
    unit.on_ready(move || counter.set(counter.get() + 1));

    unit.attach();
    unit.attach();
    assert!(unit.is_ready());
    unit.detach();
    unit.detach();
    assert!(!unit.is_ready());
    unit.attach();
    assert!(unit.is_ready());
    assert_eq!(fired.get(), 2);
}

#[test]
fn early_slot_assignment_warns_and_does_nothing() {
    let mut unit = DisplayUnit::named(
        "early-panel",
        Counting {
            builds: Rc::default(),
        },
    );

    let (applied, logs) = with_captured_logs(|| unit.assign_slot("body", vec![Node::text("early")]));
    assert!(!applied);
    assert!(logs.contains("WARN"), "no warning in: {logs}");
    assert!(logs.contains("early-panel"));
    assert!(unit.html().is_none());
}

#[test]
fn assignment_when_ready_is_silent() {
    let mut unit = DisplayUnit::new(Counting {
        builds: Rc::default(),
    });
    unit.attach();

    let (applied, logs) = with_captured_logs(|| unit.assign_slot("body", vec![Node::text("late")]));
    assert!(applied);
    assert!(logs.is_empty(), "unexpected log output: {logs}");
    assert_eq!(unit.html().unwrap(), "<p>late</p>");
}

#[test]
fn secrets_toggle_rerenders_in_place() {
    let store = store();
    let mut unit = DisplayUnit::new(RecordView::default());
    unit.set_data(RecordPayload::resolve(&store, RecordKind::Npc, "maren-holt"));
    unit.attach();
    assert!(!unit.html().unwrap().contains("customs purse"));

    unit.configure(|view| view.show_secrets = true);
    assert!(unit.html().unwrap().contains("customs purse"));

    unit.configure(|view| view.show_secrets = false);
    assert!(!unit.html().unwrap().contains("customs purse"));
}

#[test]
fn missing_record_renders_not_found() {
    let store = store();
    let mut unit = DisplayUnit::new(RecordView::default());
    unit.attach();
    unit.set_data(RecordPayload::resolve(&store, RecordKind::Threat, "white-whale"));
    let html = unit.html().unwrap();
    assert!(html.contains("white-whale"));
    assert!(html.to_lowercase().contains("not found"));
}
