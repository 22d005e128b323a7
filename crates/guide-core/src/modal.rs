//! Modal dialog state. At most one modal is open at a time.

use crate::types::{RecordKey, RecordKind};

/// What the open modal shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    /// Quick view of a single record
    Record { kind: RecordKind, key: RecordKey },
    /// Keyboard and search help
    Help,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    current: Option<ModalContent>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `content`, replacing whatever was open
    pub fn open(&mut self, content: ModalContent) {
        tracing::debug!(?content, "opening modal");
        self.current = Some(content);
    }

    /// Close the modal. Returns false if nothing was open.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&ModalContent> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_replaces_and_close_is_idempotent() {
        let mut modal = ModalController::new();
        assert!(!modal.is_open());
        assert!(!modal.close());

        modal.open(ModalContent::Help);
        modal.open(ModalContent::Record {
            kind: RecordKind::Npc,
            key: "wren".into(),
        });
        assert!(matches!(
            modal.current(),
            Some(ModalContent::Record { kind: RecordKind::Npc, .. })
        ));

        assert!(modal.close());
        assert!(!modal.close());
        assert!(modal.current().is_none());
    }
}
