//! Checklist Models
//!
//! Entries, checklists and their small value types.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TITLE, MAX_INDENTATION};
use crate::item_list::ItemList;

pub type EntryId = u32;
pub type ChecklistId = u32;

/// Item indentation level, always within `0..=MAX_INDENTATION`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Indentation(u8);

impl Indentation {
    pub fn new(level: u8) -> Self {
        Self(level.min(MAX_INDENTATION))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn shifted(self, direction: IndentDirection) -> Self {
        match direction {
            IndentDirection::Increase => Self::new(self.0.saturating_add(1)),
            IndentDirection::Decrease => Self(self.0.saturating_sub(1)),
        }
    }
}

impl From<u8> for Indentation {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<Indentation> for u8 {
    fn from(indentation: Indentation) -> Self {
        indentation.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDirection {
    Increase,
    Decrease,
}

/// Discriminant of an [`Entry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Item,
    Section,
}

/// One line of a checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    /// Actionable line with a checkbox
    Item {
        id: EntryId,
        text: String,
        completed: bool,
        indentation: Indentation,
    },
    /// Non-actionable header, always rendered flush
    Section { id: EntryId, text: String },
}

impl Entry {
    pub fn item(id: EntryId, text: impl Into<String>) -> Self {
        Entry::Item {
            id,
            text: text.into(),
            completed: false,
            indentation: Indentation::default(),
        }
    }

    pub fn section(id: EntryId, text: impl Into<String>) -> Self {
        Entry::Section { id, text: text.into() }
    }

    pub fn id(&self) -> EntryId {
        match self {
            Entry::Item { id, .. } | Entry::Section { id, .. } => *id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Entry::Item { text, .. } | Entry::Section { text, .. } => text,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Item { .. } => EntryKind::Item,
            Entry::Section { .. } => EntryKind::Section,
        }
    }

    pub fn is_section(&self) -> bool {
        self.kind() == EntryKind::Section
    }

    /// Sections are never completed
    pub fn is_completed(&self) -> bool {
        matches!(self, Entry::Item { completed: true, .. })
    }

    /// Indentation used for layout; sections sit flush
    pub fn display_indentation(&self) -> u8 {
        match self {
            Entry::Item { indentation, .. } => indentation.level(),
            Entry::Section { .. } => 0,
        }
    }

    pub(crate) fn text_mut(&mut self) -> &mut String {
        match self {
            Entry::Item { text, .. } | Entry::Section { text, .. } => text,
        }
    }
}

/// Checklist flavour. Only a label; it does not change behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecklistType {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "DO-CONFIRM")]
    DoConfirm,
    #[serde(rename = "READ-DO")]
    ReadDo,
}

impl ChecklistType {
    pub const ALL: [ChecklistType; 3] = [ChecklistType::Unset, ChecklistType::DoConfirm, ChecklistType::ReadDo];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistType::Unset => "",
            ChecklistType::DoConfirm => "DO-CONFIRM",
            ChecklistType::ReadDo => "READ-DO",
        }
    }

    pub fn from_label(s: &str) -> Self {
        match s {
            "DO-CONFIRM" => ChecklistType::DoConfirm,
            "READ-DO" => ChecklistType::ReadDo,
            _ => ChecklistType::Unset,
        }
    }
}

/// A single checklist with its header and footer fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: ChecklistId,
    pub title: String,
    pub checklist_type: ChecklistType,
    /// Short description of when the checklist applies
    pub context: String,
    pub items: ItemList,
    pub created_by: String,
    pub completed_by: String,
}

impl Checklist {
    /// Blank checklist with the default title and no entries
    pub fn new(id: ChecklistId) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            checklist_type: ChecklistType::Unset,
            context: String::new(),
            items: ItemList::default(),
            created_by: String::new(),
            completed_by: String::new(),
        }
    }
}
