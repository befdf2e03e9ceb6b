use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Accordion Item Types
// ============================================================================

/// Identifier of an accordion section. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionItem {
    pub id: ItemId,
    pub title: String,
    pub content: String,
}

impl AccordionItem {
    pub fn new(id: u32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            content: content.into(),
        }
    }

    /// DOM identifier of the item's title button
    pub fn dom_id(&self) -> String {
        format!("accordion-{}", self.id)
    }
}

/// Fixed sample sections shown on the demo page
pub fn sample_items() -> Vec<AccordionItem> {
    serde_json::from_str(include_str!("../data/sections.json")).unwrap_or_default()
}

// ============================================================================
// Bulk Action Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BulkAction {
    SelectAll,
    UnselectAll,
}

impl BulkAction {
    pub const ALL: [BulkAction; 2] = [BulkAction::SelectAll, BulkAction::UnselectAll];

    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::SelectAll => "select-all",
            BulkAction::UnselectAll => "unselect-all",
        }
    }

    /// DOM identifier of the checkbox that triggers this action
    pub fn dom_id(&self) -> String {
        format!("accordion-{}", self.as_str())
    }

    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::SelectAll => "Select All",
            BulkAction::UnselectAll => "Unselect All",
        }
    }
}

/// Disabled/checked state of one bulk checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub disabled: bool,
    pub checked: bool,
}

impl ControlState {
    /// A control whose action is already fully applied is locked in the checked position.
    pub fn locked(applied: bool) -> Self {
        Self {
            disabled: applied,
            checked: applied,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkControls {
    pub select_all: ControlState,
    pub unselect_all: ControlState,
}

impl BulkControls {
    pub fn for_action(&self, action: BulkAction) -> ControlState {
        match action {
            BulkAction::SelectAll => self.select_all,
            BulkAction::UnselectAll => self.unselect_all,
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccordionError {
    #[error("no accordion item with id {0}")]
    UnknownItem(ItemId),
    #[error("Unable to apply select action. Please try again")]
    NoRenderedTitles,
    #[error("accordion item ids must be positive, got {0}")]
    InvalidItemId(ItemId),
    #[error("duplicate accordion item id {0}")]
    DuplicateItemId(ItemId),
}

// ============================================================================
// Tests
// ============================================================================
