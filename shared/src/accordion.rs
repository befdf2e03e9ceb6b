use std::collections::HashSet;

use crate::types::{AccordionError, AccordionItem, BulkAction, BulkControls, ControlState, ItemId};

/// Open/closed state of a fixed list of accordion sections.
///
/// `selected` holds the ids of the expanded sections in the order they were
/// opened. Every id in it belongs to `items` and appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    items: Vec<AccordionItem>,
    selected: Vec<ItemId>,
}

impl AccordionState {
    /// Build a state with every section collapsed.
    pub fn new(items: Vec<AccordionItem>) -> Result<Self, AccordionError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.get() == 0 {
                return Err(AccordionError::InvalidItemId(item.id));
            }
            if !seen.insert(item.id) {
                return Err(AccordionError::DuplicateItemId(item.id));
            }
        }

        Ok(Self {
            items,
            selected: Vec::new(),
        })
    }

    /// Build a state and open every section, as on first render.
    pub fn initialized(items: Vec<AccordionItem>) -> Result<Self, AccordionError> {
        let mut state = Self::new(items)?;
        state.initialize();
        Ok(state)
    }

    pub fn initialize(&mut self) {
        self.selected = self.item_ids();
    }

    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn selected(&self) -> &[ItemId] {
        &self.selected
    }

    pub fn contains_item(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn is_expanded(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_all_selected(&self) -> bool {
        self.selected.len() == self.items.len()
    }

    pub fn is_none_selected(&self) -> bool {
        self.selected.is_empty()
    }

    /// Flip one section. Returns whether it is now expanded.
    pub fn toggle(&mut self, id: ItemId) -> Result<bool, AccordionError> {
        if !self.contains_item(id) {
            return Err(AccordionError::UnknownItem(id));
        }

        if let Some(pos) = self.selected.iter().position(|selected| *selected == id) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(id);
            Ok(true)
        }
    }

    pub fn bulk_select(&mut self, action: BulkAction) -> Result<(), AccordionError> {
        if self.items.is_empty() {
            return Err(AccordionError::NoRenderedTitles);
        }

        match action {
            BulkAction::SelectAll => self.selected = self.item_ids(),
            BulkAction::UnselectAll => self.selected.clear(),
        }
        Ok(())
    }

    pub fn controls(&self) -> BulkControls {
        BulkControls {
            select_all: ControlState::locked(self.is_all_selected()),
            unselect_all: ControlState::locked(self.is_none_selected()),
        }
    }
}

/// `max-height` for a panel: its natural content height when expanded, unset when collapsed.
pub fn panel_max_height(expanded: bool, natural_height: i32) -> Option<String> {
    expanded.then(|| format!("{}px", natural_height.max(0)))
}
