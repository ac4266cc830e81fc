//! Single-expansion, collapsible accordion state.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// Index of the expanded entry, if any. Starts fully collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// Expand `index`, collapsing any other entry. Re-toggling the open entry
    /// collapses everything.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}
