/// Tracks which pending demand, if any, is open in the detail panel.
///
/// At most one demand is active at a time. Closing the panel and navigating
/// away both clear it. Purely synchronous; no side effects beyond the value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SelectionState {
    active: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.active = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
