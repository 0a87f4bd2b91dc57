/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub current: usize,
    pub completion_percent: u8,
    pub is_complete: bool,
}

impl SessionProgress {
    /// `current` as a 1-based position for display.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current + 1
    }
}
