use std::sync::Arc;

use rand::rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::Clock;
use crate::bank::QuestionBank;
use crate::error::SessionError;
use super::service::SessionService;

/// Builds quiz sessions from a shared question bank.
#[derive(Debug, Clone)]
pub struct SessionLauncher {
    clock: Clock,
    bank: Arc<QuestionBank>,
    shuffle: bool,
}

impl SessionLauncher {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<QuestionBank>) -> Self {
        Self {
            clock,
            bank,
            shuffle: false,
        }
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn shuffles(&self) -> bool {
        self.shuffle
    }

    /// Start a new session over every question of the bank.
    ///
    /// Bank order is kept unless shuffling is enabled.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the bank cannot form a session.
    pub fn start_session(&self) -> Result<SessionService, SessionError> {
        let mut questions = self.bank.questions().to_vec();
        if self.shuffle {
            let mut rng = rng();
            questions.as_mut_slice().shuffle(&mut rng);
            debug!(questions = questions.len(), "shuffled question order");
        }
        SessionService::new(questions, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use quiz_core::time::fixed_clock;

    fn launcher() -> SessionLauncher {
        SessionLauncher::new(fixed_clock(), Arc::new(QuestionBank::embedded().unwrap()))
    }

    #[test]
    fn sessions_follow_bank_order_by_default() {
        let launcher = launcher();
        let session = launcher.start_session().unwrap();
        let ids: Vec<_> = session.state().questions().iter().map(|q| q.id.clone()).collect();
        let expected: Vec<_> = launcher.bank().questions().iter().map(|q| q.id.clone()).collect();
        assert_eq!(ids, expected);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn shuffled_sessions_keep_every_question() {
        let launcher = launcher().with_shuffle(true);
        assert!(launcher.shuffles());
        let session = launcher.start_session().unwrap();

        let ids: HashSet<_> = session.state().questions().iter().map(|q| q.id.clone()).collect();
        assert_eq!(ids.len(), launcher.bank().len());
    }

    #[test]
    fn each_start_is_a_fresh_session() {
        let launcher = launcher();
        let first = launcher.start_session().unwrap();
        let second = launcher.start_session().unwrap();
        assert_ne!(first.id(), second.id());
    }
}
