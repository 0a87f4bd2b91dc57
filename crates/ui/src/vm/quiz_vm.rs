use quiz_core::model::{Answer, Question};
use services::{NavOutcome, SessionLauncher, SessionProgress, SessionService};
use tracing::{debug, warn};

use crate::views::ViewError;
use crate::vm::summary_vm::{SummaryVm, map_session_summary, verdict_class};

#[derive(Clone, Debug, PartialEq)]
pub enum QuizIntent {
    /// In-progress answer reported by the current widget.
    Answer(Answer),
    Reveal,
    Next,
    Previous,
    JumpTo(usize),
    ShowSummary,
    HideSummary,
    Restart,
}

/// Per-question widget phase. Only moves forward until the question changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Revealed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpItemVm {
    pub index: usize,
    pub label: String,
    pub answered: bool,
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub verdict_label: &'static str,
    pub verdict_class: &'static str,
    pub message: Option<String>,
}

/// Everything the quiz shell needs to render one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizScreenVm {
    pub question: Question,
    pub answer: Option<Answer>,
    pub revealed: bool,
    pub feedback: Option<FeedbackVm>,
    pub progress: SessionProgress,
    pub jump_items: Vec<JumpItemVm>,
    pub can_go_back: bool,
    pub can_check: bool,
    pub next_label: &'static str,
}

pub struct QuizVm {
    session: SessionService,
    phase: QuizPhase,
    summary_open: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: SessionService) -> Self {
        Self {
            session,
            phase: QuizPhase::Answering,
            summary_open: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionService {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_summary_open(&self) -> bool {
        self.summary_open
    }

    /// # Errors
    ///
    /// Returns `ViewError::Navigation` for a jump outside the question list.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        debug!(?intent, index = self.session.current_index(), "quiz intent");
        let before = self.session.current_index();

        match intent {
            QuizIntent::Answer(answer) => self.answer(answer),
            QuizIntent::Reveal => self.reveal(),
            QuizIntent::Next => {
                if self.session.next() == NavOutcome::Completed {
                    debug!("quiz finished");
                }
            }
            QuizIntent::Previous => {
                self.session.previous();
            }
            QuizIntent::JumpTo(index) => {
                self.session
                    .jump_to(index)
                    .map_err(|err| ViewError::from(&err))?;
            }
            QuizIntent::ShowSummary => {
                if self.session.is_complete() {
                    self.summary_open = true;
                }
            }
            QuizIntent::HideSummary => self.summary_open = false,
            QuizIntent::Restart => {
                self.session.restart();
                self.phase = QuizPhase::Answering;
                self.summary_open = false;
            }
        }

        // Moving to another question remounts its widget.
        if self.session.current_index() != before {
            self.phase = QuizPhase::Answering;
        }
        Ok(())
    }

    fn answer(&mut self, answer: Answer) {
        if self.phase == QuizPhase::Revealed {
            debug!("ignoring answer for revealed question");
            return;
        }
        if answer.is_blank() {
            let id = self.session.current_question().id.clone();
            self.session.clear_answer(&id);
        } else {
            self.session.record_current(answer);
        }
    }

    fn reveal(&mut self) {
        if self.session.current_answer().is_none() {
            // Widgets that start from a neutral payload (an ordering, a slider)
            // can be checked without being touched.
            match self.session.current_question().default_answer() {
                Some(default) if !default.is_blank() => self.session.record_current(default),
                _ => return,
            }
        }
        self.phase = QuizPhase::Revealed;
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        let state = self.session.state();
        let question = self.session.current_question();
        let stored = self.session.current_answer();
        let revealed = self.phase == QuizPhase::Revealed;

        let feedback = revealed.then(|| {
            let verdict = question.check(stored);
            FeedbackVm {
                verdict_label: verdict.label(),
                verdict_class: verdict_class(verdict),
                message: question.feedback(verdict),
            }
        });

        let jump_items = state
            .questions()
            .iter()
            .enumerate()
            .map(|(index, item)| JumpItemVm {
                index,
                label: (index + 1).to_string(),
                answered: state.is_answered(&item.id),
                current: index == state.current_index(),
            })
            .collect();

        let default = question.default_answer();
        let can_check = !revealed
            && (stored.is_some() || default.as_ref().is_some_and(|answer| !answer.is_blank()));

        QuizScreenVm {
            question: question.clone(),
            answer: stored.cloned().or(default),
            revealed,
            feedback,
            progress: self.session.progress(),
            jump_items,
            can_go_back: !state.is_first(),
            can_check,
            next_label: if state.is_last() { "Finish" } else { "Next" },
        }
    }

    #[must_use]
    pub fn summary(&self) -> SummaryVm {
        map_session_summary(&self.session.summary())
    }
}

/// # Errors
///
/// Returns `ViewError::EmptySession` when the bank has no questions.
/// Returns `ViewError::Unknown` for other failures.
pub fn start_quiz(launcher: &SessionLauncher) -> Result<QuizVm, ViewError> {
    launcher.start_session().map(QuizVm::new).map_err(|err| {
        warn!(error = %err, "failed to start quiz");
        ViewError::from(&err)
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use quiz_core::time::fixed_clock;
    use services::QuestionBank;

    fn vm() -> QuizVm {
        let launcher =
            SessionLauncher::new(fixed_clock(), Arc::new(QuestionBank::embedded().unwrap()));
        start_quiz(&launcher).unwrap()
    }

    #[test]
    fn reveal_then_navigation_resets_phase() {
        let mut vm = vm();
        vm.dispatch(QuizIntent::Answer(Answer::Choice(1))).unwrap();
        vm.dispatch(QuizIntent::Reveal).unwrap();
        assert_eq!(vm.phase(), QuizPhase::Revealed);

        let screen = vm.screen();
        let feedback = screen.feedback.unwrap();
        assert_eq!(feedback.verdict_label, "Correct");
        assert!(!screen.can_check);

        vm.dispatch(QuizIntent::Next).unwrap();
        assert_eq!(vm.phase(), QuizPhase::Answering);
        vm.dispatch(QuizIntent::Previous).unwrap();
        assert_eq!(vm.phase(), QuizPhase::Answering);
        assert!(vm.screen().feedback.is_none());
    }

    #[test]
    fn answers_are_locked_after_reveal() {
        let mut vm = vm();
        vm.dispatch(QuizIntent::Answer(Answer::Choice(0))).unwrap();
        vm.dispatch(QuizIntent::Reveal).unwrap();
        vm.dispatch(QuizIntent::Answer(Answer::Choice(1))).unwrap();
        assert_eq!(vm.screen().answer, Some(Answer::Choice(0)));
    }

    #[test]
    fn reveal_without_answer_is_ignored_for_choice_questions() {
        let mut vm = vm();
        assert!(!vm.screen().can_check);
        vm.dispatch(QuizIntent::Reveal).unwrap();
        assert_eq!(vm.phase(), QuizPhase::Answering);
    }

    #[test]
    fn reveal_records_neutral_ordering() {
        let mut vm = vm();
        vm.dispatch(QuizIntent::JumpTo(8)).unwrap();
        assert!(vm.screen().can_check);
        vm.dispatch(QuizIntent::Reveal).unwrap();

        let screen = vm.screen();
        assert_eq!(screen.answer, Some(Answer::Order(vec![0, 1, 2, 3])));
        assert_eq!(screen.progress.answered, 1);
        assert_eq!(screen.feedback.unwrap().verdict_label, "Incorrect");
    }

    #[test]
    fn blank_answer_clears_stored_entry() {
        let mut vm = vm();
        vm.dispatch(QuizIntent::JumpTo(15)).unwrap();
        vm.dispatch(QuizIntent::Answer(Answer::Text("mito".into()))).unwrap();
        assert_eq!(vm.screen().progress.answered, 1);

        vm.dispatch(QuizIntent::Answer(Answer::Text("  ".into()))).unwrap();
        let screen = vm.screen();
        assert_eq!(screen.progress.answered, 0);
        assert_eq!(screen.answer, None);
    }

    #[test]
    fn jump_strip_marks_answered_and_current() {
        let mut vm = vm();
        vm.dispatch(QuizIntent::Answer(Answer::Choice(2))).unwrap();
        vm.dispatch(QuizIntent::JumpTo(3)).unwrap();

        let screen = vm.screen();
        assert_eq!(screen.jump_items.len(), 25);
        assert!(screen.jump_items[0].answered);
        assert!(!screen.jump_items[0].current);
        assert!(screen.jump_items[3].current);
        assert_eq!(screen.jump_items[3].label, "4");
        assert_eq!(screen.progress.completion_percent, 4);
    }

    #[test]
    fn out_of_range_jump_maps_to_navigation_error() {
        let mut vm = vm();
        assert_eq!(vm.dispatch(QuizIntent::JumpTo(99)), Err(ViewError::Navigation));
        assert_eq!(vm.screen().progress.current, 0);
    }

    #[test]
    fn summary_opens_only_after_finishing() {
        let mut vm = vm();
        vm.dispatch(QuizIntent::ShowSummary).unwrap();
        assert!(!vm.is_summary_open());

        vm.dispatch(QuizIntent::JumpTo(24)).unwrap();
        assert_eq!(vm.screen().next_label, "Finish");
        vm.dispatch(QuizIntent::Next).unwrap();
        vm.dispatch(QuizIntent::ShowSummary).unwrap();
        assert!(vm.is_summary_open());
        assert_eq!(vm.summary().total, 25);

        vm.dispatch(QuizIntent::HideSummary).unwrap();
        assert!(!vm.is_summary_open());
        assert!(vm.screen().progress.is_complete);
    }

    #[test]
    fn restart_returns_to_first_question() {
        let mut vm = vm();
        vm.dispatch(QuizIntent::Answer(Answer::Choice(1))).unwrap();
        vm.dispatch(QuizIntent::Reveal).unwrap();
        vm.dispatch(QuizIntent::JumpTo(24)).unwrap();
        vm.dispatch(QuizIntent::Next).unwrap();
        vm.dispatch(QuizIntent::ShowSummary).unwrap();

        vm.dispatch(QuizIntent::Restart).unwrap();
        let screen = vm.screen();
        assert!(!vm.is_summary_open());
        assert_eq!(vm.phase(), QuizPhase::Answering);
        assert_eq!(screen.progress.answered, 0);
        assert_eq!(screen.progress.current, 0);
        assert!(!screen.can_go_back);
    }
}
