mod quiz_vm;
mod rich_text;
mod summary_vm;
mod time_fmt;

pub use quiz_vm::{
    FeedbackVm, JumpItemVm, QuizIntent, QuizPhase, QuizScreenVm, QuizVm, start_quiz,
};
pub use rich_text::inline_markdown_to_html;
pub use summary_vm::{OutcomeRowVm, SummaryVm, map_session_summary, verdict_class};
