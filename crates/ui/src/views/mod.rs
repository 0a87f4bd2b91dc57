mod home;
mod quiz;
mod state;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState};
pub use summary::SummaryView;
