pub mod app;
pub mod context;
pub mod routes;
pub mod views;
pub mod vm;
pub mod widgets;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
