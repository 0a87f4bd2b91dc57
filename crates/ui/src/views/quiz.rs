use std::sync::Arc;

use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::views::{SummaryView, ViewError, ViewState};
use crate::vm::{QuizIntent, QuizScreenVm, inline_markdown_to_html, start_quiz};
use crate::widgets::QuestionWidget;

mod controls;
mod feedback;
mod header;
mod jump_strip;

use controls::{CompletionBanner, NavControls};
use feedback::FeedbackPanel;
use header::ProgressHeader;
use jump_strip::JumpStrip;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
use crate::vm::QuizVm;

/// Alt+Arrow keys navigate and Alt+Enter checks, leaving plain keys to inputs.
fn intent_for_key(key: &Key, modifiers: Modifiers) -> Option<QuizIntent> {
    if !modifiers.contains(Modifiers::ALT) {
        return None;
    }
    match key {
        Key::ArrowRight => Some(QuizIntent::Next),
        Key::ArrowLeft => Some(QuizIntent::Previous),
        Key::Enter => Some(QuizIntent::Reveal),
        _ => None,
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let launcher = ctx.session_launcher();

    let state = use_signal({
        let launcher = Arc::clone(&launcher);
        move || ViewState::from(start_quiz(&launcher))
    });
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut state = state;
        let mut error = error;

        let result = match &mut *state.write() {
            ViewState::Ready(vm) => vm.dispatch(intent),
            ViewState::Error(_) => {
                debug!(?intent, "ignoring intent without a session");
                return;
            }
        };
        error.set(result.err());
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, state);
            }
        }
    }

    let retry = use_callback(move |()| {
        let mut state = state;
        let mut error = error;
        state.set(ViewState::from(start_quiz(&launcher)));
        error.set(None);
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if let Some(intent) = intent_for_key(&evt.data.key(), evt.data.modifiers()) {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    });

    let state_guard = state.read();
    let body = match &*state_guard {
        ViewState::Error(err) => rsx! {
            div { class: "quiz-error",
                p { "{err.message()}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        },
        ViewState::Ready(vm) if vm.is_summary_open() => rsx! {
            SummaryView {
                summary: vm.summary(),
                on_review: move |()| dispatch_intent.call(QuizIntent::HideSummary),
                on_restart: move |()| dispatch_intent.call(QuizIntent::Restart),
            }
        },
        ViewState::Ready(vm) => rsx! {
            QuizShell { screen: vm.screen(), error: error(), on_intent: dispatch_intent }
        },
    };

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            {body}
        }
    }
}

#[component]
fn QuizShell(
    screen: QuizScreenVm,
    error: Option<ViewError>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let title_html = inline_markdown_to_html(&screen.question.title);
    let widget_key = screen.question.id.to_string();

    rsx! {
        ProgressHeader { progress: screen.progress, kind_label: screen.question.kind.label() }
        JumpStrip { items: screen.jump_items.clone(), on_intent }
        if screen.progress.is_complete {
            CompletionBanner { on_intent }
        }
        article { class: "question-card",
            h3 { class: "question-title", dangerous_inner_html: "{title_html}" }
            QuestionWidget {
                key: "{widget_key}",
                question: screen.question.clone(),
                current: screen.answer.clone(),
                revealed: screen.revealed,
                on_answer: move |answer| on_intent.call(QuizIntent::Answer(answer)),
            }
            if let Some(feedback) = screen.feedback.clone() {
                FeedbackPanel { feedback }
            }
        }
        if let Some(err) = error {
            p { class: "quiz-inline-error", "{err.message()}" }
        }
        NavControls {
            can_go_back: screen.can_go_back,
            can_check: screen.can_check,
            next_label: screen.next_label,
            on_intent,
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    state: Rc<RefCell<Option<Signal<ViewState<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        state: Signal<ViewState<QuizVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn state(&self) -> Signal<ViewState<QuizVm>> {
        (*self.state.borrow()).expect("quiz state registered")
    }
}
