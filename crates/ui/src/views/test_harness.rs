use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::dataset;
use quiz_core::model::QuestionSet;
use services::QuizSession;

use crate::context::{UiApp, build_app_context};
use crate::views::{QuestionCard, QuizView, SummaryCard};
use crate::vm::{QuizIntent, QuizScreenVm};

#[derive(Clone)]
struct TestApp {
    title: String,
    questions: Arc<QuestionSet>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn questions(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    /// The stateful page, starting from a fresh session.
    Quiz,
    /// A stateless screen rendered from a prepared session snapshot.
    Screen(QuizScreenVm),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Screen(QuizScreenVm::Question(vm)) => rsx! {
            QuestionCard { vm, on_intent: move |_: QuizIntent| {} }
        },
        ViewKind::Screen(QuizScreenVm::Summary(vm)) => rsx! {
            SummaryCard { vm, on_intent: move |_: QuizIntent| {} }
        },
    }
}

pub struct ViewHarnessDom {
    pub dom: VirtualDom,
}

impl ViewHarnessDom {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn builtin_questions() -> Arc<QuestionSet> {
    Arc::new(dataset::builtin().expect("bundled bank"))
}

pub fn setup_view_harness(view: ViewKind, title: &str) -> ViewHarnessDom {
    let app = Arc::new(TestApp {
        title: title.to_string(),
        questions: builtin_questions(),
    });
    let dom = VirtualDom::new_with_props(ViewHarness, ViewHarnessProps { app, view });
    ViewHarnessDom { dom }
}

/// Render the screen for `session` as it currently stands.
pub fn render_session(session: &QuizSession) -> String {
    let mut harness = setup_view_harness(
        ViewKind::Screen(QuizScreenVm::from_session(session)),
        "Grammar Drill",
    );
    harness.rebuild();
    harness.render()
}
