use rowad_core::models::config::{ALLOWED_QUESTION_COUNTS, MAX_AGE, MIN_AGE, QuizConfig};
use rowad_core::models::quiz::QuizResult;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::header::{ExportHeader, ORGANIZATION, TAGLINE};
use crate::view::{QuizView, Tab};

const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
const FORM_TEMPLATE: &str = include_str!("../templates/form.html");
const QUIZ_TEMPLATE: &str = include_str!("../templates/quiz.html");

/// What the generation form shows besides the current config.
#[derive(Debug, Clone, Serialize)]
pub struct FormContext {
    pub config: QuizConfig,
    pub loading: bool,
    /// Validation or failure message shown under the form.
    pub message: Option<String>,
    pub document_name: Option<String>,
}

#[derive(Serialize)]
struct FormPage<'a> {
    organization: &'static str,
    tagline: &'static str,
    form: &'a FormContext,
    question_counts: [u8; 6],
    min_age_bound: u8,
    max_age_bound: u8,
}

#[derive(Serialize)]
struct QuizPage<'a> {
    organization: &'static str,
    tagline: &'static str,
    header: &'a ExportHeader,
    age_line: String,
    date_line: String,
    quiz: QuizView,
    tabs: [TabLink; 2],
}

#[derive(Serialize)]
struct TabLink {
    key: &'static str,
    label: &'static str,
    active: bool,
}

/// HTML renderer for the form page and the two quiz views.
///
/// Templates are compiled once at construction; rendering the same input
/// twice yields identical output.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE_TEMPLATE),
            ("form.html", FORM_TEMPLATE),
            ("quiz.html", QUIZ_TEMPLATE),
        ])
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

        Ok(Self { tera })
    }

    pub fn render_form_page(&self, form: &FormContext) -> Result<String, ExportError> {
        let page = FormPage {
            organization: ORGANIZATION,
            tagline: TAGLINE,
            form,
            question_counts: ALLOWED_QUESTION_COUNTS,
            min_age_bound: MIN_AGE,
            max_age_bound: MAX_AGE,
        };
        self.render("form.html", &page)
    }

    pub fn render_quiz_page(
        &self,
        quiz: &QuizResult,
        tab: Tab,
        header: &ExportHeader,
    ) -> Result<String, ExportError> {
        let page = QuizPage {
            organization: ORGANIZATION,
            tagline: TAGLINE,
            header,
            age_line: header.age_line(),
            date_line: header.date_line(),
            quiz: QuizView::project(quiz, tab),
            tabs: [Tab::Student, Tab::Teacher].map(|t| TabLink {
                key: t.as_str(),
                label: t.label(),
                active: t == tab,
            }),
        };
        self.render("quiz.html", &page)
    }

    fn render(&self, template_name: &str, page: &impl Serialize) -> Result<String, ExportError> {
        let context = Context::from_serialize(page)
            .map_err(|e| ExportError::TemplateRender(e.to_string()))?;
        let rendered = self.tera.render(template_name, &context)?;
        Ok(rendered)
    }
}
