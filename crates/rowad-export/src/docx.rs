use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::info;

use crate::error::ExportError;
use crate::header::ExportHeader;
use crate::styles::DocumentStyles;
use crate::view::{OptionView, QuestionView, QuizView};

/// Generate a paged DOCX document from a projected quiz view.
///
/// Layout, top to bottom:
/// - organization and project headings, age range and date;
/// - `اختبار تقييمي: <title>` heading;
/// - numbered questions with lettered options;
/// - teacher view only: difficulty, marked correct option, answer and page line;
/// - optional credit line.
///
/// Every paragraph is marked right-to-left (`w:bidi`) and right-aligned, with
/// complex-script fonts set for Arabic.
pub fn generate_docx(
    view: &QuizView,
    header: &ExportHeader,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    docx = docx
        .add_paragraph(heading_paragraph(&header.organization, "Heading1", styles))
        .add_paragraph(body_paragraph(&header.project, styles))
        .add_paragraph(body_paragraph(&header.age_line(), styles))
        .add_paragraph(body_paragraph(&header.date_line(), styles))
        .add_paragraph(rtl_paragraph())
        .add_paragraph(
            heading_paragraph(&format!("اختبار تقييمي: {}", view.title), "Heading2", styles)
                .align(AlignmentType::Center),
        )
        .add_paragraph(rtl_paragraph());

    for question in &view.questions {
        docx = docx.add_paragraph(question_paragraph(question, styles));
        for option in &question.options {
            docx = docx.add_paragraph(option_paragraph(option, styles));
        }
        if let (Some(answer), Some(page)) = (&question.correct_answer, &question.page_number) {
            docx = docx.add_paragraph(body_paragraph(
                &format!("الإجابة الصحيحة: {answer}    صفحة: {page}"),
                styles,
            ));
        }
        docx = docx.add_paragraph(rtl_paragraph());
    }

    if let Some(credit) = &header.credit {
        docx = docx.add_paragraph(
            rtl_paragraph()
                .align(AlignmentType::Center)
                .add_run(text_run(credit, styles).bold()),
        );
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    info!(
        tab = %view.tab,
        questions = view.questions.len(),
        bytes = bytes.len(),
        "quiz exported to docx"
    );

    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn fonts(styles: &DocumentStyles) -> RunFonts {
    RunFonts::new()
        .ascii(&styles.latin_font)
        .hi_ansi(&styles.latin_font)
        .cs(&styles.arabic_font)
}

fn text_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(fonts(styles))
}

/// Empty right-to-left paragraph, right-aligned.
fn rtl_paragraph() -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Right);
    para.property = para.property.bidi(true);
    para
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    rtl_paragraph()
        .style(style_id)
        .add_run(Run::new().add_text(text).bold().fonts(fonts(styles)))
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    rtl_paragraph().add_run(text_run(text, styles))
}

fn question_paragraph(question: &QuestionView, styles: &DocumentStyles) -> Paragraph {
    let mut para = rtl_paragraph()
        .add_run(text_run(&format!("{}. {}", question.number, question.text), styles).bold());

    if let Some(badge) = &question.difficulty {
        para = para.add_run(text_run(&format!("  [{}]", badge.label), styles));
    }

    para
}

fn option_paragraph(option: &OptionView, styles: &DocumentStyles) -> Paragraph {
    let line = format!("    {}) {}", option.letter, option.text);
    let run = if option.is_correct {
        text_run(&format!("{line} ✓"), styles)
            .bold()
            .color(&styles.correct_color)
    } else {
        text_run(&line, styles)
    };

    rtl_paragraph().add_run(run)
}
