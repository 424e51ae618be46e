mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{ScriptedProvider, controller, quiz_payload, sample_document};
use rowad_core::error::ValidationError;
use rowad_core::models::config::QuizConfig;
use rowad_core::models::quiz::AgeRange;
use rowad_export::view::Tab;
use rowad_genai::error::GenerationError;
use rowad_web::controller::{ControllerError, SessionStatus, UploadedDocument};

fn config(min_age: u8, max_age: u8, question_count: u8) -> QuizConfig {
    QuizConfig {
        min_age,
        max_age,
        question_count,
    }
}

#[tokio::test]
async fn ten_question_generation_reaches_generated() {
    let provider = Arc::new(ScriptedProvider::replying_with(quiz_payload(10)));
    let controller = controller(provider.clone());

    let quiz = controller
        .generate(config(10, 14, 10), Some(sample_document()))
        .await
        .expect("generation should succeed");

    assert_eq!(quiz.questions.len(), 10);
    assert_eq!(quiz.target_age_range, AgeRange { min: 10, max: 14 });

    let session = controller.snapshot().await;
    assert_eq!(session.status, SessionStatus::Generated);
    assert_eq!(session.tab, Tab::Student);
    assert_eq!(session.document_name.as_deref(), Some("book.pdf"));
    assert_eq!(session.result.as_deref(), Some(quiz.as_ref()));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn provider_failure_ends_in_error_without_result() {
    let provider = Arc::new(ScriptedProvider::failing_with_status(500));
    let controller = controller(provider.clone());

    let err = controller
        .generate(config(10, 14, 10), Some(sample_document()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ControllerError::Generation(GenerationError::Status(500))
    ));
    let session = controller.snapshot().await;
    assert_eq!(session.status, SessionStatus::Error);
    assert!(session.result.is_none());
}

#[tokio::test]
async fn malformed_payload_ends_in_error() {
    let provider = Arc::new(ScriptedProvider::new(|| {
        Ok(common::text_response("هذا ليس JSON"))
    }));
    let controller = controller(provider);

    let err = controller
        .generate(config(10, 14, 5), Some(sample_document()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ControllerError::Generation(GenerationError::ResponseParse(_))
    ));
    assert_eq!(controller.snapshot().await.status, SessionStatus::Error);
}

#[tokio::test]
async fn inverted_age_range_never_reaches_provider() {
    let provider = Arc::new(ScriptedProvider::replying_with(quiz_payload(10)));
    let controller = controller(provider.clone());

    let err = controller
        .generate(config(15, 10, 10), Some(sample_document()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ControllerError::Validation(ValidationError::AgeRangeInverted { min: 15, max: 10 })
    ));
    assert_eq!(provider.calls(), 0);

    let session = controller.snapshot().await;
    assert_eq!(session.status, SessionStatus::Idle);
    assert_eq!(session.config, QuizConfig::default());
}

#[tokio::test]
async fn missing_document_never_reaches_provider() {
    let provider = Arc::new(ScriptedProvider::replying_with(quiz_payload(10)));
    let controller = controller(provider.clone());

    let err = controller
        .generate(config(10, 14, 10), None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ControllerError::Validation(ValidationError::MissingDocument)
    ));

    let empty = UploadedDocument {
        name: "empty.pdf".to_string(),
        bytes: Vec::new(),
    };
    let err = controller
        .generate(config(10, 14, 10), Some(empty))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ControllerError::Validation(ValidationError::MissingDocument)
    ));

    assert_eq!(provider.calls(), 0);
    assert_eq!(controller.snapshot().await.status, SessionStatus::Idle);
}

#[tokio::test]
async fn second_generation_while_loading_is_refused() {
    let (provider, release) = ScriptedProvider::gated(quiz_payload(5));
    let provider = Arc::new(provider);
    let controller = controller(provider.clone());

    let first = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            controller
                .generate(config(8, 10, 5), Some(sample_document()))
                .await
        })
    };

    let mut loading = false;
    for _ in 0..200 {
        if controller.snapshot().await.status == SessionStatus::Loading {
            loading = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(loading, "first generation never entered Loading");

    let err = controller
        .generate(config(8, 10, 5), Some(sample_document()))
        .await
        .unwrap_err();
    assert!(matches!(err, ControllerError::Busy));

    // reset is ignored while a generation is outstanding
    controller.reset().await;
    assert_eq!(controller.snapshot().await.status, SessionStatus::Loading);

    release.send(()).unwrap();
    let quiz = first.await.unwrap().expect("first generation succeeds");
    assert_eq!(quiz.questions.len(), 5);
    assert_eq!(controller.snapshot().await.status, SessionStatus::Generated);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn reset_returns_to_idle_and_keeps_config() {
    let provider = Arc::new(ScriptedProvider::replying_with(quiz_payload(15)));
    let controller = controller(provider);

    controller
        .generate(config(7, 9, 15), Some(sample_document()))
        .await
        .unwrap();
    controller.reset().await;

    let session = controller.snapshot().await;
    assert_eq!(session.status, SessionStatus::Idle);
    assert!(session.result.is_none());
    assert!(session.document_name.is_none());
    assert_eq!(session.config, config(7, 9, 15));
}

#[tokio::test]
async fn reset_after_error_returns_to_idle() {
    let provider = Arc::new(ScriptedProvider::failing_with_status(503));
    let failing = controller(provider);
    assert!(
        failing
            .generate(config(10, 14, 10), Some(sample_document()))
            .await
            .is_err()
    );
    assert_eq!(failing.snapshot().await.status, SessionStatus::Error);
    failing.reset().await;
    assert_eq!(failing.snapshot().await.status, SessionStatus::Idle);
}

#[tokio::test]
async fn switching_tabs_leaves_result_untouched() {
    let provider = Arc::new(ScriptedProvider::replying_with(quiz_payload(10)));
    let controller = controller(provider);

    controller
        .generate(config(10, 14, 10), Some(sample_document()))
        .await
        .unwrap();
    let before = controller.snapshot().await.result.unwrap();

    controller.switch_tab(Tab::Teacher).await;
    controller.switch_tab(Tab::Student).await;
    controller.switch_tab(Tab::Teacher).await;

    let session = controller.snapshot().await;
    assert_eq!(session.tab, Tab::Teacher);
    assert_eq!(session.status, SessionStatus::Generated);
    assert_eq!(session.result.unwrap().as_ref(), before.as_ref());
}

#[tokio::test]
async fn panicking_provider_ends_in_error_after_caller_is_gone() {
    let provider = Arc::new(ScriptedProvider::new(|| panic!("provider blew up")));
    let controller = controller(provider.clone());

    let caller = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            controller
                .generate(config(10, 14, 10), Some(sample_document()))
                .await
        })
    };

    for _ in 0..200 {
        if provider.calls() > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    caller.abort();

    let mut status = SessionStatus::Loading;
    for _ in 0..200 {
        status = controller.snapshot().await.status;
        if status != SessionStatus::Loading {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(status, SessionStatus::Error);
    assert!(controller.snapshot().await.result.is_none());
    assert_eq!(provider.calls(), 1);
}
