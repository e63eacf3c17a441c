mod common;

use std::sync::Arc;
use std::time::Duration;

use legalease::application::ports::LlmClientError;
use legalease::application::services::{
    SIMPLIFICATION_PROMPT, SUMMARY_PROMPT, TERM_EXPLANATION_PROMPT, TaskError, TaskFailureKind,
};
use legalease::domain::{SourceDocument, TaskKind};
use legalease::infrastructure::text_processing::CompositeFileLoader;

use common::{
    BrokenFileLoader, EchoLlmClient, FailingLlmClient, RecordingLlmClient, SelectiveLlmClient,
    SlowLlmClient, Utf8FileLoader, service, service_with,
};

#[tokio::test]
async fn given_short_text_when_simplifying_then_returns_model_output_untruncated() {
    let service = service(Utf8FileLoader, EchoLlmClient);

    let output = service.simplify("The lessee shall pay rent.").await.unwrap();

    assert_eq!(
        output.text,
        "Please simplify this legal text:\n\nThe lessee shall pay rent."
    );
    assert!(!output.truncated);
}

#[tokio::test]
async fn given_long_text_when_simplifying_then_model_sees_first_four_thousand_chars() {
    let llm = Arc::new(RecordingLlmClient::default());
    let service = service_with(Arc::new(Utf8FileLoader), Arc::clone(&llm), None);
    let text = format!("{}{}", "a".repeat(4000), "b".repeat(6000));

    let output = service.simplify(&text).await.unwrap();

    assert!(output.truncated);
    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 1);
    let (system, user) = &prompts[0];
    assert_eq!(system, SIMPLIFICATION_PROMPT);
    assert!(user.ends_with(&"a".repeat(4000)));
    assert!(!user.contains('b'));
}

#[tokio::test]
async fn given_long_text_when_summarizing_then_model_sees_first_three_thousand_chars() {
    let llm = Arc::new(RecordingLlmClient::default());
    let service = service_with(Arc::new(Utf8FileLoader), Arc::clone(&llm), None);
    let text = "x".repeat(10_000);

    let output = service.summarize(&text).await.unwrap();

    assert!(output.truncated);
    let (system, user) = &llm.prompts()[0];
    assert_eq!(system, SUMMARY_PROMPT);
    assert_eq!(
        user.len(),
        "Please summarize this legal document:\n\n".len() + 3000
    );
}

#[tokio::test]
async fn given_term_when_explaining_then_sends_term_unbounded_with_explain_instruction() {
    let llm = Arc::new(RecordingLlmClient::default());
    let service = service_with(Arc::new(Utf8FileLoader), Arc::clone(&llm), None);

    let explanation = service.explain_term("Force Majeure").await.unwrap();

    assert_eq!(explanation, "recorded");
    let (system, user) = &llm.prompts()[0];
    assert_eq!(system, TERM_EXPLANATION_PROMPT);
    assert_eq!(user, "Please explain this legal term: Force Majeure");
}

#[tokio::test]
async fn given_failing_model_when_simplifying_then_returns_ai_service_error() {
    let service = service(Utf8FileLoader, FailingLlmClient);

    let err = service.simplify("clause").await.unwrap_err();

    assert_eq!(err.kind(), TaskFailureKind::AiServiceError);
    assert!(matches!(
        err,
        TaskError::AiService {
            task: TaskKind::Simplify,
            source: LlmClientError::ApiRequestFailed(_),
        }
    ));
    assert!(
        err.user_message()
            .starts_with("Error processing text with AI:")
    );
}

#[tokio::test]
async fn given_slow_model_when_timeout_elapses_then_returns_ai_service_timeout() {
    let service = service_with(
        Arc::new(Utf8FileLoader),
        Arc::new(SlowLlmClient(Duration::from_secs(5))),
        Some(Duration::from_millis(20)),
    );

    let err = service.summarize("clause").await.unwrap_err();

    assert!(matches!(
        err,
        TaskError::AiService {
            task: TaskKind::Summarize,
            source: LlmClientError::Timeout(_),
        }
    ));
}

#[tokio::test]
async fn given_text_upload_when_processing_then_fills_all_three_slots() {
    let service = service(CompositeFileLoader::with_default_adapters(), SelectiveLlmClient {
        failing_instruction: "",
    });
    let document = SourceDocument::new(
        "notes.txt".to_string(),
        b"Sample text file content".to_vec(),
    );

    let outcome = service.process_upload(document).await.unwrap();

    assert_eq!(outcome.extracted.content, "Sample text file content");
    assert_eq!(outcome.simplified.unwrap().text, "plain version");
    assert_eq!(outcome.summary.unwrap().text, "short summary");
}

#[tokio::test]
async fn given_summary_failure_when_processing_upload_then_simplification_still_returned() {
    let service = service(Utf8FileLoader, SelectiveLlmClient::failing_summary());
    let document = SourceDocument::new("deed.txt".to_string(), b"Deed of trust".to_vec());

    let outcome = service.process_upload(document).await.unwrap();

    assert_eq!(outcome.extracted.content, "Deed of trust");
    assert_eq!(outcome.simplified.unwrap().text, "plain version");
    let summary_err = outcome.summary.unwrap_err();
    assert_eq!(summary_err.kind(), TaskFailureKind::AiServiceError);
    assert!(
        summary_err
            .user_message()
            .starts_with("Error generating summary:")
    );
}

#[tokio::test]
async fn given_simplify_failure_when_processing_upload_then_summary_still_returned() {
    let service = service(Utf8FileLoader, SelectiveLlmClient::failing_simplify());
    let document = SourceDocument::new("deed.txt".to_string(), b"Deed of trust".to_vec());

    let outcome = service.process_upload(document).await.unwrap();

    assert!(outcome.simplified.is_err());
    assert_eq!(outcome.summary.unwrap().text, "short summary");
}

#[tokio::test]
async fn given_extraction_failure_when_processing_upload_then_model_is_never_called() {
    let llm = Arc::new(RecordingLlmClient::default());
    let service = service_with(Arc::new(BrokenFileLoader), Arc::clone(&llm), None);
    let document = SourceDocument::new("broken.docx".to_string(), b"garbage".to_vec());

    let err = service.process_upload(document).await.unwrap_err();

    assert_eq!(err.kind(), TaskFailureKind::ExtractionError);
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_unknown_format_when_processing_upload_then_rejected_before_extraction() {
    let llm = Arc::new(RecordingLlmClient::default());
    let service = service_with(Arc::new(Utf8FileLoader), Arc::clone(&llm), None);
    let document = SourceDocument::new("photo.jpg".to_string(), b"not text".to_vec());

    let err = service.process_upload(document).await.unwrap_err();

    assert!(matches!(err, TaskError::UnsupportedFormat(_)));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_blank_text_file_when_processing_upload_then_reports_extraction_error() {
    let llm = Arc::new(RecordingLlmClient::default());
    let service = service_with(
        Arc::new(CompositeFileLoader::with_default_adapters()),
        Arc::clone(&llm),
        None,
    );
    let document = SourceDocument::new("blank.txt".to_string(), b"   ".to_vec());

    let err = service.process_upload(document).await.unwrap_err();

    assert_eq!(err.kind(), TaskFailureKind::ExtractionError);
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_long_upload_when_processing_then_each_task_gets_its_own_budget() {
    let llm = Arc::new(RecordingLlmClient::default());
    let service = service_with(Arc::new(Utf8FileLoader), Arc::clone(&llm), None);
    let document = SourceDocument::new("long.txt".to_string(), "#".repeat(5000).into_bytes());

    let outcome = service.process_upload(document).await.unwrap();

    assert_eq!(outcome.extracted.char_count(), 5000);
    assert!(outcome.simplified.unwrap().truncated);
    assert!(outcome.summary.unwrap().truncated);
    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 2);
    for (system, user) in prompts {
        let payload_chars = user.chars().filter(|c| *c == '#').count();
        if system == SIMPLIFICATION_PROMPT {
            assert_eq!(payload_chars, 4000);
        } else {
            assert_eq!(payload_chars, 3000);
        }
    }
}
