use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use groq_translator::error::TranslateError;
use groq_translator::translate::interface::CompletionBackend;
use groq_translator::translate::{TranslationRequest, Translator};

// --- Mock completion backend ---

struct MockBackend {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<(String, String)>>,
}

impl MockBackend {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    fn failing(description: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(description.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(&self, system: &str, user: &str) -> Result<String, anyhow::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some((system.to_string(), user.to_string()));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(description) => Err(anyhow::anyhow!("{description}")),
        }
    }
}

fn request(origin: &str, destination: &str, text: &str) -> TranslationRequest {
    TranslationRequest {
        origin: origin.to_string(),
        destination: destination.to_string(),
        text: text.to_string(),
    }
}

// --- Request cycle ---

#[tokio::test]
async fn successful_dispatch_returns_the_service_string_unmodified() {
    let backend = MockBackend::replying("Ciao mondo");
    let translator = Translator::new(Some(backend.clone()));

    let result = translator
        .translate(&request("English", "Italian", "Hello world"))
        .await
        .unwrap();

    assert_eq!(result, "Ciao mondo");
    assert_eq!(backend.call_count(), 1);

    let (system, user) = backend.last_prompt.lock().unwrap().clone().unwrap();
    assert_eq!(
        system,
        "Translate the following text from English to Italian with just one version."
    );
    assert_eq!(user, "Hello world");
}

#[tokio::test]
async fn dispatch_failure_is_reported_with_the_underlying_description() {
    let backend = MockBackend::failing("connection refused");
    let translator = Translator::new(Some(backend.clone()));

    let err = translator
        .translate(&request("English", "Italian", "Hello world"))
        .await
        .unwrap_err();

    match &err {
        TranslateError::Dispatch(description) => {
            assert!(description.contains("connection refused"));
        }
        other => panic!("expected Dispatch error, got {other:?}"),
    }
    assert_eq!(err.message_type(), "translation-error");
}

#[tokio::test]
async fn empty_text_never_dispatches() {
    let backend = MockBackend::replying("unused");
    let translator = Translator::new(Some(backend.clone()));

    for text in ["", "   ", "\n\t  \n"] {
        let err = translator
            .translate(&request("English", "Italian", text))
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::EmptyText));
        assert_eq!(err.message_type(), "validation-warning");
    }
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn missing_credential_never_dispatches_regardless_of_text() {
    let translator = Translator::new(None);

    for text in ["Hello world", ""] {
        let err = translator
            .translate(&request("English", "Italian", text))
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::MissingApiKey));
        assert_eq!(err.message_type(), "config-error");
    }
}

#[tokio::test]
async fn credential_check_precedes_text_validation() {
    // Blank text with no credential still reports the configuration
    // error, per the validation order.
    let translator = Translator::new(None);
    let err = translator
        .translate(&request("English", "Italian", "   "))
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::MissingApiKey));
}

#[tokio::test]
async fn auto_detect_origin_flows_into_the_instruction() {
    let backend = MockBackend::replying("Hallo Welt");
    let translator = Translator::new(Some(backend.clone()));

    translator
        .translate(&request("Automatic Detection", "German", "Hello world"))
        .await
        .unwrap();

    let (system, _) = backend.last_prompt.lock().unwrap().clone().unwrap();
    assert_eq!(
        system,
        "Translate the following text from Automatic Detection to German with just one version."
    );
}

#[tokio::test]
async fn each_submission_is_a_fresh_cycle() {
    // A failed submission carries nothing over into the next one.
    let failing = MockBackend::failing("timed out");
    let translator = Translator::new(Some(failing.clone()));
    let _ = translator
        .translate(&request("English", "Italian", "first"))
        .await;

    let ok = MockBackend::replying("secondo");
    let translator = Translator::new(Some(ok.clone()));
    let result = translator
        .translate(&request("English", "Italian", "second"))
        .await
        .unwrap();
    assert_eq!(result, "secondo");
    assert_eq!(ok.call_count(), 1);
}
