//! Joke fetcher contract tests
//!
//! A scripted transport stands in for the network so every test can assert
//! exactly what was sent and how many times.

use itsajoke::joke::{ChatCall, HttpReply, JokeFetcher, Transport, NO_JOKE_FALLBACK};
use itsajoke::joke::types::Role;
use itsajoke::{JokeConfig, JokeError, Result};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const KEY_VAR: &str = "ITSAJOKE_TEST_API_KEY";
const TEST_KEY: &str = "sk-test-123";

/// Transport that replays one scripted outcome and records each call
#[derive(Clone)]
struct ScriptedTransport {
    outcome: std::result::Result<HttpReply, String>,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<ChatCall>>>,
}

impl ScriptedTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(HttpReply::new(status, body)),
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for ScriptedTransport {
    fn post_json(&self, call: ChatCall) -> impl Future<Output = Result<HttpReply>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(call);
        let outcome = self.outcome.clone().map_err(JokeError::Transport);
        async move { outcome }
    }
}

fn keyed_config() -> JokeConfig {
    std::env::set_var(KEY_VAR, TEST_KEY);
    JokeConfig::default().with_api_key_var(KEY_VAR)
}

#[tokio::test]
async fn test_success_is_trimmed() {
    let transport = ScriptedTransport::replying(
        200,
        r#"{"choices":[{"message":{"content":"  Why'd the chicken cross the road? To escape you.  "}}]}"#,
    );
    let fetcher = JokeFetcher::new(keyed_config(), transport.clone());

    let joke = fetcher.fetch().await.unwrap();
    assert_eq!(joke, "Why'd the chicken cross the road? To escape you.");
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_empty_choices_fall_back() {
    let transport = ScriptedTransport::replying(200, r#"{"choices":[]}"#);
    let fetcher = JokeFetcher::new(keyed_config(), transport);

    assert_eq!(fetcher.fetch().await.unwrap(), NO_JOKE_FALLBACK);
    assert_eq!(NO_JOKE_FALLBACK, "No joke found.");
}

#[tokio::test]
async fn test_error_status_surfaces_server_message() {
    let transport = ScriptedTransport::replying(429, r#"{"error":{"message":"rate limited"}}"#);
    let fetcher = JokeFetcher::new(keyed_config(), transport);

    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(err, JokeError::Api("rate limited".to_string()));
    assert_eq!(err.to_string(), "rate limited");
}

#[tokio::test]
async fn test_unparseable_error_body_uses_generic_message() {
    let transport = ScriptedTransport::replying(502, "Bad Gateway");
    let fetcher = JokeFetcher::new(keyed_config(), transport);

    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(err.to_string(), "OpenAI API error");
}

#[tokio::test]
async fn test_missing_credential_never_touches_network() {
    let transport = ScriptedTransport::replying(200, r#"{"choices":[]}"#);
    let config = JokeConfig::default().with_api_key_var("ITSAJOKE_TEST_MISSING_KEY");
    let fetcher = JokeFetcher::new(config, transport.clone());

    let err = fetcher.fetch().await.unwrap_err();
    assert!(matches!(err, JokeError::MissingCredential(_)));
    assert!(err.to_string().contains("API key not set"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_empty_credential_counts_as_missing() {
    std::env::set_var("ITSAJOKE_TEST_EMPTY_KEY", "");
    let transport = ScriptedTransport::replying(200, r#"{"choices":[]}"#);
    let config = JokeConfig::default().with_api_key_var("ITSAJOKE_TEST_EMPTY_KEY");
    let fetcher = JokeFetcher::new(config, transport.clone());

    assert!(matches!(
        fetcher.fetch().await,
        Err(JokeError::MissingCredential(_))
    ));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_transport_failure_keeps_underlying_message() {
    let transport = ScriptedTransport::failing("dns error: no such host");
    let fetcher = JokeFetcher::new(keyed_config(), transport);

    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(err.to_string(), "dns error: no such host");
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_request_carries_prompt_sampling_and_bearer() {
    let transport = ScriptedTransport::replying(200, r#"{"choices":[]}"#);
    let fetcher = JokeFetcher::new(keyed_config(), transport.clone());
    fetcher.fetch().await.unwrap();

    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let call = &seen[0];

    assert_eq!(call.url, "https://api.openai.com/v1/chat/completions");
    assert_eq!(call.api_key, TEST_KEY);
    assert_eq!(call.body.model, "gpt-4o-mini");
    assert_eq!(call.body.max_tokens, 60);
    assert_eq!(call.body.temperature, 0.9);
    assert_eq!(call.body.messages.len(), 1);
    assert_eq!(call.body.messages[0].role, Role::User);
    assert!(call.body.messages[0].content.contains("under 30 words"));
}

#[tokio::test]
async fn test_each_fetch_is_an_independent_request() {
    let transport =
        ScriptedTransport::replying(200, r#"{"choices":[{"message":{"content":"a"}}]}"#);
    let fetcher = JokeFetcher::new(keyed_config(), transport.clone());

    fetcher.fetch().await.unwrap();
    fetcher.fetch().await.unwrap();
    assert_eq!(transport.call_count(), 2);
}
