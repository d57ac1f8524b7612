use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folio::core::action::{Action, Effect, update};
use folio::core::form::FormPayload;
use folio::core::notification::{
    NETWORK_MESSAGE, NotificationKind, REJECTED_MESSAGE, SUCCESS_MESSAGE,
};
use folio::core::profile::Profile;
use folio::core::state::App;
use folio::core::submission::{FailureReason, SubmissionOutcome};
use folio::relay::{HttpRelay, MailRelay, RelayError};
use folio::tui::tasks::EffectRunner;
use reqwest::Url;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

// ============================================================================
// Helper Functions
// ============================================================================

/// Relay answering immediately, for tests running on paused time.
struct ImmediateRelay {
    accept: bool,
}

#[async_trait]
impl MailRelay for ImmediateRelay {
    fn name(&self) -> &str {
        "immediate"
    }

    async fn deliver(&self, _payload: &FormPayload) -> Result<(), RelayError> {
        if self.accept {
            Ok(())
        } else {
            Err(RelayError::Network("connection refused".to_string()))
        }
    }
}

fn app_with(relay: Arc<dyn MailRelay>) -> App {
    let mut app = App::new(relay, Profile::bundled().unwrap());
    app.form.name = "Ada Lovelace".to_string();
    app.form.email = "ada@example.com".to_string();
    app.form.message = "I'd love to collaborate.".to_string();
    app
}

fn http_app(endpoint: &str) -> App {
    let relay = HttpRelay::new(Url::parse(endpoint).unwrap(), Duration::from_secs(5)).unwrap();
    app_with(Arc::new(relay))
}

fn runner() -> (EffectRunner, UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EffectRunner::new(tx), rx)
}

/// Submit the form and feed the delivery outcome back through the reducer.
async fn submit_and_settle(
    app: &mut App,
    runner: &mut EffectRunner,
    rx: &mut UnboundedReceiver<Action>,
) -> SubmissionOutcome {
    let effect = update(app, Action::Submit);
    assert!(matches!(effect, Effect::Deliver(_)), "got {effect:?}");
    runner.run(app, effect);
    assert!(app.is_sending());

    let action = rx.recv().await.unwrap();
    let Action::SubmissionFinished(outcome) = action else {
        panic!("expected SubmissionFinished, got {action:?}");
    };
    let effect = update(app, action);
    assert!(matches!(effect, Effect::ScheduleDismiss(_)));
    runner.run(app, effect);
    outcome
}

async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

// ============================================================================
// Against a mock relay
// ============================================================================

#[tokio::test]
async fn test_success_shows_one_notification_and_clears_form() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = http_app(&mock_server.uri());
    let (mut runner, mut rx) = runner();

    let outcome = submit_and_settle(&mut app, &mut runner, &mut rx).await;
    assert_eq!(outcome, SubmissionOutcome::Success);

    let shown = app.notification.state();
    assert!(shown.visible);
    assert_eq!(shown.message, SUCCESS_MESSAGE);
    assert_eq!(shown.kind, NotificationKind::Success);
    assert!(app.form.is_blank());
    assert!(!app.is_sending());
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_rejection_keeps_fields() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&mock_server)
        .await;

    let mut app = http_app(&mock_server.uri());
    let (mut runner, mut rx) = runner();

    let outcome = submit_and_settle(&mut app, &mut runner, &mut rx).await;
    assert_eq!(outcome, SubmissionOutcome::Failure(FailureReason::ServerRejected));
    assert_eq!(app.notification.state().message, REJECTED_MESSAGE);
    assert_eq!(app.notification.state().kind, NotificationKind::Failure);
    assert_eq!(app.form.name, "Ada Lovelace");
    assert_eq!(app.form.message, "I'd love to collaborate.");
}

#[tokio::test]
async fn test_unreachable_relay_reports_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut app = http_app(&format!("http://127.0.0.1:{port}/f/test"));
    let (mut runner, mut rx) = runner();

    let outcome = submit_and_settle(&mut app, &mut runner, &mut rx).await;
    assert_eq!(outcome, SubmissionOutcome::Failure(FailureReason::NetworkError));
    assert_eq!(app.notification.state().message, NETWORK_MESSAGE);
    assert!(!app.form.is_blank());
}

#[tokio::test]
async fn test_overlapping_submissions_each_report() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(50)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut app = http_app(&mock_server.uri());
    let (mut runner, mut rx) = runner();

    for _ in 0..2 {
        let effect = update(&mut app, Action::Submit);
        runner.run(&app, effect);
    }
    assert_eq!(app.in_flight, 2);

    for _ in 0..2 {
        let action = rx.recv().await.unwrap();
        assert_eq!(action, Action::SubmissionFinished(SubmissionOutcome::Success));
        let effect = update(&mut app, action);
        runner.run(&app, effect);
    }
    assert_eq!(app.in_flight, 0);
    assert!(app.notification.is_visible());
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut app = http_app(&mock_server.uri());
    app.form.email = "not-an-email".to_string();
    let (mut runner, mut rx) = runner();

    let effect = update(&mut app, Action::Submit);
    assert_eq!(effect, Effect::None);
    runner.run(&app, effect);
    assert!(app.form_error.is_some());
    assert!(!app.notification.is_visible());
    assert!(rx.try_recv().is_err());
}

// ============================================================================
// Dismiss timing (paused clock)
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_notification_hides_after_three_seconds() {
    let mut app = app_with(Arc::new(ImmediateRelay { accept: true }));
    let (mut runner, mut rx) = runner();
    submit_and_settle(&mut app, &mut runner, &mut rx).await;

    tokio::time::advance(Duration::from_millis(2999)).await;
    settle().await;
    assert!(rx.try_recv().is_err());
    assert!(app.notification.is_visible());

    tokio::time::advance(Duration::from_millis(1)).await;
    let action = rx.recv().await.unwrap();
    assert!(matches!(action, Action::NotificationExpired(_)));
    update(&mut app, action);
    assert!(!app.notification.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_dismissed_notification_stays_hidden() {
    let mut app = app_with(Arc::new(ImmediateRelay { accept: false }));
    let (mut runner, mut rx) = runner();
    submit_and_settle(&mut app, &mut runner, &mut rx).await;
    assert_eq!(app.notification.state().message, NETWORK_MESSAGE);

    tokio::time::advance(Duration::from_millis(500)).await;
    let effect = update(&mut app, Action::DismissNotification);
    assert_eq!(effect, Effect::CancelDismiss);
    runner.run(&app, effect);
    assert!(!app.notification.is_visible());
    assert!(!runner.has_pending_dismiss());

    tokio::time::advance(Duration::from_secs(10)).await;
    settle().await;
    assert!(rx.try_recv().is_err());
    assert!(!app.notification.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_replacement_restarts_the_window() {
    let mut app = app_with(Arc::new(ImmediateRelay { accept: true }));
    let (mut runner, mut rx) = runner();
    submit_and_settle(&mut app, &mut runner, &mut rx).await;

    tokio::time::advance(Duration::from_millis(2000)).await;
    let effect = update(
        &mut app,
        Action::SubmissionFinished(SubmissionOutcome::Failure(FailureReason::ServerRejected)),
    );
    runner.run(&app, effect);
    assert_eq!(app.notification.state().message, REJECTED_MESSAGE);

    // Past the first display's deadline: still up
    tokio::time::advance(Duration::from_millis(1500)).await;
    settle().await;
    assert!(rx.try_recv().is_err());
    assert!(app.notification.is_visible());

    // Full window after the replacement
    tokio::time::advance(Duration::from_millis(1500)).await;
    let action = rx.recv().await.unwrap();
    update(&mut app, action);
    assert!(!app.notification.is_visible());
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_stale_expiry_is_ignored() {
    let mut app = app_with(Arc::new(ImmediateRelay { accept: true }));
    let (mut runner, mut rx) = runner();
    submit_and_settle(&mut app, &mut runner, &mut rx).await;
    let first = app.notification.current_id().unwrap();

    let effect = update(&mut app, Action::SubmissionFinished(SubmissionOutcome::Success));
    runner.run(&app, effect);

    // An expiry for the first display that was already queued does nothing
    update(&mut app, Action::NotificationExpired(first));
    assert!(app.notification.is_visible());
}
