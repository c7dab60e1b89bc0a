use crate::common::{
    self, ACCOUNT_SID, client_for, daily_body, messenger_for, mock_daily, mock_news, mock_relay,
    mock_relay_body, setup_server,
};
use httpmock::Method::{GET, POST};
use serde_json::json;
use stock_news_alert::{AlertError, Channel, Direction, RunOutcome, Watch, run};

fn rivian() -> Watch {
    Watch::new("RIVN", "Rivian")
}

#[tokio::test]
async fn big_move_sends_summary_then_news() {
    let server = setup_server();
    let daily = mock_daily(&server, "RIVN", daily_body(&[100.0, 95.0, 94.0]));
    let news = mock_news(
        &server,
        "Rivian",
        common::fixture("news_everything", "Rivian", "json"),
    );
    let summary = mock_relay_body(&server, Channel::WhatsApp, "RIVN: \u{25B2} 5.26%");
    let first = mock_relay_body(
        &server,
        Channel::WhatsApp,
        "Headline: Rivian shares jump after delivery numbers beat estimates\nBrief: The EV maker delivered more trucks than analysts expected in the third quarter.",
    );
    let second = mock_relay_body(
        &server,
        Channel::WhatsApp,
        "Headline: Rivian opens its charging network to other EVs\nBrief: No description",
    );
    let third = mock_relay_body(
        &server,
        Channel::WhatsApp,
        "Headline: No title\nBrief: Investors weigh the joint venture announced earlier this year.",
    );
    let client = client_for(&server);
    let messenger = messenger_for(&client, Channel::WhatsApp);

    let outcome = run(&client, &messenger, &rivian()).await.unwrap();

    daily.assert();
    news.assert();
    summary.assert();
    first.assert();
    second.assert();
    third.assert();
    match outcome {
        RunOutcome::Notified {
            change,
            messages_sent,
        } => {
            assert_eq!(messages_sent, 4);
            assert_eq!(change.direction, Direction::Up);
            assert!((change.percent - 5.263_157_894_736_842).abs() < 1e-9);
        }
        other => panic!("expected Notified, got {other:?}"),
    }
}

#[tokio::test]
async fn small_move_sends_nothing() {
    let server = setup_server();
    let daily = mock_daily(&server, "RIVN", daily_body(&[100.0, 98.0]));
    let news = mock_news(&server, "Rivian", json!({ "articles": [] }).to_string());
    let relay = mock_relay(&server);
    let client = client_for(&server);
    let messenger = messenger_for(&client, Channel::WhatsApp);

    let outcome = run(&client, &messenger, &rivian()).await.unwrap();

    daily.assert();
    news.assert_calls(0);
    relay.assert_calls(0);
    match outcome {
        RunOutcome::BelowThreshold { change } => {
            assert!((change.percent - 2.040_816_326_530_612).abs() < 1e-9);
        }
        other => panic!("expected BelowThreshold, got {other:?}"),
    }
}

#[tokio::test]
async fn drop_with_no_news_sends_only_summary() {
    let server = setup_server();
    let daily = mock_daily(&server, "RIVN", daily_body(&[90.0, 100.0]));
    let news = mock_news(&server, "Rivian", json!({ "status": "ok", "articles": [] }).to_string());
    let summary = mock_relay_body(&server, Channel::Sms, "RIVN: \u{25BC} 10.0%");
    let client = client_for(&server);
    let messenger = messenger_for(&client, Channel::Sms);

    let outcome = run(&client, &messenger, &rivian()).await.unwrap();

    daily.assert();
    news.assert();
    summary.assert();
    assert!(matches!(
        outcome,
        RunOutcome::Notified { messages_sent: 1, .. }
    ));
}

#[tokio::test]
async fn market_data_500_aborts_before_any_message() {
    let server = setup_server();
    let daily = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(500).body("upstream down");
    });
    let relay = mock_relay(&server);
    let client = client_for(&server);
    let messenger = messenger_for(&client, Channel::WhatsApp);

    let err = run(&client, &messenger, &rivian()).await.unwrap_err();

    daily.assert();
    relay.assert_calls(0);
    assert!(
        matches!(err, AlertError::Status { status: 500, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn insufficient_data_aborts_before_any_message() {
    let server = setup_server();
    let daily = mock_daily(&server, "RIVN", daily_body(&[100.0]));
    let relay = mock_relay(&server);
    let client = client_for(&server);
    let messenger = messenger_for(&client, Channel::WhatsApp);

    let err = run(&client, &messenger, &rivian()).await.unwrap_err();

    daily.assert();
    relay.assert_calls(0);
    assert!(
        matches!(err, AlertError::InsufficientData { found: 1, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn news_failure_leaves_summary_sent() {
    let server = setup_server();
    let daily = mock_daily(&server, "RIVN", daily_body(&[100.0, 95.0]));
    let news = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(429).body(r#"{"status":"error","code":"rateLimited"}"#);
    });
    let relay = mock_relay(&server);
    let client = client_for(&server);
    let messenger = messenger_for(&client, Channel::WhatsApp);

    let err = run(&client, &messenger, &rivian()).await.unwrap_err();

    daily.assert();
    news.assert();
    relay.assert_calls(1);
    assert!(
        matches!(err, AlertError::Status { status: 429, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn relay_failure_stops_remaining_sends() {
    let server = setup_server();
    let daily = mock_daily(&server, "RIVN", daily_body(&[100.0, 95.0]));
    let news = mock_news(
        &server,
        "Rivian",
        common::fixture("news_everything", "Rivian", "json"),
    );
    let relay = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/2010-04-01/Accounts/{ACCOUNT_SID}/Messages.json"));
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"code":20003,"message":"Authenticate","status":401}"#);
    });
    let client = client_for(&server);
    let messenger = messenger_for(&client, Channel::WhatsApp);

    let err = run(&client, &messenger, &rivian()).await.unwrap_err();

    daily.assert();
    news.assert_calls(0);
    relay.assert_calls(1);
    assert!(
        matches!(err, AlertError::Delivery { status: 401, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn zero_older_close_is_a_hard_failure() {
    let server = setup_server();
    let daily = mock_daily(&server, "RIVN", daily_body(&[5.0, 0.0]));
    let relay = mock_relay(&server);
    let client = client_for(&server);
    let messenger = messenger_for(&client, Channel::WhatsApp);

    let err = run(&client, &messenger, &rivian()).await.unwrap_err();

    daily.assert();
    relay.assert_calls(0);
    assert!(matches!(err, AlertError::ZeroPrice { .. }), "got {err:?}");
}
