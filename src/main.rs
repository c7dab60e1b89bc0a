use stock_news_alert::{AlertConfig, AlertError, RunOutcome};

fn preprocess() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_news_alert=info".into()),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AlertError> {
    preprocess();

    let config = AlertConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let client = config.client()?;
    let messenger = config.messenger(&client);

    match stock_news_alert::run(&client, &messenger, &config.watch()).await? {
        RunOutcome::BelowThreshold { change } => {
            tracing::info!(percent = change.percent, "run finished without alert");
        }
        RunOutcome::Notified {
            change,
            messages_sent,
        } => {
            tracing::info!(percent = change.percent, messages_sent, "alert sent");
        }
    }

    Ok(())
}
