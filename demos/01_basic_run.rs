use chrono::Duration;
use stock_news_alert::{
    AlertClient, Channel, Messenger, RunOutcome, Watch, calculate_price_change, news::latest_news,
    stock::latest_closes,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let var = |name: &str| std::env::var(name).map_err(|_| format!("{name} is not set"));

    // 1. Build a client with both provider keys and a 10-second timeout.
    let client = AlertClient::builder()
        .market_api_key(var("ALPHAVANTAGE_API_KEY")?)
        .news_api_key(var("NEWSAPI_KEY")?)
        .timeout(Duration::seconds(10).to_std()?)
        .build()?;

    // 2. Look at the latest move on its own.
    let closes = latest_closes(&client, "RIVN").await?;
    let change = calculate_price_change(closes.newer.close, closes.older.close)?;
    println!("--- RIVN ---");
    println!(
        "{} close {:.2}, {} close {:.2}: {} {:.2}%",
        closes.newer.date,
        closes.newer.close,
        closes.older.date,
        closes.older.close,
        change.direction,
        change.percent
    );
    println!();

    // 3. And the headlines that would go out with an alert.
    println!("--- News for Rivian ---");
    for article in latest_news(&client, "Rivian").await? {
        println!("{}", article.title);
    }
    println!();

    // 4. A full run: gate on the move, then message the recipient over WhatsApp.
    let messenger = Messenger::new(
        &client,
        var("TWILIO_ACCOUNT_SID")?,
        var("TWILIO_AUTH_TOKEN")?,
        &var("TWILIO_WHATSAPP_SANDBOX_NUMBER")?,
        &var("RECIPIENT_PHONE_NUMBER")?,
        Channel::WhatsApp,
    );
    match stock_news_alert::run(&client, &messenger, &Watch::new("RIVN", "Rivian")).await? {
        RunOutcome::BelowThreshold { change } => {
            println!("Move of {:.2}% is below the threshold, nothing sent.", change.percent);
        }
        RunOutcome::Notified { messages_sent, .. } => {
            println!("Sent {messages_sent} message(s).");
        }
    }

    Ok(())
}
