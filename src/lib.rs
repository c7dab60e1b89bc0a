//! stock-news-alert: watches one stock's daily close and, when it moves 5% or more,
//! sends a summary plus a few related headlines over SMS or WhatsApp.
//!
//! A run is a single pass over three providers:
//!
//! 1. [`stock`] fetches the two latest daily closes from the market-data API.
//! 2. [`change`] computes the move and gates on [`change::THRESHOLD`].
//! 3. [`news`] searches for up to three articles about the company.
//! 4. [`notify`] submits each message to the messaging relay.
//!
//! [`alert::run`] ties the steps together.
//!
//! ```no_run
//! # use stock_news_alert::{AlertClient, Channel, Messenger, Watch};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), stock_news_alert::AlertError> {
//! let client = AlertClient::builder()
//!     .market_api_key("AV_KEY")
//!     .news_api_key("NEWS_KEY")
//!     .build()?;
//! let messenger = Messenger::new(&client, "AC123", "token", "+14155238886", "+15551234567", Channel::WhatsApp);
//!
//! let outcome = stock_news_alert::run(&client, &messenger, &Watch::new("RIVN", "Rivian")).await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod alert;
pub mod change;
pub mod config;
pub mod core;
pub mod news;
pub mod notify;
pub mod stock;

pub use alert::{RunOutcome, Watch, run};
pub use change::{Direction, PriceChange, THRESHOLD, calculate_price_change, passes_threshold};
pub use config::AlertConfig;
pub use crate::core::{AlertClient, AlertClientBuilder, AlertError};
pub use news::{Article, NewsBuilder};
pub use notify::{Channel, Delivery, Messenger};
pub use stock::{ClosePair, ClosesBuilder, DailyClose, OutputSize};
