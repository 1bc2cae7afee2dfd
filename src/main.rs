use std::env;

use cheque_text::csv::{read_amounts, write_renderings};
use cheque_text::render_all;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .expect("usage: cheque-text <amounts.csv>");

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let (amount_sender, amount_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in read_amounts(&path) {
            match result {
                Ok(amount) => {
                    amount_sender.send(amount).await.unwrap();
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    let mut amounts = ReceiverStream::new(amount_receiver);
    let mut renderings = Vec::new();
    while let Some(amount) = amounts.next().await {
        info!(amount = %amount, "rendered");
        renderings.push(render_all(amount));
    }

    write_renderings(renderings);
}
