use anyhow::{Context, Result};
use nodelink::config::Config;
use nodelink::constants::STATUS_SEPARATOR;
use nodelink::logger;
use nodelink::store::NodeStore;
use nodelink::transfer::TransferClient;
use nodelink::utils::datetime;
use reqwest::Method;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    // Usage: nodelink [PATH] [METHOD] [JSON]
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/".to_string());
    let method = match args.next() {
        Some(m) => Method::from_bytes(m.to_uppercase().as_bytes()).with_context(|| format!("Invalid method: {}", m))?,
        None => Method::GET,
    };
    let data: Option<Value> = match args.next() {
        Some(raw) => Some(serde_json::from_str(&raw).context("Request body is not valid JSON")?),
        None => None,
    };

    let store = NodeStore::global();
    store.set_node(config.node.to_node());
    let node = store.node();

    println!(
        "{}{}UTC{}",
        chrono::Local::now().format(&config.display.date_format),
        STATUS_SEPARATOR,
        datetime::current_utc_offset()
    );

    let client = TransferClient::new();
    let url = node.endpoint(&path);
    log::info!("{} {}", method, url);

    match client.transfer(url.as_str(), method, data.as_ref()).await {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(e) => eprintln!("❌ {}", e),
    }

    Ok(())
}
