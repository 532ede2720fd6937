use okra_rs::{OkraClient, Outcome, soft_status};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = env::var("OKRA_TOKEN")?;
    let base_url = env::var("OKRA_BASE_URL")?;
    let client = OkraClient::new(token, base_url);

    println!("--- Auth records (page 1) ---");
    let auths = client.auth().by_date_range("1", "5", "2020-01-01", "2020-12-31").await?;
    match soft_status(&auths) {
        Some(code) => println!("provider returned status {code}"),
        None => println!("{auths}"),
    }

    println!("--- Balances by name options ---");
    let (text, err) = client
        .balance()
        .by_options("1", "5", "Ada", "Lovelace")
        .await
        .into_pair();
    if let Some(e) = err {
        eprintln!("balance lookup failed: {e}");
    } else {
        println!("{text}");
    }

    Ok(())
}
