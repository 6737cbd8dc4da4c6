//! Calls every endpoint once. Run with `EMAIL_HUNTER_KEY=... cargo run --example demo`.

use email_hunter::{Client, DomainSearchOptions, EmailFinderOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("EMAIL_HUNTER_KEY")
        .map_err(|_| "EMAIL_HUNTER_KEY environment variable is not set")?;
    let client = Client::new(key)?;

    let results = client
        .domain_search(&DomainSearchOptions::domain("stripe.com"))
        .await?;
    println!("{results:#?}\n");

    let found = client
        .email_finder(&EmailFinderOptions::new("asana.com", "Dustin", "Moskovitz"))
        .await?;
    println!("{found:#?}\n");

    let verification = client.email_verification("steli@close.io").await?;
    println!("{verification:#?}\n");

    let count = client.email_count("stripe.com").await?;
    println!("{count:#?}\n");

    let account = client.account_information().await?;
    println!("{account:#?}");

    Ok(())
}
