//! Basic usage of the TempMailChecker client.
//!
//! Run with `TEMPMAILCHECKER_API_KEY=... cargo run --example basic`.

use std::time::Duration;

use tempmailchecker_client::{Client, ENDPOINT_EU};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("TEMPMAILCHECKER_API_KEY")
        .map_err(|_| "TEMPMAILCHECKER_API_KEY environment variable is required")?;

    let client = Client::builder(api_key)
        .endpoint(ENDPOINT_EU)
        .timeout(Duration::from_secs(10))
        .build()?;

    let emails = [
        "user@gmail.com",
        "test@10minutemail.com",
        "hello@yahoo.com",
        "fake@tempmail.org",
    ];

    for email in emails {
        match client.check(email).await {
            Ok(result) if result.temp => println!("{email}: disposable"),
            Ok(_) => println!("{email}: legitimate"),
            Err(err) if err.is_rate_limit() => {
                println!("Rate limit reached, try again later.");
                break;
            }
            Err(err) => println!("{email}: error: {err}"),
        }
    }

    let domain = client.check_domain("guerrillamail.com").await?;
    println!(
        "guerrillamail.com: {}",
        if domain.temp { "disposable domain" } else { "legitimate domain" }
    );

    let usage = client.get_usage().await?;
    println!("Requests today: {} / {}", usage.usage_today, usage.limit);
    println!("Resets at: {}", usage.reset);

    Ok(())
}
