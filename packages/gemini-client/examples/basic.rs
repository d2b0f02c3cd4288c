//! Basic Gemini client usage example

use gemini_client::{GeminiClient, GenerateRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = GeminiClient::from_env()?.with_model("gemini-2.0-flash");

    let response = client
        .generate_content(
            GenerateRequest::prompt("Name three breakfast foods, one per line.")
                .system("Answer with plain text only.")
                .temperature(0.7)
                .max_output_tokens(100),
        )
        .await?;

    println!("Response:\n{}", response.text);

    if let Some(usage) = response.usage {
        println!("Tokens used: {}", usage.total_token_count);
    }

    Ok(())
}
