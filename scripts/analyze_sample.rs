use std::env;
use std::time::Instant;

use anyhow::{bail, Context};
use reqwest::Client;
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let base_url = env::var("DEEPDIVE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let client = Client::new();

    let payload = json!({
        "learningData": {
            "mainResponses": [
                { "content": "A hash map stores key/value pairs in buckets chosen by hashing the key. Lookups are O(1) on average." },
                { "content": "Collisions are resolved by chaining or open addressing. Rust's HashMap uses SwissTable, a form of open addressing with SIMD group probing." }
            ],
            "threadResponses": [
                {
                    "threadTitle": "Load factor",
                    "context": "When does a hash map resize?",
                    "content": "Once the number of items exceeds capacity times the maximum load factor, the table grows and every entry is rehashed."
                }
            ]
        }
    });

    println!("\n🧪 Analyzing sample DeepDive session\n");

    let start = Instant::now();
    let response = client
        .post(format!("{}/api/learning/analyze", base_url))
        .json(&payload)
        .send()
        .await
        .with_context(|| format!("Request to {} failed. Is the server running?", base_url))?;
    let elapsed = start.elapsed().as_millis();

    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        bail!("{}: {}", status, body["details"]);
    }

    let analysis = &body["analysis"];
    let count = |field: &str| analysis[field].as_array().map_or(0, Vec::len);

    println!("⏱️  Response time: {}ms", elapsed);
    println!("🤖 Model: {}", body["metadata"]["model"]);
    println!("📝 Summary:\n{}\n", analysis["summary"].as_str().unwrap_or_default());
    println!("🎯 Objectives: {}", count("learningObjectives"));
    println!("🗂️  Flashcards: {}", count("flashcards"));
    println!("❓ Quiz questions: {}", count("quizQuestions"));
    println!("📅 Review sessions: {}", count("reviewSessions"));

    Ok(())
}
