mod config;
mod controllers;
mod dispatch;
mod error;
mod storage;

use std::env;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::dispatch::{Dispatcher, Operation};
use crate::storage::DynamoDbRepository;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cookbooks=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = Config::from_env();

    // The operation set is closed. An unrecognized name here is a
    // deployment defect and fails the cold start, never a per-request
    // validation concern.
    let operation: Operation = env::var("OPERATION")
        .map_err(|_| anyhow!("OPERATION environment variable is not set"))?
        .parse()
        .context("Failed to parse OPERATION")?;

    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    let sdk_config = loader.load().await;
    let client = aws_sdk_dynamodb::Client::new(&sdk_config);

    let repo = Arc::new(DynamoDbRepository::new(client, &config));
    let dispatcher = Arc::new(Dispatcher::new(repo));

    tracing::info!(%operation, "Handler ready");

    run(service_fn(move |event: LambdaEvent<Value>| {
        let dispatcher = dispatcher.clone();
        async move {
            let response = dispatcher.execute(operation, &event.payload).await?;
            Ok::<Value, Error>(response)
        }
    }))
    .await
}
