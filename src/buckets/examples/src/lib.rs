// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod buckets;

use google_cloud_storage_buckets::client::Buckets;
use rand::{Rng, distr::Distribution};

pub const BUCKET_ID_LENGTH: usize = 63;

pub async fn run_bucket_examples(bucket_ids: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = {
        use tracing_subscriber::fmt::format::FmtSpan;
        let subscriber = tracing_subscriber::fmt()
            .with_level(true)
            .with_thread_ids(true)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .finish();

        tracing::subscriber::set_default(subscriber)
    };

    let client = Buckets::builder().build().await?;
    let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;
    let user = std::env::var("GOOGLE_CLOUD_RUST_TEST_SERVICE_ACCOUNT")?;

    let id = random_bucket_id();
    bucket_ids.push(id.clone());
    tracing::info!("running create_bucket example");
    buckets::create_bucket::sample(&client, &project_id, &id).await?;
    tracing::info!("running create_bucket example for an existing bucket");
    buckets::create_bucket::sample(&client, &project_id, &id).await?;
    tracing::info!("running get_bucket_metadata example");
    buckets::get_bucket_metadata::sample(&client, &id).await?;
    tracing::info!("running get_bucket_if_changed example");
    buckets::get_bucket_if_changed::sample(&client, &id).await?;
    tracing::info!("running print_bucket_acl example");
    buckets::print_bucket_acl::sample(&client, &id).await?;
    tracing::info!("running add_bucket_owner example");
    buckets::add_bucket_owner::sample(&client, &id, &user).await?;
    tracing::info!("running cors_configuration example");
    buckets::cors_configuration::sample(&client, &id).await?;

    let log_id = random_bucket_id();
    bucket_ids.push(log_id.clone());
    tracing::info!("running create_bucket_class_location example");
    buckets::create_bucket_class_location::sample(&client, &project_id, &log_id).await?;
    tracing::info!("running enable_logging example");
    buckets::enable_logging::sample(&client, &id, &log_id).await?;

    tracing::info!("running list_buckets example");
    buckets::list_buckets::sample(&client, &project_id).await?;

    tracing::info!("running delete_bucket_if_unchanged example");
    buckets::delete_bucket_if_unchanged::sample(&client, &id).await?;
    tracing::info!("running delete_bucket example");
    buckets::delete_bucket::sample(&client, &log_id).await?;
    tracing::info!("running delete_bucket example for a deleted bucket");
    buckets::delete_bucket::sample(&client, &log_id).await?;
    Ok(())
}

/// Deletes the buckets created by the examples, ignoring errors.
pub async fn cleanup_buckets(bucket_ids: &[String]) -> anyhow::Result<()> {
    let client = Buckets::builder().build().await?;
    for id in bucket_ids {
        if let Err(e) = client.delete_bucket(id).send().await {
            tracing::warn!("error deleting bucket {id}: {e}");
        }
    }
    Ok(())
}

pub fn random_bucket_id() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    let distr = RandomChars { chars: CHARSET };
    const PREFIX: &str = "rust-sdk-testing-";
    let bucket_id: String = rand::rng()
        .sample_iter(distr)
        .take(BUCKET_ID_LENGTH - PREFIX.len())
        .map(char::from)
        .collect();
    format!("{PREFIX}{bucket_id}")
}

pub struct RandomChars {
    chars: &'static [u8],
}

impl RandomChars {
    pub fn new(chars: &'static [u8]) -> Self {
        Self { chars }
    }
}

impl Distribution<u8> for RandomChars {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let index = rng.random_range(0..self.chars.len());
        self.chars[index]
    }
}
