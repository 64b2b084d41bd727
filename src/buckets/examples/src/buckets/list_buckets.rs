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

// [START storage_list_buckets]
use google_cloud_storage_buckets::client::Buckets;

pub async fn sample(client: &Buckets, project_id: &str) -> anyhow::Result<()> {
    let mut items = client
        .list_buckets(project_id)
        .with_max_results(100)
        .by_item();
    println!("listing buckets in project {project_id}:");
    while let Some(bucket) = items.next().await {
        let bucket = bucket?;
        println!("    {}", bucket.name);
    }
    Ok(())
}
// [END storage_list_buckets]
