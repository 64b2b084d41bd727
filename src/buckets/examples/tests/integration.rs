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

#[cfg(all(test, feature = "run-integration-tests"))]
mod tests {
    use bucket_samples::{cleanup_buckets, run_bucket_examples};

    #[tokio::test(flavor = "multi_thread")]
    async fn run_all_examples() -> anyhow::Result<()> {
        let mut bucket_ids = Vec::new();
        let result = run_bucket_examples(&mut bucket_ids).await;
        // Ignore cleanup errors.
        let _ = cleanup_buckets(&bucket_ids).await;
        result
    }
}
