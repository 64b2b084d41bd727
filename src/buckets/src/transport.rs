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

use crate::client::{BucketsInner, enc, info};
use crate::model::{
    Bucket, BucketTemplate, DeleteBucketRequest, GetBucketRequest, InsertBucketOutcome,
    InsertBucketRequest, ListBucketsRequest, ListPage, UpdateBucketRequest,
};
use crate::options::QueryParameter;
use crate::request_options::RequestOptions;
use crate::{Error, Result};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use std::sync::Arc;

/// Implements the bucket operations over the JSON API.
#[derive(Clone, Debug)]
pub struct Buckets {
    inner: Arc<BucketsInner>,
}

impl Buckets {
    pub fn new(inner: Arc<BucketsInner>) -> Arc<Self> {
        Arc::new(Self { inner })
    }

    fn builder(
        &self,
        method: Method,
        path: String,
        params: Vec<QueryParameter>,
        options: &RequestOptions,
    ) -> Result<reqwest::RequestBuilder> {
        tracing::debug!("sending request method={method} path={path}");
        let user_agent = info::user_agent(options.user_agent().as_deref());
        let builder = self
            .inner
            .client
            .request(method, format!("{}{path}", &self.inner.endpoint))
            .query(&[("alt", "json")])
            .header(
                USER_AGENT,
                HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
            )
            .header(
                "x-goog-api-client",
                HeaderValue::from_str(&info::x_goog_api_client()).map_err(Error::ser)?,
            );
        let builder = params
            .iter()
            .fold(builder, |b, (k, v)| b.query(&[(k, v)]));
        let builder = options
            .attempt_timeout()
            .iter()
            .fold(builder, |b, t| b.timeout(*t));
        Ok(builder)
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let builder = self.inner.apply_auth_headers(builder).await?;
        let response = builder.send().await.map_err(map_send_error)?;
        tracing::debug!("received response status={}", response.status());
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        Ok(response)
    }

    async fn execute<O>(&self, builder: reqwest::RequestBuilder) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let response = self.send(builder).await?;
        to_http_response(response).await
    }
}

impl super::stub::Buckets for Buckets {
    async fn insert_bucket(
        &self,
        req: InsertBucketRequest,
        options: RequestOptions,
    ) -> Result<InsertBucketOutcome> {
        let project = required("project", &req.project)?;
        if req.template.name().is_none_or(str::is_empty) {
            return Err(Error::binding("missing required field `name` in the bucket template"));
        }
        let mut params = vec![("project", project.to_string())];
        params.extend(req.options.query_parameters());
        let builder = self.builder(Method::POST, "/storage/v1/b".to_string(), params, &options)?;
        let builder = with_body(builder, &req.template)?;
        match self.execute::<Bucket>(builder).await {
            Ok(bucket) => Ok(InsertBucketOutcome::Created(bucket)),
            Err(e) if e.is_already_exists() => {
                tracing::debug!(
                    "bucket already exists name={:?}",
                    req.template.name().unwrap_or_default()
                );
                Ok(InsertBucketOutcome::AlreadyExists)
            }
            Err(e) => Err(e),
        }
    }

    async fn get_bucket(&self, req: GetBucketRequest, options: RequestOptions) -> Result<Bucket> {
        let bucket = required("bucket", &req.bucket)?;
        let builder = self.builder(
            Method::GET,
            bucket_path(bucket),
            req.options.query_parameters(),
            &options,
        )?;
        self.execute(builder).await
    }

    async fn update_bucket(
        &self,
        req: UpdateBucketRequest,
        options: RequestOptions,
    ) -> Result<Bucket> {
        self.modify(Method::PUT, req, options).await
    }

    async fn patch_bucket(
        &self,
        req: UpdateBucketRequest,
        options: RequestOptions,
    ) -> Result<Bucket> {
        self.modify(Method::PATCH, req, options).await
    }

    async fn delete_bucket(
        &self,
        req: DeleteBucketRequest,
        options: RequestOptions,
    ) -> Result<bool> {
        let bucket = required("bucket", &req.bucket)?;
        let builder = self.builder(
            Method::DELETE,
            bucket_path(bucket),
            req.options.query_parameters(),
            &options,
        )?;
        match self.send(builder).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => {
                tracing::debug!("bucket not found on delete bucket={bucket}");
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }

    async fn list_buckets(
        &self,
        req: ListBucketsRequest,
        options: RequestOptions,
    ) -> Result<ListPage<Bucket>> {
        let project = required("project", &req.project)?;
        let mut params = vec![("project", project.to_string())];
        params.extend(req.options.query_parameters());
        let builder = self.builder(Method::GET, "/storage/v1/b".to_string(), params, &options)?;
        self.execute(builder).await
    }
}

impl Buckets {
    async fn modify(
        &self,
        method: Method,
        req: UpdateBucketRequest,
        options: RequestOptions,
    ) -> Result<Bucket> {
        let bucket = required("bucket", &req.bucket)?;
        let builder = self.builder(
            method,
            bucket_path(bucket),
            req.options.query_parameters(),
            &options,
        )?;
        let builder = with_body(builder, &req.template)?;
        self.execute(builder).await
    }
}

fn bucket_path(bucket: &str) -> String {
    format!("/storage/v1/b/{}", enc(bucket))
}

fn required<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::binding(format!(
            "missing required parameter `{name}`"
        )));
    }
    Ok(value)
}

fn with_body(
    builder: reqwest::RequestBuilder,
    template: &BucketTemplate,
) -> Result<reqwest::RequestBuilder> {
    let body = serde_json::to_vec(template).map_err(Error::ser)?;
    Ok(builder
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(body))
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let payload = response.bytes().await.map_err(Error::io)?;
    Err(Error::http(status_code, headers, payload))
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // 204 No Content has no body and throws EOF error if we try to parse with serde::json
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let content = response.bytes().await.map_err(Error::io)?;
    if content.is_empty() && no_content_status {
        return Ok(O::default());
    }
    serde_json::from_slice::<O>(&content).map_err(Error::deser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        let err = to_http_error::<()>(response).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        assert!(err.service_error().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn http_error_with_service_error() -> TestResult {
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "The specified bucket does not exist.",
            "errors": [{
                "domain": "global",
                "reason": "notFound",
                "message": "The specified bucket does not exist."
            }]
        }});
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = to_http_error::<()>(response).await.unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        let service = err.service_error().cloned().unwrap();
        assert_eq!(service.code, 404);
        assert_eq!(service.message, "The specified bucket does not exist.");
        assert_eq!(service.errors.len(), 1);
        assert_eq!(service.errors[0].reason, "notFound");
        Ok(())
    }

    #[tokio::test]
    async fn http_response_no_content() -> TestResult {
        let http_resp = http::Response::builder().status(204).body("")?;
        let response: reqwest::Response = http_resp.into();
        let got = to_http_response::<Bucket>(response).await?;
        assert_eq!(got, Bucket::default());
        Ok(())
    }

    #[tokio::test]
    async fn http_response_json() -> TestResult {
        let http_resp = http::Response::builder()
            .status(200)
            .body(r#"{"name": "my-bucket", "metageneration": "2"}"#)?;
        let response: reqwest::Response = http_resp.into();
        let got = to_http_response::<Bucket>(response).await?;
        assert_eq!(got, Bucket::new().set_name("my-bucket").set_metageneration(2));
        Ok(())
    }

    #[tokio::test]
    async fn http_response_bad_json() -> TestResult {
        let http_resp = http::Response::builder().status(200).body("not json")?;
        let response: reqwest::Response = http_resp.into();
        let err = to_http_response::<Bucket>(response).await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[test]
    fn required_parameter() {
        assert_eq!(required("bucket", "b").ok(), Some("b"));
        let err = required("bucket", "").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("bucket"), "{err}");
    }

    #[test_case("my-bucket", "/storage/v1/b/my-bucket")]
    #[test_case("a b", "/storage/v1/b/a%20b")]
    fn path(bucket: &str, want: &str) {
        assert_eq!(bucket_path(bucket), want);
    }
}
