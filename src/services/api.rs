//! HTTP gateway to the placeholder API with a per-session response cache.

use crate::state::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Raw reply from the transport.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// The wire under the gateway.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> AppResult<HttpReply>;

    /// POST `params` as an `application/x-www-form-urlencoded` body.
    async fn post_form(&self, url: &str, params: &[(String, String)]) -> AppResult<HttpReply>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> AppResult<HttpReply> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| AppError::Network(e.to_string()))?;
        Ok(HttpReply { status, body })
    }

    async fn post_form(&self, url: &str, params: &[(String, String)]) -> AppResult<HttpReply> {
        let resp = self
            .client
            .post(url)
            .form(params)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| AppError::Network(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

type Cache = HashMap<String, Arc<Value>>;

/// Cloneable handle; clones share the transport and the cache.
#[derive(Clone)]
pub struct ApiGateway {
    base_url: String,
    transport: Arc<dyn Transport>,
    cache: Arc<Mutex<Cache>>,
}

impl ApiGateway {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, query: &str) -> String {
        format!("{}/{}", self.base_url, query)
    }

    fn with_cache<R>(&self, f: impl FnOnce(&mut Cache) -> R) -> R {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cache)
    }

    pub fn cached(&self, query: &str) -> Option<Arc<Value>> {
        self.with_cache(|c| c.get(query).cloned())
    }

    pub fn cache_len(&self) -> usize {
        self.with_cache(|c| c.len())
    }

    /// Fetch `query`, answering from the cache when it was seen before.
    pub async fn get_data(&self, query: &str) -> AppResult<Arc<Value>> {
        if let Some(hit) = self.cached(query) {
            debug!(query, "cache hit");
            return Ok(hit);
        }

        let url = self.url(query);
        debug!(%url, "GET");
        let reply = self.transport.get(&url).await?;
        if !(200..300).contains(&reply.status) {
            warn!(%url, status = reply.status, "GET failed");
            return Err(AppError::Status { url, status: reply.status });
        }
        let value: Value = serde_json::from_str(&reply.body).map_err(|source| AppError::Decode {
            query: query.to_string(),
            source,
        })?;

        // Empty lists are answers like "no such username"; keep asking.
        if matches!(&value, Value::Array(items) if items.is_empty()) {
            return Ok(Arc::new(value));
        }

        let stored = self.with_cache(|c| {
            c.entry(query.to_string())
                .or_insert_with(|| Arc::new(value))
                .clone()
        });
        Ok(stored)
    }

    /// POST a form; on 201 the created record is appended to the cached
    /// list `append_to` when that list is cached.
    pub async fn post_data(
        &self,
        query: &str,
        params: &[(String, String)],
        append_to: Option<&str>,
    ) -> AppResult<Value> {
        let url = self.url(query);
        debug!(%url, "POST");
        let reply = self.transport.post_form(&url, params).await?;
        if reply.status != 201 {
            warn!(%url, status = reply.status, "POST rejected");
            return Err(AppError::Status { url, status: reply.status });
        }
        let record: Value = serde_json::from_str(&reply.body).map_err(|source| AppError::Decode {
            query: query.to_string(),
            source,
        })?;

        if let Some(key) = append_to {
            self.with_cache(|c| {
                if let Some(entry) = c.get_mut(key) {
                    if let Value::Array(items) = Arc::make_mut(entry) {
                        items.push(record.clone());
                    }
                }
            });
        }
        Ok(record)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// In-memory transport: canned GET bodies by URL, canned POST replies in
    /// order, and a log of every call.
    #[derive(Default)]
    pub struct FakeTransport {
        pub routes: Mutex<HashMap<String, HttpReply>>,
        pub post_replies: Mutex<VecDeque<HttpReply>>,
        pub calls: Mutex<Vec<String>>,
        pub posted: Mutex<Vec<Vec<(String, String)>>>,
    }

    impl FakeTransport {
        pub fn route(&self, url: &str, body: Value) {
            self.routes.lock().unwrap().insert(
                url.to_string(),
                HttpReply { status: 200, body: body.to_string() },
            );
        }

        pub fn route_raw(&self, url: &str, status: u16, body: &str) {
            self.routes.lock().unwrap().insert(
                url.to_string(),
                HttpReply { status, body: body.to_string() },
            );
        }

        pub fn queue_post(&self, status: u16, body: Value) {
            self.post_replies
                .lock()
                .unwrap()
                .push_back(HttpReply { status, body: body.to_string() });
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn get(&self, url: &str) -> AppResult<HttpReply> {
            self.calls.lock().unwrap().push(format!("GET {}", url));
            self.routes
                .lock()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| AppError::Network(format!("no route for {}", url)))
        }

        async fn post_form(&self, url: &str, params: &[(String, String)]) -> AppResult<HttpReply> {
            self.calls.lock().unwrap().push(format!("POST {}", url));
            self.posted.lock().unwrap().push(params.to_vec());
            self.post_replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| AppError::Network("connection reset".into()))
        }
    }
}
