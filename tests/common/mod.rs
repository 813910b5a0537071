#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::web::Data;
use rusty_footy::AppError;
use rusty_footy::controller::upstream::{Endpoint, UpstreamClient, UpstreamResponse};

#[derive(Clone)]
pub enum Reply {
    Json(u16, serde_json::Value),
    Raw(u16, String),
    Unreachable,
}

/// Stands in for the upstream api. Replies are keyed by endpoint path; unknown paths get a 404.
#[derive(Default)]
pub struct FakeUpstream {
    replies: HashMap<&'static str, Reply>,
    calls: Mutex<Vec<Endpoint>>,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, path: &'static str, reply: Reply) -> Self {
        self.replies.insert(path, reply);
        self
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl UpstreamClient for FakeUpstream {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<UpstreamResponse, AppError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(endpoint.clone());

        match self.replies.get(endpoint.path()) {
            Some(Reply::Json(status, body)) => Ok(UpstreamResponse {
                status: *status,
                body: body.to_string(),
            }),
            Some(Reply::Raw(status, body)) => Ok(UpstreamResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(Reply::Unreachable) => Err(AppError::Network("connection refused".to_string())),
            None => Ok(UpstreamResponse {
                status: 404,
                body: "{\"error\":\"not found\"}".to_string(),
            }),
        }
    }
}

/// Shares one fake between the app and the test so calls can be inspected afterwards.
pub fn upstream_data(fake: &Arc<FakeUpstream>) -> Data<dyn UpstreamClient> {
    let upstream: Arc<dyn UpstreamClient> = fake.clone();
    Data::from(upstream)
}
