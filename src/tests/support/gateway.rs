use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::content::application::ports::outgoing::{
    ContentGateway, GatewayError, GatewayRequest, GatewayResponse,
};

type GatewayResult = Result<GatewayResponse, GatewayError>;

/// Replays scripted responses in order and records every request.
#[derive(Default)]
pub struct RecordingGateway {
    responses: Mutex<VecDeque<GatewayResult>>,
    requests: Mutex<Vec<GatewayRequest>>,
}

impl RecordingGateway {
    pub fn with_responses(responses: Vec<GatewayResult>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<GatewayRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGateway for RecordingGateway {
    async fn send(&self, request: GatewayRequest) -> GatewayResult {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Unavailable("no scripted response".into())))
    }
}

/// Answers by path, so concurrent callers get stable results. Unknown
/// paths answer an empty body.
#[derive(Default)]
pub struct PathGateway {
    routes: HashMap<String, GatewayResult>,
    requests: Mutex<Vec<GatewayRequest>>,
}

impl PathGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, result: GatewayResult) -> Self {
        self.routes.insert(path.to_string(), result);
        self
    }

    pub fn requests(&self) -> Vec<GatewayRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGateway for PathGateway {
    async fn send(&self, request: GatewayRequest) -> GatewayResult {
        let result = self
            .routes
            .get(&request.path)
            .cloned()
            .unwrap_or_else(|| Ok(GatewayResponse::ok(serde_json::Value::Null)));
        self.requests.lock().unwrap().push(request);
        result
    }
}
