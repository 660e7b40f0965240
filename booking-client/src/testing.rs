//! Test doubles shared by unit tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio::sync::oneshot;

use crate::route::{Navigator, Route};
use crate::{ClientError, ClientResult, HttpClient};

enum Reply {
    Ready(ClientResult<Value>),
    Gated(oneshot::Receiver<ClientResult<Value>>),
}

/// In-memory [`HttpClient`] answering from per-path reply queues
#[derive(Default)]
pub(crate) struct FakeHttpClient {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeHttpClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&self, path: &str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    pub(crate) fn respond(&self, path: &str, body: Value) {
        self.push(path, Reply::Ready(Ok(body)));
    }

    pub(crate) fn fail(&self, path: &str, status: u16, message: &str) {
        self.push(
            path,
            Reply::Ready(Err(ClientError::Api {
                status,
                message: message.to_string(),
            })),
        );
    }

    /// Queue a reply that is only released through the returned sender
    pub(crate) fn gate(&self, path: &str) -> oneshot::Sender<ClientResult<Value>> {
        let (tx, rx) = oneshot::channel();
        self.push(path, Reply::Gated(rx));
        tx
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) async fn wait_for_calls(&self, n: usize) {
        while self.calls.lock().unwrap().len() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl HttpClient for FakeHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.calls.lock().unwrap().push(path.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(|queue| queue.pop_front());

        let body = match reply {
            Some(Reply::Ready(result)) => result?,
            Some(Reply::Gated(rx)) => rx
                .await
                .map_err(|_| ClientError::Internal("gate dropped".into()))??,
            None => return Err(ClientError::NotFound(path.to_string())),
        };
        Ok(serde_json::from_value(body)?)
    }

    fn base_url(&self) -> &str {
        "http://fake"
    }
}

/// Navigator remembering every route it was asked for
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub(crate) fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub(crate) fn restaurants_json() -> Value {
    json!([
        {"id": 1, "name": "Le Bistro", "address": "1 Main St", "phoneNumber": "0102030405"},
        {"id": 2, "name": "Chez Paul", "address": "2 Oak Ave", "phoneNumber": null}
    ])
}

pub(crate) fn customers_json() -> Value {
    json!([
        {"id": 10, "name": "Alice Martin", "email": "alice@example.com", "phoneNumber": "0611223344"},
        {"id": 11, "name": "Bob Durand", "email": null, "phoneNumber": "0799887766"}
    ])
}

pub(crate) fn tables_json(restaurant_id: i64) -> Value {
    let restaurant = json!({"id": restaurant_id, "name": "Le Bistro", "address": "1 Main St"});
    json!([
        {"id": 100, "capacity": 2, "status": "AVAILABLE", "restaurant": restaurant},
        {"id": 101, "capacity": 4, "status": "MAINTENANCE", "restaurant": restaurant},
        {"id": 102, "capacity": 12, "status": "AVAILABLE", "restaurant": restaurant}
    ])
}
