// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes and directory responses.

use bytes::Bytes;
use http::{HeaderMap, Method, Request, Response};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use kube::client::Body;
use kube::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::net::TcpListener;
use tower::Service;

/// A mock Kubernetes API that answers GET requests by exact path.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Paths requested so far, in order
    pub fn requests(&self) -> Arc<Mutex<Vec<String>>> {
        self.requests.clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let path = req.uri().path().to_string();
        self.requests.lock().unwrap().push(path.clone());

        let response = if *req.method() == Method::GET {
            self.responses.lock().unwrap().get(&path).cloned()
        } else {
            None
        };
        let (status, body) =
            response.unwrap_or_else(|| (404, status_json(404, "NotFound", "not found")));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Wrap items into a Kubernetes list response
pub fn list_json(api_version: &str, kind: &str, items: Vec<String>) -> String {
    let items: Vec<Value> = items
        .iter()
        .map(|i| serde_json::from_str(i).unwrap())
        .collect();

    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Create a mock namespace JSON object
pub fn namespace_json(name: &str, labels: &[(&str, &str)]) -> String {
    let labels: HashMap<&str, &str> = labels.iter().copied().collect();

    json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": format!("uid-{}", name),
            "labels": labels
        }
    })
    .to_string()
}

/// Create a mock role binding; subjects are (name, apiGroup, namespace)
pub fn role_binding_json(
    name: &str,
    namespace: &str,
    subjects: &[(&str, Option<&str>, Option<&str>)],
) -> String {
    let subjects: Vec<Value> = subjects
        .iter()
        .map(|(subject, api_group, ns)| {
            let mut s = json!({ "kind": "Group", "name": subject });
            if let Some(g) = api_group {
                s["apiGroup"] = json!(g);
            }
            if let Some(n) = ns {
                s["namespace"] = json!(n);
            }
            s
        })
        .collect();

    json!({
        "apiVersion": "rbac.authorization.k8s.io/v1",
        "kind": "RoleBinding",
        "metadata": { "name": name, "namespace": namespace },
        "roleRef": {
            "apiGroup": "rbac.authorization.k8s.io",
            "kind": "ClusterRole",
            "name": "edit"
        },
        "subjects": subjects
    })
    .to_string()
}

/// Create a mock ingress with one rule per host
pub fn ingress_json(name: &str, namespace: &str, hosts: &[&str]) -> String {
    let rules: Vec<Value> = hosts.iter().map(|h| json!({ "host": h })).collect();

    json!({
        "apiVersion": "networking.k8s.io/v1",
        "kind": "Ingress",
        "metadata": { "name": name, "namespace": namespace },
        "spec": { "rules": rules }
    })
    .to_string()
}

/// Create a Kubernetes Status failure response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// A request captured by [`FakeHttpServer`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A local HTTP/1.1 server answering with canned bodies by exact path.
pub struct FakeHttpServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeHttpServer {
    pub async fn start(routes: &[(&str, u16, &str)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let routes: Arc<HashMap<String, (u16, String)>> = Arc::new(
            routes
                .iter()
                .map(|(p, s, b)| (p.to_string(), (*s, b.to_string())))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();

        tokio::spawn(async move {
            while let Ok((tcp, _)) = listener.accept().await {
                let io = TokioIo::new(tcp);
                let routes = routes.clone();
                let log = log.clone();

                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let routes = routes.clone();
                        let log = log.clone();
                        async move {
                            let (parts, body) = req.into_parts();
                            let body = body.collect().await?.to_bytes();
                            let path = parts.uri.path().to_string();
                            log.lock().unwrap().push(RecordedRequest {
                                method: parts.method,
                                path: path.clone(),
                                headers: parts.headers,
                                body,
                            });

                            let (status, body) = routes.get(&path).cloned().unwrap_or_else(|| {
                                (404, r#"{"error":{"code":"NotFound"}}"#.to_string())
                            });
                            Ok::<_, hyper::Error>(
                                Response::builder()
                                    .status(status)
                                    .header("content-type", "application/json")
                                    .body(Full::new(Bytes::from(body)))
                                    .unwrap(),
                            )
                        }
                    });
                    let _ = http1::Builder::new().serve_connection(io, service).await;
                });
            }
        });

        Self { base_url, requests }
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_fake_server_accepts_non_utf8_header_values() {
        let server = FakeHttpServer::start(&[("/t", 200, r#"{"ok":true}"#)]).await;
        let addr = server.base_url.trim_start_matches("http://");

        let mut raw = b"POST /t HTTP/1.1\r\nhost: localhost\r\nx-h: ".to_vec();
        raw.extend_from_slice(&[0xff, 0xfe, 0xfd, 0xfc]);
        raw.extend_from_slice(b"\r\ncontent-length: 10\r\nconnection: close\r\n\r\n0123456789");

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(&raw).await.unwrap();

        let mut response = Vec::new();
        timeout(Duration::from_secs(5), stream.read_to_end(&mut response))
            .await
            .expect("server did not answer")
            .unwrap();

        let response = String::from_utf8_lossy(&response);
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with(r#"{"ok":true}"#));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].body.as_ref(), b"0123456789");
        assert_eq!(
            requests[0].headers.get("x-h").unwrap().as_bytes(),
            &[0xff, 0xfe, 0xfd, 0xfc]
        );
        assert_eq!(requests[0].header("x-h"), None);
    }

    #[tokio::test]
    async fn test_fake_server_unknown_path_is_not_found() {
        let server = FakeHttpServer::start(&[]).await;
        let http = reqwest::Client::builder().no_proxy().build().unwrap();

        let response = http
            .get(format!("{}/missing", server.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);
        assert_eq!(server.requests()[0].path, "/missing");
    }
}
