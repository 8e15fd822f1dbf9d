#![allow(dead_code)]
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::IntoResponse,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

/// Pull the embedded fragment back out of a rewrite prompt.
pub fn fragment_of(prompt: &str) -> String {
    let (before, _) = prompt
        .rsplit_once("\n\nAdapted text:")
        .expect("prompt should end with the adapted-text cue");
    let (_, fragment) = before
        .rsplit_once("\n\n")
        .expect("fragment should follow the rules block");
    fragment.to_string()
}

pub fn gemini_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

type Responder = dyn Fn(usize, &str) -> (u16, String) + Send + Sync;

#[derive(Clone)]
struct StubState {
    prompts: Arc<Mutex<Vec<String>>>,
    paths: Arc<Mutex<Vec<String>>>,
    responder: Arc<Responder>,
}

/// Stand-in for the Gemini REST endpoint, served by axum on its own runtime.
///
/// The responder sees the 0-based request number and the prompt text and
/// returns an HTTP status with a body.
pub struct StubGemini {
    pub url: String,
    prompts: Arc<Mutex<Vec<String>>>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl StubGemini {
    pub fn start<F>(responder: F) -> Self
    where
        F: Fn(usize, &str) -> (u16, String) + Send + Sync + 'static,
    {
        let state = StubState {
            prompts: Arc::new(Mutex::new(Vec::new())),
            paths: Arc::new(Mutex::new(Vec::new())),
            responder: Arc::new(responder),
        };
        let (prompts, paths) = (state.prompts.clone(), state.paths.clone());
        let app = Router::new().fallback(handle).with_state(state);

        let (addr_tx, addr_rx) = mpsc::channel();
        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind stub listener");
                addr_tx
                    .send(listener.local_addr().expect("stub address"))
                    .expect("report stub address");
                axum::serve(listener, app).await.expect("serve stub");
            });
        });
        let addr = addr_rx.recv().expect("stub server failed to start");

        Self {
            url: format!("http://{addr}/v1beta"),
            prompts,
            paths,
        }
    }

    /// Echo each fragment back upper-cased.
    pub fn upper_echo() -> Self {
        Self::start(|_, prompt| (200, gemini_body(&fragment_of(prompt).to_uppercase())))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<StubState>,
    uri: Uri,
    Json(request): Json<Value>,
) -> impl IntoResponse {
    let prompt = request["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    let n = {
        let mut prompts = state.prompts.lock().unwrap();
        prompts.push(prompt.clone());
        prompts.len() - 1
    };
    state.paths.lock().unwrap().push(uri.path().to_string());

    let (status, body) = (state.responder)(n, &prompt);
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}
