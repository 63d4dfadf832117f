#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use gymtrack::{ApiClient, SessionStore};

pub const EMAIL: &str = "john@example.com";
pub const PASSWORD: &str = "123456";
pub const TOKEN: &str = "token-abc";
pub const INVALID_CREDENTIALS: &str = "E-mail e/ou senha inválida.";
pub const MISSING_TOKEN: &str = "JWT token não informado.";

#[derive(Debug, Clone)]
pub struct UploadedAvatar {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

/// What the fake server saw, for assertions.
#[derive(Debug, Default)]
pub struct Recorded {
    pub authorization: Vec<Option<String>>,
    pub created_users: Vec<Value>,
    pub profile_updates: Vec<Value>,
    pub history_created: Vec<Value>,
    pub avatars: Vec<UploadedAvatar>,
}

#[derive(Clone, Default)]
pub struct FakeState {
    recorded: Arc<Mutex<Recorded>>,
}

impl FakeState {
    pub fn with<T>(&self, f: impl FnOnce(&Recorded) -> T) -> T {
        f(&self.recorded.lock().unwrap())
    }

    fn record(&self, f: impl FnOnce(&mut Recorded)) {
        f(&mut self.recorded.lock().unwrap())
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), Response> {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.record(|r| r.authorization.push(auth.clone()));

        if auth == Some(format!("Bearer {}", TOKEN)) {
            Ok(())
        } else {
            Err(app_error(StatusCode::UNAUTHORIZED, MISSING_TOKEN))
        }
    }
}

pub struct FakeApi {
    pub base_url: String,
    pub state: FakeState,
}

impl FakeApi {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url).unwrap()
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(self.client(), 5 * 1024 * 1024)
    }

    pub fn session_store_with_limit(&self, max_avatar_bytes: u64) -> SessionStore {
        SessionStore::new(self.client(), max_avatar_bytes)
    }
}

pub fn app_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "status": "error", "message": message }))).into_response()
}

fn john() -> Value {
    json!({ "id": 7, "name": "John Doe", "email": EMAIL, "avatar": null })
}

async fn sessions(Json(body): Json<Value>) -> Response {
    match (body["email"].as_str(), body["password"].as_str()) {
        (Some(EMAIL), Some(PASSWORD)) => Json(json!({ "user": john(), "token": TOKEN })).into_response(),
        (Some("drop@example.com"), _) => (StatusCode::BAD_GATEWAY, "upstream went away").into_response(),
        _ => app_error(StatusCode::BAD_REQUEST, INVALID_CREDENTIALS),
    }
}

async fn list_users(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    Json(json!([john(), { "id": "8", "name": "Jane", "email": "jane@example.com" }])).into_response()
}

async fn create_user(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    if body["email"] == json!(EMAIL) {
        return app_error(StatusCode::BAD_REQUEST, "Este e-mail já está em uso.");
    }
    state.record(|r| r.created_users.push(body));
    StatusCode::CREATED.into_response()
}

async fn update_user(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    if body.get("password").is_some() && body["old_password"] != json!(PASSWORD) {
        return app_error(StatusCode::BAD_REQUEST, "A senha antiga não confere.");
    }
    state.record(|r| r.profile_updates.push(body));
    StatusCode::OK.into_response()
}

async fn user_by_id(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    match id.as_str() {
        "7" => Json(john()).into_response(),
        "odd" => (StatusCode::BAD_REQUEST, Json(json!({ "message": 42 }))).into_response(),
        _ => app_error(StatusCode::NOT_FOUND, "Usuário não encontrado."),
    }
}

async fn upload_avatar(
    State(state): State<FakeState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    let mut stored = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let size = field.bytes().await.map(|b| b.len()).unwrap_or_default();
        stored = file_name.clone();
        state.record(|r| {
            r.avatars.push(UploadedAvatar {
                field: name,
                file_name,
                content_type,
                size,
            })
        });
    }

    let mut user = john();
    user["avatar"] = json!(format!("7-{}", stored.unwrap_or_default()));
    Json(user).into_response()
}

async fn groups(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    Json(json!(["Costas", "Bíceps", "Tríceps", "Ombro"])).into_response()
}

fn exercise(id: u32, name: &str, group: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "series": 3,
        "repetitions": 12,
        "group": group,
        "demo": format!("{}.gif", id),
        "thumb": format!("{}.png", id),
        "updated_at": "2023-08-26 08:35:00"
    })
}

async fn exercises_by_group(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Path(group): Path<String>,
) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    match group.as_str() {
        "Costas" => Json(json!([
            exercise(1, "Puxada frontal", "costas"),
            exercise(2, "Remada curvada", "costas"),
        ]))
        .into_response(),
        "Peito/Ombro" => Json(json!([exercise(9, "Supino", "peito")])).into_response(),
        _ => Json(json!([])).into_response(),
    }
}

async fn exercise_by_id(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    match id.as_str() {
        "1" => Json(exercise(1, "Puxada frontal", "costas")).into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        "garbled" => (StatusCode::OK, "not json at all").into_response(),
        "array" => (StatusCode::BAD_REQUEST, Json(json!(["oops"]))).into_response(),
        "string" => (StatusCode::BAD_REQUEST, Json(json!("oops"))).into_response(),
        "null" => (StatusCode::CONFLICT, Json(Value::Null)).into_response(),
        "empty" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        _ => app_error(StatusCode::NOT_FOUND, "Exercício não encontrado."),
    }
}

async fn history(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    let created = state.with(|r| r.history_created.len());
    if created == 0 {
        return Json(json!([])).into_response();
    }
    Json(json!([{
        "title": "26.08.23",
        "data": [{
            "id": 1,
            "name": "Puxada frontal",
            "group": "costas",
            "hour": "08:35",
            "created_at": "2023-08-26 08:35:00"
        }]
    }]))
    .into_response()
}

async fn create_history(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    if body["exercise_id"] == json!("404") {
        return app_error(StatusCode::NOT_FOUND, "Exercício não encontrado.");
    }
    state.record(|r| r.history_created.push(body));
    StatusCode::CREATED.into_response()
}

pub fn create_fake_router(state: FakeState) -> Router {
    Router::new()
        .route("/sessions", post(sessions))
        .route("/users", get(list_users).post(create_user).put(update_user))
        .route("/users/avatar", patch(upload_avatar))
        .route("/users/{id}", get(user_by_id))
        .route("/groups", get(groups))
        .route("/exercises/bygroup/{group}", get(exercises_by_group))
        .route("/exercises/{id}", get(exercise_by_id))
        .route("/history", get(history).post(create_history))
        .with_state(state)
}

/// Serves the fake API on an ephemeral local port.
pub async fn spawn_fake_api() -> FakeApi {
    let state = FakeState::default();
    let app = create_fake_router(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeApi {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub async fn signed_in(api: &FakeApi) -> SessionStore {
    let mut store = api.session_store();
    store.sign_in(EMAIL, PASSWORD).await.unwrap();
    store
}
