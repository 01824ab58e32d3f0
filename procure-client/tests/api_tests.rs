use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use procure_client::{ApiClient, ClientError};
use procure_model::{
    BudgetPreference, DepartmentId, ModelError, NewProposal, OrderStatus, ProposalId, ProposalStatus,
    PurchaseOrderId, Role, UserId,
};
use procure_session::{Session, SessionError};
use serde_json::{json, Value};

const TOKEN: &str = "tok-1";

/// What the mock backend saw.
#[derive(Clone, Default)]
struct Backend {
    hits: Arc<AtomicUsize>,
    last_auth: Arc<Mutex<Option<String>>>,
    last_body: Arc<Mutex<Option<Value>>>,
    last_query: Arc<Mutex<Option<HashMap<String, String>>>>,
}

impl Backend {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn record(&self, headers: &HeaderMap) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        *self.last_auth.lock().unwrap() = auth;
    }

    fn authorized(headers: &HeaderMap) -> bool {
        headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer tok-1")
    }
}

fn proposal_json(id: i64, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "vendor": "Zeiss",
        "quantity": 2,
        "unit_price": 1500.0,
        "department_id": 3,
        "requested_by": 7,
        "status": status,
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-01T10:00:00Z"
    })
}

fn order_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "proposal_id": 1,
        "vendor": "Zeiss",
        "total_amount": 3000.0,
        "status": status
    })
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({"message": "token expired"}))).into_response()
}

async fn login(State(backend): State<Backend>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    backend.record(&headers);
    if body["password"] != "secret" {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "invalid credentials"}))).into_response();
    }
    Json(json!({
        "token": TOKEN,
        "user": {
            "id": 7,
            "name": "Ada Lovelace",
            "email": body["email"],
            "roles": ["approver", "faculty"]
        }
    }))
    .into_response()
}

async fn list_proposals(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    backend.record(&headers);
    *backend.last_query.lock().unwrap() = Some(query);
    if !Backend::authorized(&headers) {
        return unauthorized();
    }
    Json(json!([
        proposal_json(1, "Microscope", "Pending"),
        proposal_json(2, "Centrifuge", "Approved")
    ]))
    .into_response()
}

async fn get_proposal(State(backend): State<Backend>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    backend.record(&headers);
    if id == 1 {
        Json(proposal_json(1, "Microscope", "Pending")).into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"error": "proposal not found"}))).into_response()
    }
}

async fn create_proposal(State(backend): State<Backend>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    backend.record(&headers);
    if body["vendor"] == "Shady Supplies" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"message": "vendor is not on the approved list"})),
        )
            .into_response();
    }
    let title = body["title"].as_str().unwrap_or_default().to_string();
    *backend.last_body.lock().unwrap() = Some(body);
    (StatusCode::CREATED, Json(proposal_json(42, &title, "Pending"))).into_response()
}

async fn update_proposal_status(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    backend.record(&headers);
    let status = body["status"].as_str().unwrap_or_default().to_string();
    *backend.last_body.lock().unwrap() = Some(body);
    Json(proposal_json(id, "Microscope", &status)).into_response()
}

async fn update_order_status(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    backend.record(&headers);
    let status = body["status"].as_str().unwrap_or_default().to_string();
    *backend.last_body.lock().unwrap() = Some(body);
    Json(order_json(id, &status)).into_response()
}

async fn get_order(State(backend): State<Backend>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    backend.record(&headers);
    if id == 9 {
        Json(order_json(9, "Ordered")).into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"message": "no such order"}))).into_response()
    }
}

async fn create_order(State(backend): State<Backend>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    backend.record(&headers);
    *backend.last_body.lock().unwrap() = Some(body);
    (StatusCode::CREATED, Json(order_json(9, "Pending"))).into_response()
}

async fn delete_user(State(backend): State<Backend>, headers: HeaderMap, Path(_id): Path<i64>) -> StatusCode {
    backend.record(&headers);
    StatusCode::NO_CONTENT
}

async fn list_roles(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    backend.record(&headers);
    Json(json!(["Admin", "Approver", "Purchaser", "Faculty"])).into_response()
}

async fn save_budget(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(_department): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    backend.record(&headers);
    Json(body).into_response()
}

async fn broken(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    backend.record(&headers);
    (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response()
}

/// Spin up the mock backend on an OS-assigned port, returning its base URL.
async fn spawn_backend() -> (String, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/proposals", get(list_proposals).post(create_proposal))
        .route("/proposals/{id}", get(get_proposal))
        .route("/proposals/{id}/status", put(update_proposal_status))
        .route("/purchase-orders", get(broken).post(create_order))
        .route("/purchase-orders/{id}", get(get_order))
        .route("/purchase-orders/{id}/status", put(update_order_status))
        .route("/users/{id}", delete(delete_user))
        .route("/roles", get(list_roles))
        .route("/budget-preferences/{department_id}", put(save_budget))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://127.0.0.1:{}", port), backend)
}

fn session_with(roles: Vec<Role>) -> Session {
    Session::new(UserId::new(7), "Ada Lovelace", TOKEN, roles)
}

async fn client_with(roles: Vec<Role>) -> (ApiClient, Backend) {
    let (base, backend) = spawn_backend().await;
    let client = ApiClient::new(base).unwrap().with_session(session_with(roles));
    (client, backend)
}

// ── Auth ─────────────────────────────────────────────────────────

#[tokio::test]
async fn login_returns_session_and_attaches_it() {
    let (base, backend) = spawn_backend().await;
    let mut client = ApiClient::new(base).unwrap();

    let session = client.login("ada@example.edu", "secret").await.unwrap();

    assert_eq!(session.user_id, UserId::new(7));
    assert_eq!(session.name, "Ada Lovelace");
    assert_eq!(session.token(), TOKEN);
    assert!(session.has_role(Role::Approver));
    assert_eq!(session.landing_route(), "/approver");
    assert_eq!(client.session(), Some(&session));
    assert_eq!(*backend.last_auth.lock().unwrap(), None);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (base, _backend) = spawn_backend().await;
    let mut client = ApiClient::new(base).unwrap();

    let err = client.login("ada@example.edu", "nope").await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized));
    assert!(err.is_auth_failure());
    assert!(client.session().is_none());
}

#[tokio::test]
async fn logout_drops_session() {
    let (mut client, _backend) = client_with(vec![Role::Faculty]).await;
    client.logout();
    assert!(client.session().is_none());
}

#[tokio::test]
async fn requests_carry_bearer_token() {
    let (client, backend) = client_with(vec![Role::Faculty]).await;

    let proposals = client.list_proposals().await.unwrap();

    assert_eq!(proposals.len(), 2);
    assert_eq!(backend.last_auth.lock().unwrap().as_deref(), Some("Bearer tok-1"));
}

#[tokio::test]
async fn stale_token_maps_to_unauthorized() {
    let (base, _backend) = spawn_backend().await;
    let client = ApiClient::new(base)
        .unwrap()
        .with_session(Session::new(UserId::new(7), "Ada", "expired", vec![Role::Faculty]));

    let err = client.list_proposals().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

// ── Proposals ────────────────────────────────────────────────────

#[tokio::test]
async fn proposals_decode_into_typed_entities() {
    let (client, _backend) = client_with(vec![Role::Faculty]).await;

    let proposal = client.get_proposal(ProposalId::new(1)).await.unwrap();

    assert_eq!(proposal.title, "Microscope");
    assert_eq!(proposal.status, ProposalStatus::Pending);
    assert_eq!(proposal.total_cost(), 3000.0);
    assert_eq!(proposal.created_at, Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());
}

#[tokio::test]
async fn missing_proposal_is_not_found_with_backend_message() {
    let (client, _backend) = client_with(vec![Role::Faculty]).await;

    let err = client.get_proposal(ProposalId::new(99)).await.unwrap_err();

    match err {
        ClientError::NotFound(message) => assert_eq!(message, "proposal not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn my_proposals_filters_by_session_user() {
    let (client, backend) = client_with(vec![Role::Faculty]).await;

    client.my_proposals().await.unwrap();

    let query = backend.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(query.get("requested_by").map(String::as_str), Some("7"));
}

#[tokio::test]
async fn my_proposals_without_session_makes_no_request() {
    let (base, backend) = spawn_backend().await;
    let client = ApiClient::new(base).unwrap();

    let err = client.my_proposals().await.unwrap_err();

    assert!(matches!(err, ClientError::NotLoggedIn));
    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn pending_proposals_keeps_only_pending() {
    let (client, _backend) = client_with(vec![Role::Approver]).await;

    let pending = client.pending_proposals().await.unwrap();

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].title, "Microscope");
}

fn new_proposal(vendor: &str) -> NewProposal {
    NewProposal {
        title: "Spectrometer".into(),
        description: "For the optics lab".into(),
        vendor: vendor.into(),
        quantity: 1,
        unit_price: 12_000.0,
        department_id: DepartmentId::new(3),
        funding_source_id: None,
    }
}

#[tokio::test]
async fn submit_proposal_posts_body() {
    let (client, backend) = client_with(vec![Role::Faculty]).await;

    let created = client.submit_proposal(&new_proposal("Thorlabs")).await.unwrap();

    assert_eq!(created.id, ProposalId::new(42));
    assert_eq!(created.title, "Spectrometer");
    let body = backend.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body["vendor"], "Thorlabs");
    assert_eq!(body["quantity"], 1);
}

#[tokio::test]
async fn invalid_proposal_is_refused_locally() {
    let (client, backend) = client_with(vec![Role::Faculty]).await;
    let mut proposal = new_proposal("Thorlabs");
    proposal.quantity = 0;

    let err = client.submit_proposal(&proposal).await.unwrap_err();

    assert!(matches!(err, ClientError::Model(ModelError::Invalid { .. })));
    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn backend_validation_error_carries_status_and_message() {
    let (client, _backend) = client_with(vec![Role::Faculty]).await;

    let err = client.submit_proposal(&new_proposal("Shady Supplies")).await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "vendor is not on the approved list");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn approver_can_approve_pending_proposal() {
    let (client, backend) = client_with(vec![Role::Approver]).await;
    let proposal = client.get_proposal(ProposalId::new(1)).await.unwrap();

    let updated = client
        .approve_proposal(&proposal, Some("Within budget".into()))
        .await
        .unwrap();

    assert_eq!(updated.status, ProposalStatus::Approved);
    let body = backend.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body["status"], "Approved");
    assert_eq!(body["comment"], "Within budget");
}

#[tokio::test]
async fn faculty_cannot_approve() {
    let (client, backend) = client_with(vec![Role::Faculty]).await;
    let proposal = client.get_proposal(ProposalId::new(1)).await.unwrap();
    let before = backend.hits();

    let err = client.approve_proposal(&proposal, None).await.unwrap_err();

    assert!(matches!(err, ClientError::Session(SessionError::Forbidden(Role::Approver))));
    assert_eq!(backend.hits(), before);
}

#[tokio::test]
async fn decided_proposal_cannot_be_decided_again() {
    let (client, backend) = client_with(vec![Role::Approver]).await;
    let mut proposal = client.get_proposal(ProposalId::new(1)).await.unwrap();
    proposal.status = ProposalStatus::Rejected;
    let before = backend.hits();

    let err = client.approve_proposal(&proposal, None).await.unwrap_err();

    assert!(matches!(err, ClientError::Model(ModelError::InvalidTransition { .. })));
    assert_eq!(backend.hits(), before);
}

// ── Purchase orders ──────────────────────────────────────────────

#[tokio::test]
async fn server_error_surfaces_raw_text() {
    let (client, _backend) = client_with(vec![Role::Purchaser]).await;

    let err = client.list_purchase_orders().await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn purchaser_orders_approved_proposal() {
    let (client, backend) = client_with(vec![Role::Purchaser]).await;
    let mut proposal = client.get_proposal(ProposalId::new(1)).await.unwrap();
    proposal.status = ProposalStatus::Approved;

    let order = client.create_purchase_order(&proposal).await.unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    let body = backend.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body["proposal_id"], 1);
    assert_eq!(body["total_amount"], 3000.0);
}

#[tokio::test]
async fn pending_proposal_cannot_be_ordered() {
    let (client, backend) = client_with(vec![Role::Purchaser]).await;
    let proposal = client.get_proposal(ProposalId::new(1)).await.unwrap();
    let before = backend.hits();

    let err = client.create_purchase_order(&proposal).await.unwrap_err();

    assert!(matches!(err, ClientError::Model(ModelError::Invalid { .. })));
    assert_eq!(backend.hits(), before);
}

#[tokio::test]
async fn order_advances_along_workflow() {
    let (client, backend) = client_with(vec![Role::Purchaser]).await;
    let order = serde_json::from_value(order_json(9, "Ordered")).unwrap();

    let shipped = client.set_order_status(&order, OrderStatus::Shipped).await.unwrap();

    assert_eq!(shipped.status, OrderStatus::Shipped);
    let body = backend.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body, json!({"status": "Shipped"}));
}

#[tokio::test]
async fn purchase_order_is_fetched_by_id() {
    let (client, backend) = client_with(vec![Role::Purchaser]).await;

    let order = client.get_purchase_order(PurchaseOrderId::new(9)).await.unwrap();

    assert_eq!(order.status, OrderStatus::Ordered);
    assert_eq!(order.proposal_id, ProposalId::new(1));
    assert_eq!(backend.hits(), 1);

    let err = client.get_purchase_order(PurchaseOrderId::new(10)).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(message) if message == "no such order"));
}

#[tokio::test]
async fn fetched_order_advances() {
    let (client, backend) = client_with(vec![Role::Purchaser]).await;
    let order = client.get_purchase_order(PurchaseOrderId::new(9)).await.unwrap();

    let delivered = client.set_order_status(&order, OrderStatus::Delivered).await.unwrap();

    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(backend.hits(), 2);
}

#[tokio::test]
async fn delivered_order_is_final() {
    let (client, backend) = client_with(vec![Role::Purchaser]).await;
    let order = serde_json::from_value(order_json(9, "Delivered")).unwrap();

    let err = client.set_order_status(&order, OrderStatus::Cancelled).await.unwrap_err();

    assert!(matches!(err, ClientError::Model(ModelError::InvalidTransition { .. })));
    assert_eq!(backend.hits(), 0);
}

// ── Administration ───────────────────────────────────────────────

#[tokio::test]
async fn admin_deletes_user() {
    let (client, backend) = client_with(vec![Role::Admin]).await;

    client.delete_user(UserId::new(12)).await.unwrap();

    assert_eq!(backend.hits(), 1);
}

#[tokio::test]
async fn non_admin_cannot_delete_user() {
    let (client, backend) = client_with(vec![Role::Approver, Role::Purchaser]).await;

    let err = client.delete_user(UserId::new(12)).await.unwrap_err();

    assert!(matches!(err, ClientError::Session(SessionError::Forbidden(Role::Admin))));
    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn roles_are_listed() {
    let (client, _backend) = client_with(vec![Role::Faculty]).await;

    let roles = client.list_roles().await.unwrap();

    assert_eq!(roles, Role::PRECEDENCE.to_vec());
}

#[tokio::test]
async fn budget_preference_is_validated_then_saved() {
    let (client, backend) = client_with(vec![Role::Admin]).await;
    let mut preference = BudgetPreference {
        department_id: DepartmentId::new(3),
        fiscal_year: 2025,
        limit: 50_000.0,
        warn_threshold: 0.8,
    };

    let saved = client.save_budget_preference(&preference).await.unwrap();
    assert_eq!(saved, preference);
    assert_eq!(backend.hits(), 1);

    preference.limit = -1.0;
    let err = client.save_budget_preference(&preference).await.unwrap_err();
    assert!(matches!(err, ClientError::Model(ModelError::Invalid { .. })));
    assert_eq!(backend.hits(), 1);
}
