//! End-to-end flows: App state machine + worker + gateway over an in-memory
//! transport.

use async_trait::async_trait;
use momentum::model::MenuItem;
use momentum::services::{worker, ApiGateway, ApiRequest, HttpReply, Transport};
use momentum::state::{AppConfig, AppMode, Direction, RegionPhase};
use momentum::{App, AppError, AppResult};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

const BASE: &str = "http://placeholder.test";

#[derive(Default)]
struct RecordingTransport {
    routes: Mutex<HashMap<String, Value>>,
    created: Mutex<Option<Value>>,
    calls: Mutex<Vec<String>>,
}

impl RecordingTransport {
    fn route(&self, query: &str, body: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{}/{}", BASE, query), body);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: &str) -> AppResult<HttpReply> {
        self.calls.lock().unwrap().push(format!("GET {}", url));
        let body = self
            .routes
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::Network(format!("unreachable: {}", url)))?;
        Ok(HttpReply { status: 200, body: body.to_string() })
    }

    async fn post_form(&self, url: &str, params: &[(String, String)]) -> AppResult<HttpReply> {
        self.calls.lock().unwrap().push(format!("POST {}", url));
        let mut record: serde_json::Map<String, Value> = params
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        record.insert("id".into(), json!(501));
        let record = Value::Object(record);
        *self.created.lock().unwrap() = Some(record.clone());
        Ok(HttpReply { status: 201, body: record.to_string() })
    }
}

fn bret() -> Value {
    json!({
        "id": 1, "username": "Bret", "name": "Leanne Graham", "email": "Sincere@april.biz",
        "phone": "1-770-736-8031 x56442", "website": "hildegard.org",
        "address": {"street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough",
                    "zipcode": "92998-3874", "geo": {"lat": "-37.3159", "lng": "81.1496"}},
        "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net",
                    "bs": "harness real-time e-markets"}
    })
}

fn seeded_transport() -> Arc<RecordingTransport> {
    let t = Arc::new(RecordingTransport::default());
    t.route("users?username=Bret", json!([bret()]));
    t.route("users?username=nobody", json!([]));
    t.route("users/1", bret());
    t.route(
        "posts?userId=1",
        json!([
            {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
            {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"}
        ]),
    );
    t.route("posts/1", json!({"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"}));
    t.route(
        "posts/1/comments",
        json!([
            {"postId": 1, "id": 1, "name": "id labore", "email": "Eliseo@gardner.biz", "body": "laudantium"},
            {"postId": 1, "id": 2, "name": "quo vero", "email": "Jayne_Kuhic@sydney.com", "body": "est natus"}
        ]),
    );
    t
}

struct Harness {
    app: App,
    requests: mpsc::UnboundedReceiver<ApiRequest>,
    api: ApiGateway,
    transport: Arc<RecordingTransport>,
}

impl Harness {
    fn new() -> Self {
        let transport = seeded_transport();
        let api = ApiGateway::new(BASE, transport.clone());
        let (tx, requests) = mpsc::unbounded_channel();
        let config = AppConfig {
            transition_ticks: 0,
            ..AppConfig::default()
        };
        let app = App::new(tx, config, MenuItem::DEFAULT.to_vec());
        Harness { app, requests, api, transport }
    }

    /// Deliver every queued request to the worker and its answer to the App.
    async fn pump(&mut self) -> usize {
        let mut served = 0;
        while let Ok(request) = self.requests.try_recv() {
            let response = worker::handle(&self.api, request).await;
            self.app.handle_api_response(response);
            served += 1;
        }
        served
    }

    async fn login(&mut self, username: &str) {
        self.app.auth.username_input = username.to_string();
        self.app.submit_login();
        self.pump().await;
    }
}

#[tokio::test]
async fn bret_browses_his_posts_and_opens_one() {
    let mut h = Harness::new();
    h.login("Bret").await;
    assert_eq!(h.app.ui.mode, AppMode::Dashboard);
    assert_eq!(h.app.auth.current_user.as_ref().unwrap().id, 1);

    h.app.handle_menu_click(0);
    h.pump().await;
    let panel = h.app.dashboard.stack.current();
    assert_eq!(panel.title(), Some("Posts by: Bret"));
    assert_eq!(panel.content.as_ref().unwrap().links().len(), 2);

    // The post list is cached: reopening it costs no new GET for the list.
    let list_gets = |calls: &[String]| {
        calls
            .iter()
            .filter(|c| c.as_str() == "GET http://placeholder.test/posts?userId=1")
            .count()
    };
    h.app.handle_menu_click(0); // closes
    h.app.handle_menu_click(0); // reopens
    h.pump().await;
    assert_eq!(list_gets(&h.transport.calls()), 1);

    let before = h.transport.calls().len();
    h.app.open_selected_link();
    h.pump().await;
    let calls = h.transport.calls()[before..].to_vec();
    // users/1 is already cached from the title lookup, so only the post and
    // its comments hit the wire, in that order.
    assert_eq!(
        calls,
        vec![
            "GET http://placeholder.test/posts/1",
            "GET http://placeholder.test/posts/1/comments",
        ]
    );

    let stack = &h.app.dashboard.stack;
    assert_eq!(stack.current_index(), 1);
    assert_eq!(stack.current().pagenum, 2);
    let view = stack.current().content.as_ref().unwrap().post_view().unwrap();
    assert_eq!(view.author.username, "Bret");
    assert_eq!(view.comment_count, 2);
}

#[tokio::test]
async fn fresh_post_view_fetches_author_then_comments() {
    let mut h = Harness::new();
    h.login("Bret").await;

    // All Posts has a static title, so nothing has fetched users/1 yet.
    h.transport.route("posts", json!([{"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia"}]));
    h.app.handle_menu_click(2);
    h.pump().await;

    let before = h.transport.calls().len();
    h.app.open_selected_link();
    h.pump().await;
    assert_eq!(
        h.transport.calls()[before..].to_vec(),
        vec![
            "GET http://placeholder.test/posts/1",
            "GET http://placeholder.test/users/1",
            "GET http://placeholder.test/posts/1/comments",
        ]
    );
}

#[tokio::test]
async fn unknown_user_stays_on_login() {
    let mut h = Harness::new();
    h.login("nobody").await;
    assert_eq!(h.app.ui.mode, AppMode::Login);
    assert_eq!(h.app.auth.login_error.as_deref(), Some("Username \"nobody\" does not exist."));
    assert!(!h.app.auth.form_disabled);

    // Not pinned in the cache: a second attempt asks again.
    h.login("nobody").await;
    let lookups = h
        .transport
        .calls()
        .iter()
        .filter(|c| c.ends_with("users?username=nobody"))
        .count();
    assert_eq!(lookups, 2);
}

#[tokio::test]
async fn comment_is_posted_appended_and_shown() {
    let mut h = Harness::new();
    h.login("Bret").await;
    h.app.handle_menu_click(0);
    h.pump().await;
    h.app.open_selected_link();
    h.pump().await;

    h.app.dashboard.comment_form.name = "Great read".into();
    h.app.dashboard.comment_form.body = "Thanks for sharing".into();
    h.app.submit_comment();
    assert_eq!(h.pump().await, 1);

    let created = h.transport.created.lock().unwrap().clone().unwrap();
    assert_eq!(created["postId"], "1");
    assert_eq!(created["email"], "Sincere@april.biz");

    let cached = h.api.cached("posts/1/comments").unwrap();
    assert_eq!(cached.as_array().unwrap().len(), 3);

    let view = h.app.dashboard.stack.current().content.as_ref().unwrap().post_view().unwrap();
    assert_eq!(view.comment_count, 3);
    assert_eq!(view.comments[0].name, "Great read");
    assert!(h.app.dashboard.comment_form.name.is_empty());
    assert!(!h.app.dashboard.comment_form.disabled);
}

#[tokio::test]
async fn empty_comment_body_makes_no_request() {
    let mut h = Harness::new();
    h.login("Bret").await;
    h.app.handle_menu_click(0);
    h.pump().await;
    h.app.open_selected_link();
    h.pump().await;

    h.app.dashboard.comment_form.name = "Great read".into();
    h.app.submit_comment();
    assert_eq!(h.pump().await, 0);
    assert!(!h.transport.calls().iter().any(|c| c.starts_with("POST")));
}

#[tokio::test]
async fn back_navigation_walks_the_stack_and_closes() {
    let mut h = Harness::new();
    h.login("Bret").await;
    h.app.handle_menu_click(0);
    h.pump().await;
    h.app.open_selected_link();
    h.pump().await;
    assert_eq!(h.app.dashboard.stack.len(), 2);

    h.app.change_page(Direction::Previous);
    assert_eq!(h.app.dashboard.stack.current().pagenum, 1);
    assert!(h.app.dashboard.stack.has_next());

    h.app.change_page(Direction::Previous);
    assert_eq!(h.app.dashboard.phase, RegionPhase::Closed);
    assert_eq!(h.app.dashboard.active_menu, None);
}

#[tokio::test]
async fn unreachable_page_reports_and_unlocks() {
    let mut h = Harness::new();
    h.login("Bret").await;
    h.app.handle_menu_click(1); // albums?userId=1 has no route
    h.pump().await;

    assert!(!h.app.dashboard.processing);
    assert_eq!(h.app.dashboard.phase, RegionPhase::Closed);
    let (message, _, _) = h.app.notifications.current_notification.clone().unwrap();
    assert!(message.contains("unreachable"));
}
