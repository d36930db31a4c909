use std::time::Duration;

use authadmin_business::{GROUPS_PATH, USERS_PATH, UsersTableController};
use authadmin_ui::AdminApp;
use authadmin_ui::state::State;
use egui_kittest::Harness;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, AdminApp>,
}

impl<'a> TestCtx<'a> {
    /// App wired to a mock backend answering each list endpoint once.
    pub async fn new(users: ResponseTemplate, groups: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/proxy{USERS_PATH}")))
            .respond_with(users)
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/proxy{GROUPS_PATH}")))
            .respond_with(groups)
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = AdminApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, AdminApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, AdminApp> {
        &self.harness
    }

    /// Step frames until `done` holds, giving the fetches time in between.
    #[allow(unused)]
    pub async fn wait_until(&mut self, what: &str, done: impl Fn(&UsersTableController) -> bool) {
        for _ in 0..100 {
            self.harness.step();
            if done(controller(self.harness.state())) {
                // One more frame to render what just arrived.
                self.harness.step();
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("Timed out waiting for {what}");
    }

    /// Wait for the users fetch to report back.
    pub async fn settle(&mut self) {
        self.wait_until("users to load", |c| !c.is_loading()).await;
    }

    /// Run a few frames so navigation and clicks take effect.
    #[allow(unused)]
    pub fn run_frames(&mut self) {
        for _ in 0..3 {
            self.harness.step();
        }
    }
}

#[allow(unused)]
pub fn controller(app: &AdminApp) -> &UsersTableController {
    app.state().ctx.state::<UsersTableController>()
}

pub fn ok_json(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

#[allow(unused)]
pub fn users_body() -> serde_json::Value {
    serde_json::json!([
        {
            "systemName": "jdoe",
            "displayName": "John Doe",
            "email": "jdoe@example.org",
            "groups": ["g1"]
        },
        { "systemName": "asmith", "enabled": false }
    ])
}

#[allow(unused)]
pub fn groups_body() -> serde_json::Value {
    serde_json::json!([{ "systemName": "g1", "title": "Admins" }])
}
