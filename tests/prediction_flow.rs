mod support;

use severity_dash::config::{self, AppSettings, ServerSettings};
use severity_dash::egui_app::controller::EguiController;
use severity_dash::egui_app::state::StatusTone;
use severity_dash::prediction::{FeatureOrigin, PLACEHOLDER, features::FALLBACK_FEATURES};
use serde_json::{Value, json};
use std::time::Duration;
use support::http::{FakeServer, closed_base_url, json_reply};
use support::severity_env::SeverityEnvGuard;

fn controller_for(base: &str) -> EguiController {
    EguiController::new(AppSettings {
        server: ServerSettings::for_server(base),
    })
}

fn settle(controller: &mut EguiController) {
    for _ in 0..1000 {
        controller.poll_jobs();
        if !controller.is_busy() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("background jobs did not finish");
}

fn input_values(controller: &EguiController) -> Vec<String> {
    controller
        .session()
        .expect("features loaded")
        .form()
        .fields()
        .iter()
        .map(|field| field.value.clone())
        .collect()
}

#[test]
fn remote_features_build_form_and_submit_prediction() {
    let server = FakeServer::start(vec![
        json_reply(200, "OK", r#"["vma", "agg", "col"]"#),
        json_reply(
            200,
            "OK",
            r#"{"probability":0.4321,"prediction_default":"no","prediction_threshold":"yes","threshold":0.5}"#,
        ),
    ]);
    let mut controller = controller_for(server.base_url());
    controller.load_features();
    settle(&mut controller);
    assert_eq!(server.next_request().path, "/static/sample-features.json");

    let session = controller.session().expect("session");
    assert_eq!(session.features().origin(), FeatureOrigin::Remote);
    let ids: Vec<&str> = session.form().fields().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["f-vma", "f-agg", "f-col"]);

    let form = controller.session_mut().unwrap().form_mut();
    form.set_value("f-vma", "50");
    form.set_value("f-agg", "   ");
    form.set_value("f-col", "two");
    controller.submit_prediction();
    settle(&mut controller);

    let request = server.next_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/predict");
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, json!({"vma": 50.0, "agg": null, "col": null}));

    let results = &controller.ui.results;
    assert_eq!(results.probability, "0.4321");
    assert_eq!(results.prediction_default, "no");
    assert_eq!(results.prediction_threshold, "yes");
    assert_eq!(results.threshold, "0.50");
    assert!(controller.ui.alert.is_none());
}

#[test]
fn unreachable_server_uses_fallback_features() {
    let mut controller = controller_for(&closed_base_url());
    controller.load_features();
    settle(&mut controller);
    let session = controller.session().expect("session");
    assert_eq!(session.features().origin(), FeatureOrigin::Fallback);
    let names: Vec<&str> = session.form().feature_names().collect();
    assert_eq!(names, FALLBACK_FEATURES);
    assert_eq!(controller.ui.status.tone, StatusTone::Warning);
}

#[test]
fn rejected_prediction_alerts_without_touching_display() {
    let server = FakeServer::start(vec![
        json_reply(200, "OK", "not json"),
        json_reply(
            200,
            "OK",
            r#"{"probability":0.8125,"prediction_default":1,"prediction_threshold":0,"threshold":0.875}"#,
        ),
        json_reply(400, "Bad Request", r#"{"error":"bad input"}"#),
    ]);
    let mut controller = controller_for(server.base_url());
    controller.load_features();
    settle(&mut controller);
    controller.fill_sample();
    controller.submit_prediction();
    settle(&mut controller);
    let shown = controller.ui.results.clone();
    assert_eq!(shown.probability, "0.8125");
    assert_eq!(shown.threshold, "0.88");

    controller
        .session_mut()
        .unwrap()
        .form_mut()
        .set_value("f-agg", "9");
    let before = input_values(&controller);
    controller.submit_prediction();
    settle(&mut controller);

    let alert = controller.ui.alert.clone().expect("alert");
    assert!(alert.contains("bad input"));
    assert_eq!(controller.ui.results, shown);
    assert_eq!(controller.ui.results.prediction_default, "1");
    assert_eq!(controller.ui.results.prediction_threshold, "0");
    assert_eq!(input_values(&controller), before);
}

#[test]
fn sample_then_reset_returns_to_placeholders() {
    let server = FakeServer::start(vec![
        json_reply(200, "OK", r#"["agg", "lum"]"#),
        json_reply(
            200,
            "OK",
            r#"{"probability":0.9,"prediction_default":1,"prediction_threshold":1,"threshold":0.67}"#,
        ),
    ]);
    let mut controller = controller_for(server.base_url());
    controller.load_features();
    settle(&mut controller);

    controller.fill_sample();
    assert_eq!(input_values(&controller), ["2", "0"]);
    controller.submit_prediction();
    settle(&mut controller);
    assert_eq!(controller.ui.results.prediction_default, "1");

    controller.reset_form();
    assert!(input_values(&controller).iter().all(String::is_empty));
    let results = &controller.ui.results;
    for value in [
        &results.probability,
        &results.prediction_default,
        &results.prediction_threshold,
        &results.threshold,
    ] {
        assert_eq!(value, PLACEHOLDER);
    }
}

#[test]
fn applying_server_url_persists_config_and_reloads() {
    let temp = tempfile::tempdir().expect("tempdir");
    let _env = SeverityEnvGuard::set_config_home(temp.path().to_path_buf());
    let server = FakeServer::start(vec![json_reply(200, "OK", r#"["agg"]"#)]);

    let mut controller = EguiController::new(AppSettings::default());
    controller.load_configuration().expect("load config");
    controller.ui.server_url_input = format!("  {}  ", server.base_url());
    controller.apply_server_url();
    settle(&mut controller);

    assert_eq!(controller.settings().server.server_url, server.base_url());
    assert_eq!(controller.session().unwrap().form().len(), 1);
    let saved = config::load_or_default().expect("reload config");
    assert_eq!(saved.server.server_url, server.base_url());
}
