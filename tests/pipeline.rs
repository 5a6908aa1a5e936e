use oscar_odds::{process::run, Error, ExtractProfile, SUCCESS_MESSAGE};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = r#"<!DOCTYPE html>
<html><body>
<div class="predictions-wrapper">
    <div class="category-title">
        Best Actor (more info)
    </div>
    <ul class="predictions-list">
        <li>
            <div class="predictions-position-v2">1</div>
            <div class="predictions-name">John Smith
The Movie</div>
            <div class="predictions-odds predictions-experts gray">1/1</div>
            <div class="predictions-odds predictions-experts gray">2/1</div>
            <div class="predictions-odds predictions-experts gray">3/1</div>
        </li>
        <li>
            <div class="predictions-position-v2">2</div>
            <div class="predictions-photo"><img src="https://img.test/doe.jpg" alt=""></div>
            <div class="predictions-name">Jane Doe</div>
            <div class="predictions-odds predictions-experts gray">4/1</div>
        </li>
    </ul>
</div>
</body></html>"#;

async fn serve(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/odds"))
        .respond_with(
            ResponseTemplate::new(status).set_body_raw(body.to_owned(), "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn rich_profile_end_to_end() {
    let server = serve(200, FIXTURE).await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("oscars_predictions.json");

    let mut stdout: Vec<u8> = Vec::new();

    let categories = run(&format!("{}/odds", server.uri()), &out, ExtractProfile::RICH, &mut stdout)
        .await
        .unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(String::from_utf8(stdout).unwrap(), format!("{SUCCESS_MESSAGE}\n"));

    assert_eq!(
        read_json(&out),
        json!([{
            "category": "Best Actor",
            "predictions": [
                {
                    "position": "1",
                    "image": null,
                    "odds": "3/1",
                    "actor": "John Smith",
                    "movie": "The Movie"
                },
                {
                    "position": "2",
                    "image": "https://img.test/doe.jpg",
                    "odds": null,
                    "name": "Jane Doe"
                }
            ]
        }])
    );

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("[\n    {\n        \"category\": \"Best Actor\","));
}

#[tokio::test]
async fn simple_profile_end_to_end() {
    let server = serve(200, FIXTURE).await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("simple.json");

    run(&format!("{}/odds", server.uri()), &out, ExtractProfile::SIMPLE, &mut Vec::<u8>::new())
        .await
        .unwrap();

    let value = read_json(&out);
    let first = &value[0]["predictions"][0];
    let keys: Vec<_> = first.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["position", "name", "odds"]);
    assert_eq!(first["name"], "John Smith\nThe Movie");
}

#[tokio::test]
async fn page_without_wrappers_writes_empty_array() {
    let server = serve(200, "<html><body><p>No odds yet</p></body></html>").await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.json");

    run(&format!("{}/odds", server.uri()), &out, ExtractProfile::RICH, &mut Vec::<u8>::new())
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "[]");
}

#[tokio::test]
async fn error_status_aborts_without_output() {
    let server = serve(500, "oops").await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.json");

    let mut stdout: Vec<u8> = Vec::new();

    let err = run(&format!("{}/odds", server.uri()), &out, ExtractProfile::RICH, &mut stdout)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Reqwest(_)));
    assert!(!out.exists());
    assert!(stdout.is_empty());
}

#[tokio::test]
async fn connection_refused_aborts_without_output() {
    // Nothing listens on port 1.
    let url = "http://127.0.0.1:1/odds";
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.json");

    let err = run(url, &out, ExtractProfile::RICH, &mut Vec::<u8>::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Reqwest(_)));
    assert!(!out.exists());
}
