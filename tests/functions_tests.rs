use serde_json::{json, Value};

use portfolio::{
    functions::{handle, handle_raw, FunctionEvent, FunctionResponse},
    resource::Resource,
    storage::MemStorage,
};

fn event(method: &str, path: &str, body: Option<Value>) -> FunctionEvent {
    FunctionEvent {
        http_method: method.to_string(),
        path: path.to_string(),
        body: body.map(|b| b.to_string()),
    }
}

fn body(res: &FunctionResponse) -> Value {
    serde_json::from_str(&res.body).expect("json body")
}

#[tokio::test]
async fn research_projects_function_lists_seed_data() {
    let store = MemStorage::seeded();
    let res = handle(
        Resource::ResearchProjects,
        &event("GET", "/.netlify/functions/research-projects", None),
        &store,
    )
    .await;
    assert_eq!(res.status_code, 200);
    assert_eq!(res.headers["Content-Type"], "application/json");
    assert_eq!(res.headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(body(&res).as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn options_is_answered_for_every_resource() {
    let store = MemStorage::seeded();
    for resource in Resource::ALL {
        let res = handle(resource, &event("OPTIONS", "", None), &store).await;
        assert_eq!(res.status_code, 200, "{resource}");
        assert!(res.body.is_empty());
        assert_eq!(res.headers["Access-Control-Allow-Headers"], "Content-Type");
    }
}

#[tokio::test]
async fn contact_function_creates_then_lists() {
    let store = MemStorage::seeded();
    let submission = json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "subject": "collaboration",
        "message": "I would like to discuss a potential research partnership."
    });
    let res = handle(
        Resource::ContactMessages,
        &event("POST", "/.netlify/functions/contact-messages", Some(submission)),
        &store,
    )
    .await;
    assert_eq!(res.status_code, 201);
    let created = body(&res);
    assert_eq!(created["message"], "Message sent successfully");
    let id = created["id"].as_str().unwrap().to_string();

    let res = handle(Resource::ContactMessages, &event("GET", "", None), &store).await;
    let listed = body(&res);
    assert_eq!(listed[0]["id"], id.as_str());
    assert!(listed[0]["createdAt"].is_string());

    let res = handle(
        Resource::ContactMessages,
        &event("GET", &format!("/api/contact-messages/{id}"), None),
        &store,
    )
    .await;
    assert_eq!(res.status_code, 200);
    assert_eq!(body(&res)["name"], "Jane Doe");
}

#[tokio::test]
async fn contact_function_rejects_invalid_and_malformed_bodies() {
    let store = MemStorage::seeded();

    let res = handle(
        Resource::ContactMessages,
        &event("POST", "", Some(json!({ "name": "Jane Doe", "email": "nope" }))),
        &store,
    )
    .await;
    assert_eq!(res.status_code, 400);
    let errors = body(&res)["errors"].as_array().unwrap().clone();
    let fields: Vec<_> = errors.iter().map(|e| e["path"][0].clone()).collect();
    assert_eq!(fields, vec![json!("email"), json!("subject"), json!("message")]);

    let res = handle(
        Resource::ContactMessages,
        &FunctionEvent {
            http_method: "POST".into(),
            path: String::new(),
            body: None,
        },
        &store,
    )
    .await;
    assert_eq!(res.status_code, 500);
    assert_eq!(body(&res), json!({ "message": "Internal server error" }));

    let res = handle(Resource::ContactMessages, &event("GET", "", None), &store).await;
    assert_eq!(body(&res), json!([]));
}

#[tokio::test]
async fn unsupported_methods_get_405() {
    let store = MemStorage::seeded();
    let res = handle(Resource::Publications, &event("POST", "", Some(json!({}))), &store).await;
    assert_eq!(res.status_code, 405);
    assert_eq!(body(&res)["message"], "Method not allowed");

    let res = handle(Resource::ContactMessages, &event("DELETE", "", None), &store).await;
    assert_eq!(res.status_code, 405);
}

#[tokio::test]
async fn unknown_id_is_404() {
    let store = MemStorage::seeded();
    let res = handle(
        Resource::Experiences,
        &event("get", "/api/experiences/404", None),
        &store,
    )
    .await;
    assert_eq!(res.status_code, 404);
    assert_eq!(body(&res)["message"], "Experience not found");
}

#[tokio::test]
async fn undecodable_events_still_get_a_json_response() {
    let store = MemStorage::seeded();
    for raw in ["", "not json", r#"{"path":"/api/publications"}"#] {
        let res = handle_raw(Resource::Publications, raw, &store).await;
        assert_eq!(res.status_code, 500, "{raw:?}");
        assert_eq!(res.headers["Content-Type"], "application/json");
        assert_eq!(body(&res), json!({ "message": "Internal server error" }));
    }

    let res = handle_raw(
        Resource::Publications,
        r#"{"httpMethod":"GET","path":"/api/publications/1"}"#,
        &store,
    )
    .await;
    assert_eq!(res.status_code, 200);
    assert_eq!(body(&res)["id"], "1");
}
