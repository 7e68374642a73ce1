mod common;

use axum::http::StatusCode;
use serde_json::Value;
use vitrine::web::TenantRole;

use crate::common::{
    Action, Flow, seed_course, seed_lesson, seed_member, seed_module, seed_tenant, seed_vitrine,
    setup_offline_server, setup_server, setup_test_db, token_for,
};

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn anonymous_requests_are_rejected() {
    let server = setup_offline_server().await;

    Flow::new()
        .step(
            Action::get("list without cookie", "/api/v1/vitrines")
                .with_expect(StatusCode::UNAUTHORIZED)
                .assert_body(|body| assert_eq!(body["message"], "Authentication required.")),
        )
        .step(
            Action::get("garbage cookie", "/api/v1/vitrines")
                .with_token("not-a-jwt")
                .with_expect(StatusCode::BAD_REQUEST)
                .assert_body(|body| {
                    assert_eq!(body["message"], "Authentication error, cookie invalid.");
                    assert_eq!(body["status_code"], "400");
                }),
        )
        .run(&server)
        .await;
}

/// Every `id` found anywhere in a catalog response.
fn all_ids(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if let Some(id) = map.get("id").and_then(Value::as_str) {
                out.push(id.to_string());
            }
            map.values().for_each(|v| all_ids(v, out));
        }
        Value::Array(items) => items.iter().for_each(|v| all_ids(v, out)),
        _ => {}
    }
}

#[tokio::test]
async fn vitrine_tree_is_assembled_per_tenant() {
    let db = setup_test_db().await;
    let mm = db.mm();

    let t1 = seed_tenant(&mm, "t1").await;
    let t2 = seed_tenant(&mm, "t2").await;
    let u1 = seed_member(&mm, &t1, "alice", TenantRole::Member).await;
    let u2 = seed_member(&mm, &t2, "bob", TenantRole::Member).await;

    let v1 = seed_vitrine(&mm, &t1, "v1", Some(1)).await;
    let c1 = seed_course(&mm, &v1, "c1", Some(1)).await;
    let m1 = seed_module(&mm, &c1, "m1", Some(1)).await;
    let l1 = seed_lesson(&mm, &m1, "l1", Some(1), true).await;
    let l2 = seed_lesson(&mm, &m1, "l2", Some(2), false).await;

    // same names in the other tenant
    let v1_t2 = seed_vitrine(&mm, &t2, "v1", Some(1)).await;
    let c1_t2 = seed_course(&mm, &v1_t2, "c1", Some(1)).await;
    let m1_t2 = seed_module(&mm, &c1_t2, "m1", Some(1)).await;
    let l1_t2 = seed_lesson(&mm, &m1_t2, "l1", Some(1), true).await;

    let t1_token = token_for(&u1, &t1).await;
    let t2_token = token_for(&u2, &t2).await;
    let server = setup_server(&db).await;

    let (v1_id, c1_id, m1_id, l1_id) = (
        v1.id.to_string(),
        c1.id.to_string(),
        m1.id.to_string(),
        l1.id.to_string(),
    );
    let (v1_t2_id, l1_t2_id) = (v1_t2.id.to_string(), l1_t2.id.to_string());
    let detail_l1_id = l1_id.clone();

    let ctx = Flow::new()
        .step(
            Action::get("list t1", "/api/v1/vitrines")
                .with_token(&t1_token)
                .with_save_as("t1")
                .assert_body(move |body| {
                    assert_eq!(body["total"], 1);
                    assert_eq!(ids(&body["vitrines"]), [v1_id.clone()]);

                    let courses = &body["vitrines"][0]["courses"];
                    assert_eq!(ids(courses), [c1_id.clone()]);

                    let modules = &courses[0]["modules"];
                    assert_eq!(ids(modules), [m1_id.clone()]);
                    assert_eq!(ids(&modules[0]["lessons"]), [l1_id.clone()]);
                    assert_eq!(modules[0]["lessons"][0]["name"], "l1");
                    assert_eq!(modules[0]["lessons"][0]["order"], 1);
                    assert_eq!(modules[0]["lessons"][0]["type"], "video");
                }),
        )
        .step(
            Action::get("list t2", "/api/v1/vitrines")
                .with_token(&t2_token)
                .with_save_as("t2")
                .assert_body(move |body| {
                    assert_eq!(body["total"], 1);
                    assert_eq!(ids(&body["vitrines"]), [v1_t2_id.clone()]);
                    assert_eq!(body["vitrines"][0]["name"], "v1");

                    let lessons = &body["vitrines"][0]["courses"][0]["modules"][0]["lessons"];
                    assert_eq!(ids(lessons), [l1_t2_id.clone()]);
                }),
        )
        .step(
            Action::get("vitrine with children", format!("/api/v1/vitrines/{}", v1.id))
                .with_token(&t1_token)
                .with_param("includeChildren", "true")
                .assert_body(move |body| {
                    assert_eq!(body["vitrine"]["name"], "v1");
                    let lessons = &body["vitrine"]["courses"][0]["modules"][0]["lessons"];
                    assert_eq!(ids(lessons), [detail_l1_id.clone()]);
                }),
        )
        .step(
            Action::get("course of another tenant", format!("/api/v1/courses/{}", c1.id))
                .with_token(&t2_token)
                .with_expect(StatusCode::NOT_FOUND)
                .assert_body(|body| assert_eq!(body["message"], "Course not found.")),
        )
        .step(
            Action::get("vitrine of another tenant", format!("/api/v1/vitrines/{}", v1.id))
                .with_token(&t2_token)
                .with_expect(StatusCode::NOT_FOUND),
        )
        .step(
            Action::get("lesson of another tenant", format!("/api/v1/lessons/{}", l1_t2.id))
                .with_token(&t1_token)
                .with_expect(StatusCode::NOT_FOUND),
        )
        .step(
            Action::get("unpublished lesson", format!("/api/v1/lessons/{}", l2.id))
                .with_token(&t1_token)
                .with_expect(StatusCode::NOT_FOUND)
                .assert_body(|body| assert_eq!(body["message"], "Lesson not found.")),
        )
        .step(
            Action::get("published lesson", format!("/api/v1/lessons/{}", l1.id))
                .with_token(&t1_token)
                .with_param("includeChildren", "true")
                .assert_body(|body| {
                    assert_eq!(body["lesson"]["name"], "l1");
                    assert_eq!(body["lesson"]["order"], 1);
                    assert!(body["lesson"].get("slug").is_none());
                }),
        )
        .run(&server)
        .await;

    let (mut t1_ids, mut t2_ids) = (vec![], vec![]);
    all_ids(ctx.get("t1"), &mut t1_ids);
    all_ids(ctx.get("t2"), &mut t2_ids);
    assert_eq!(t1_ids.len(), 4);
    assert_eq!(t2_ids.len(), 4);
    assert!(t1_ids.iter().all(|id| !t2_ids.contains(id)));
}

#[tokio::test]
async fn detail_routes_honour_include_children() {
    let db = setup_test_db().await;
    let mm = db.mm();

    let t1 = seed_tenant(&mm, "t1").await;
    let user = seed_member(&mm, &t1, "alice", TenantRole::Member).await;
    let v1 = seed_vitrine(&mm, &t1, "v1", None).await;
    let c1 = seed_course(&mm, &v1, "c1", None).await;
    let m1 = seed_module(&mm, &c1, "m1", None).await;
    let l1 = seed_lesson(&mm, &m1, "l1", None, true).await;
    seed_lesson(&mm, &m1, "draft", None, false).await;

    let token = token_for(&user, &t1).await;
    let server = setup_server(&db).await;
    let l1_id = l1.id.to_string();

    Flow::new()
        .step(
            Action::get("vitrine without children", format!("/api/v1/vitrines/{}", v1.id))
                .with_token(&token)
                .assert_body(|body| {
                    assert_eq!(body["vitrine"]["name"], "v1");
                    assert!(body["vitrine"].get("courses").is_none());
                    assert!(body["vitrine"].get("order").is_none());
                }),
        )
        .step(
            Action::get("vitrine with children", format!("/api/v1/vitrines/{}", v1.id))
                .with_token(&token)
                .with_param("includeChildren", "true")
                .assert_body(move |body| {
                    let lessons = &body["vitrine"]["courses"][0]["modules"][0]["lessons"];
                    assert_eq!(ids(lessons), [l1_id.clone()]);
                }),
        )
        .step(
            Action::get("course with children", format!("/api/v1/courses/{}", c1.id))
                .with_token(&token)
                .with_param("includeChildren", "true")
                .assert_body(|body| {
                    assert_eq!(body["course"]["modules"][0]["name"], "m1");
                    assert_eq!(body["course"]["modules"][0]["lessons"][0]["name"], "l1");
                }),
        )
        .step(
            Action::get("module without children", format!("/api/v1/modules/{}", m1.id))
                .with_token(&token)
                .assert_body(|body| {
                    assert_eq!(body["module"]["name"], "m1");
                    assert!(body["module"].get("lessons").is_none());
                }),
        )
        .step(
            Action::get("module with children", format!("/api/v1/modules/{}", m1.id))
                .with_token(&token)
                .with_param("includeChildren", "true")
                .assert_body(|body| {
                    assert_eq!(body["module"]["lessons"].as_array().unwrap().len(), 1);
                }),
        )
        .step(
            Action::get("unknown module", format!("/api/v1/modules/{}", uuid::Uuid::new_v4()))
                .with_token(&token)
                .with_expect(StatusCode::NOT_FOUND)
                .assert_body(|body| assert_eq!(body["message"], "Module not found.")),
        )
        .run(&server)
        .await;
}

#[tokio::test]
async fn siblings_are_ordered_and_listing_is_stable() {
    let db = setup_test_db().await;
    let mm = db.mm();

    let t1 = seed_tenant(&mm, "t1").await;
    let user = seed_member(&mm, &t1, "alice", TenantRole::Member).await;
    let second = seed_vitrine(&mm, &t1, "second", Some(2)).await;
    let first = seed_vitrine(&mm, &t1, "first", None).await;
    let c1 = seed_course(&mm, &first, "c1", None).await;
    let m1 = seed_module(&mm, &c1, "m1", None).await;
    seed_lesson(&mm, &m1, "three", Some(3), true).await;
    seed_lesson(&mm, &m1, "unset", None, true).await;
    seed_lesson(&mm, &m1, "one", Some(1), true).await;
    seed_lesson(&mm, &m1, "minus", Some(-1), true).await;

    let token = token_for(&user, &t1).await;
    let server = setup_server(&db).await;

    let ctx = Flow::new()
        .step(
            Action::get("first listing", "/api/v1/vitrines")
                .with_token(&token)
                .with_save_as("first"),
        )
        .step(
            Action::get("second listing", "/api/v1/vitrines")
                .with_token(&token)
                .with_save_as("second"),
        )
        .run(&server)
        .await;

    let listing = ctx.get("first");
    assert_eq!(ids(&listing["vitrines"]), [first.id.to_string(), second.id.to_string()]);

    let names: Vec<_> = listing["vitrines"][0]["courses"][0]["modules"][0]["lessons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["minus", "unset", "one", "three"]);

    assert_eq!(
        serde_json::to_string(ctx.get("first")).unwrap(),
        serde_json::to_string(ctx.get("second")).unwrap()
    );
}

#[tokio::test]
async fn sessions_for_foreign_tenants_are_anonymous() {
    let db = setup_test_db().await;
    let mm = db.mm();

    let t1 = seed_tenant(&mm, "t1").await;
    let t2 = seed_tenant(&mm, "t2").await;
    let user = seed_member(&mm, &t1, "alice", TenantRole::Member).await;

    // alice is not a member of t2
    let token = token_for(&user, &t2).await;
    let server = setup_server(&db).await;

    Flow::new()
        .step(
            Action::get("list as non-member", "/api/v1/vitrines")
                .with_token(&token)
                .with_expect(StatusCode::UNAUTHORIZED),
        )
        .run(&server)
        .await;
}
