use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use saju_api::{router, AppState, KasiLunarClient};
use std::sync::Arc;
use tower::ServiceExt;

fn app_for(oracle_url: String) -> axum::Router {
    let oracle = KasiLunarClient::new(oracle_url, 5).unwrap();
    router(AppState {
        oracle: Arc::new(oracle),
    })
}

fn convert_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/convert")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "calendar": "solar",
        "date": "1990-01-01",
        "time": "12:00",
        "gender": "male",
        "name": "테스트",
        "phone": "010-1234-5678"
    })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_end_to_end_convert_with_mock_oracle() {
    let server = MockServer::start();
    let oracle_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/dayfortune")
            .query_param("date", "19900101");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "year": "기사",
                "month": "병자",
                "day": "갑자",
                "hyear": "己巳",
                "hmonth": "丙子",
                "hday": "甲子",
                "fmt": "1989-12-05"
            }));
    });

    let response = app_for(server.base_url())
        .oneshot(convert_request(valid_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    oracle_mock.assert();

    let body = body_json(response).await;
    assert_eq!(body["ok"], true);

    let data = &body["data"];
    assert_eq!(data["lunar_date"], "1989-12-05");
    assert_eq!(data["saju"]["year"], "기사");
    assert_eq!(data["saju"]["month"], "병자");
    assert_eq!(data["saju"]["day"], "갑자");
    // 12:00 on a 갑 day -> 경오
    assert_eq!(data["saju"]["hour"], "경오");

    assert_eq!(data["elements"]["heavenly_stems"][0], "己");
    assert_eq!(data["elements"]["heavenly_stems"][3], "庚");
    assert_eq!(data["elements"]["earthly_branches"][3], "午");

    // the day column classifies the day stem against itself
    assert_eq!(data["sipseong"][2], "비견");
    // 갑 day: 기 -> 정재, 병 -> 식신, 경 -> 편관
    assert_eq!(data["sipseong"][0], "정재");
    assert_eq!(data["sipseong"][1], "식신");
    assert_eq!(data["sipseong"][3], "편관");
    // branches via representative stems: 사->병 식신, 자->계 정인, 오->정 상관
    assert_eq!(data["sipseong_ji"][0], "식신");
    assert_eq!(data["sipseong_ji"][1], "정인");
    assert_eq!(data["sipseong_ji"][2], "정인");
    assert_eq!(data["sipseong_ji"][3], "상관");
}

#[tokio::test]
async fn test_convert_is_deterministic_across_requests() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/dayfortune");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "year": "계사",
                "month": "기미",
                "day": "계미",
                "hyear": "癸巳",
                "hmonth": "己未",
                "hday": "癸未",
                "fmt": "2013-06-09"
            }));
    });

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let response = app_for(server.base_url())
            .oneshot(convert_request(valid_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(body_json(response).await);
    }

    assert_eq!(bodies[0], bodies[1]);
}

#[tokio::test]
async fn test_validation_failures_do_not_reach_the_oracle() {
    let server = MockServer::start();
    let oracle_mock = server.mock(|when, then| {
        when.method(GET).path("/dayfortune");
        then.status(200).json_body(serde_json::json!({}));
    });

    let cases = [
        (
            {
                let mut b = valid_body();
                b.as_object_mut().unwrap().remove("date");
                b
            },
            "MISSING_FIELD",
        ),
        (
            {
                let mut b = valid_body();
                b["date"] = serde_json::json!("2024/01/01");
                b
            },
            "INVALID_DATE",
        ),
        (
            {
                let mut b = valid_body();
                b["time"] = serde_json::json!("25:61");
                b
            },
            "INVALID_TIME",
        ),
        (
            {
                let mut b = valid_body();
                b["gender"] = serde_json::json!("other");
                b
            },
            "INVALID_GENDER",
        ),
        (
            {
                let mut b = valid_body();
                b["calendar"] = serde_json::json!("gregorian");
                b
            },
            "INVALID_CALENDAR",
        ),
    ];

    for (body, expected_code) in cases {
        let response = app_for(server.base_url())
            .oneshot(convert_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["ok"], false);
        assert_eq!(json["code"], expected_code);
    }

    oracle_mock.assert_hits(0);
}

#[tokio::test]
async fn test_oracle_failure_maps_to_generic_internal_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/dayfortune");
        then.status(500);
    });

    let response = app_for(server.base_url())
        .oneshot(convert_request(valid_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "서버 내부 오류가 발생했습니다.");
}

#[tokio::test]
async fn test_healthz_liveness() {
    let server = MockServer::start();

    let response = app_for(server.base_url())
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}
