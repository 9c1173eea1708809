use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header as header_is, method, path, query_param},
};
use yeahyak_portal::{app, client::ApiClient, config::ClientConfig, state::AppState};

fn state_for(base_url: &str) -> AppState {
    let client = ApiClient::new(&ClientConfig {
        base_url: base_url.to_string(),
        user_agent: "yeahyak-tests".into(),
    })
    .unwrap();
    AppState::with_samples(client)
}

fn offline_state() -> AppState {
    // Nothing listens here; routes that stay local never notice.
    state_for("http://127.0.0.1:9/api")
}

async fn get(state: AppState, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let response = app(state)
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn monitoring_report_filters_by_month_and_region() {
    let (status, body) = get(
        offline_state(),
        "/api/hq/monitoring?from=2025-01&to=2025-01&region=%EC%B6%A9%EB%82%A8%EC%B6%A9%EB%B6%81%2F%EB%8C%80%EC%A0%84",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["totalElements"], 2);
    let branches: Vec<&str> = body["data"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["branch"].as_str().unwrap())
        .collect();
    assert_eq!(branches, ["대전서구점", "대전탄방점"]);
    assert_eq!(body["data"]["rows"][0]["status"], "NORMAL");
    assert_eq!(body["data"]["statusCounts"].as_array().unwrap().len(), 3);
    assert!(body["data"]["ordersByBranch"].is_array());
    assert!(body["data"]["productTotals"].is_array());
    assert_eq!(body["data"]["totals"]["branches"], 2);
    assert!(body["data"]["totals"]["orders"].is_u64());
}

#[tokio::test]
async fn bad_query_values_are_rejected() {
    for uri in [
        "/api/hq/monitoring?from=2025-13&to=2025-12",
        "/api/hq/monitoring?from=2025-03&to=2025-01",
        "/api/hq/monitoring?from=2025-01",
        "/api/hq/monitoring?status=EMPTY",
        "/api/hq/forecast/%ED%83%80%EC%9D%B4%EB%A0%88%EB%86%80/series?from=2025/01&to=2025-02",
        "/api/branch/dashboard?pharmacyId=abc",
        "/api/branch/dashboard",
    ] {
        let (status, body) = get(offline_state(), uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["success"], false, "{uri}");
        assert!(body["message"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn unknown_branch_record_is_not_found() {
    let (status, body) = get(offline_state(), "/api/hq/monitoring/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, body) = get(offline_state(), "/api/hq/monitoring/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["branch"], "천안불당점");
    assert_eq!(body["data"]["products"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn regions_are_served() {
    let (status, body) = get(offline_state(), "/api/hq/monitoring/regions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "충남충북");
    assert_eq!(body["data"][0]["children"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn forecast_search_and_series() {
    let (status, body) = get(offline_state(), "/api/hq/forecast?keyword=%ED%8C%90", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalElements"], 1);
    assert_eq!(body["data"][0]["product"], "판피린");
    assert_eq!(body["data"][0]["status"], "NORMAL");

    let (status, body) = get(
        offline_state(),
        "/api/hq/forecast/%ED%83%80%EC%9D%B4%EB%A0%88%EB%86%80/series?from=2025-02&to=2025-03",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let points = body["data"].as_array().unwrap();
    assert_eq!(points.len(), 6);
    assert_eq!(points[0]["kind"], "EXPECTED_DEMAND");
    assert_eq!(points[0]["month"], "2025-02");

    let (_, body) = get(offline_state(), "/api/hq/forecast/%EC%97%86%EC%9D%8C/series", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn unknown_path_gets_the_envelope() {
    let (status, body) = get(offline_state(), "/api/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn failing_dashboard_panel_leaves_its_sibling_intact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/announcements"))
        .and(header_is("authorization", "Bearer hq-token"))
        .and(query_param("size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "announcementId": 1,
                "type": "EPIDEMIC",
                "title": "독감 유행 주의보",
                "content": "재고를 확인해 주세요.",
                "createdAt": "2025-06-01T09:00:00"
            }],
            "totalElements": 1
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/admin/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "주문 서버 점검 중입니다."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = state_for(&format!("{}/api", server.uri()));
    let (status, body) = get(state, "/api/hq/dashboard", Some("hq-token")).await;

    assert_eq!(status, StatusCode::OK);
    let dashboard = &body["data"];
    assert_eq!(dashboard["announcements"]["items"][0]["title"], "독감 유행 주의보");
    assert!(dashboard["announcements"]["error"].is_null());
    assert!(dashboard["orders"]["items"].is_null());
    assert_eq!(dashboard["orders"]["error"], "주문 서버 점검 중입니다.");
}

#[tokio::test]
async fn branch_dashboard_asks_for_the_branch_orders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/announcements"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [],
            "totalElements": 0
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/branch/orders"))
        .and(query_param("pharmacyId", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "orderId": 11,
                "pharmacyId": 4,
                "pharmacyName": "천안불당점",
                "createdAt": "2025-06-02T10:30:00",
                "totalPrice": 54000,
                "status": "REQUESTED"
            }],
            "totalElements": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = state_for(&format!("{}/api", server.uri()));
    let (status, body) = get(state, "/api/branch/dashboard?pharmacyId=4", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["orders"]["items"][0]["orderId"], 11);
    assert_eq!(body["data"]["orders"]["totalElements"], 1);
    assert_eq!(body["data"]["announcements"]["items"], json!([]));
}

#[tokio::test]
async fn lowercase_bearer_scheme_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/announcements"))
        .and(header_is("authorization", "Bearer hq-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [],
            "totalElements": 0
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/admin/orders"))
        .and(header_is("authorization", "Bearer hq-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [],
            "totalElements": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = Request::builder()
        .uri("/api/hq/dashboard")
        .header(header::AUTHORIZATION, "bearer hq-token")
        .body(Body::empty())
        .unwrap();
    let response = app(state_for(&format!("{}/api", server.uri())))
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unreachable_backend_is_a_bad_gateway() {
    let (status, body) = get(offline_state(), "/api/public/announcements", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "서버에 연결할 수 없습니다.");
}
