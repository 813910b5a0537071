use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};
use std::sync::Arc;

use rusty_footy::controller::upstream::Endpoint;
use rusty_footy::routes::configure_api;

mod common;
use common::{FakeUpstream, Reply, upstream_data};

#[actix_web::test]
async fn test2_successful_bodies_are_relayed() {
    let leagues = json!({"popular": [{"id": 47, "name": "Premier League"}]});
    let fake = Arc::new(
        FakeUpstream::new()
            .reply("allLeagues", Reply::Json(200, leagues.clone()))
            .reply("worldnews", Reply::Json(200, json!([{"title": "Transfer news"}]))),
    );
    let app = test::init_service(
        App::new()
            .app_data(upstream_data(&fake))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/leagues").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, leagues);

    let req = test::TestRequest::get().uri("/api/news").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["title"], "Transfer news");
}

#[actix_web::test]
async fn test2_league_season_is_forwarded() {
    let fake = Arc::new(FakeUpstream::new().reply("leagues", Reply::Json(200, json!({"details": {"id": 47}}))));
    let app = test::init_service(
        App::new()
            .app_data(upstream_data(&fake))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/leagues/47?season=2023%2F2024")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/leagues/87").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(
        fake.calls(),
        vec![
            Endpoint::League {
                league_id: "47".to_string(),
                season: Some("2023/2024".to_string()),
            },
            Endpoint::League {
                league_id: "87".to_string(),
                season: None,
            },
        ]
    );
}

#[actix_web::test]
async fn test2_date_failure_keeps_upstream_status_and_leagues_shape() {
    let fake = Arc::new(FakeUpstream::new().reply(
        "data/matches",
        Reply::Raw(503, "Service Unavailable".to_string()),
    ));
    let app = test::init_service(
        App::new()
            .app_data(upstream_data(&fake))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/matches/20240101").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(body["leagues"], json!([]));
    assert_eq!(
        fake.calls(),
        vec![Endpoint::MatchesByDate {
            date: "20240101".to_string()
        }]
    );
}

#[actix_web::test]
async fn test2_unreachable_upstream_on_date_is_bad_gateway() {
    let fake = Arc::new(FakeUpstream::new().reply("data/matches", Reply::Unreachable));
    let app = test::init_service(
        App::new()
            .app_data(upstream_data(&fake))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/matches/20240101").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["leagues"], json!([]));
}

#[actix_web::test]
async fn test2_live_failures_still_answer_ok() {
    let fake = Arc::new(FakeUpstream::new().reply("data/matches", Reply::Raw(500, "boom".to_string())));
    let app = test::init_service(
        App::new()
            .app_data(upstream_data(&fake))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/matches/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(body["leagues"], json!([]));
    assert_eq!(fake.calls(), vec![Endpoint::LiveMatches]);
}

#[actix_web::test]
async fn test2_other_failures_forward_status_or_hide_details() {
    let fake = Arc::new(
        FakeUpstream::new()
            .reply("allLeagues", Reply::Raw(429, "slow down".to_string()))
            .reply("data/matchDetails", Reply::Raw(200, "<html>not json</html>".to_string()))
            .reply("worldnews", Reply::Unreachable),
    );
    let app = test::init_service(
        App::new()
            .app_data(upstream_data(&fake))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/leagues").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("429"));

    for uri in ["/api/matches/detail/4193490", "/api/news"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Internal server error"}));
    }
}

#[actix_web::test]
async fn test2_matches_without_date_asks_for_today() {
    let fake = Arc::new(FakeUpstream::new().reply("data/matches", Reply::Json(200, json!({"leagues": []}))));
    let app = test::init_service(
        App::new()
            .app_data(upstream_data(&fake))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/matches").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    match fake.calls().as_slice() {
        [Endpoint::MatchesByDate { date }] => {
            assert_eq!(date.len(), 8);
            assert!(date.chars().all(|c| c.is_ascii_digit()));
        }
        other => panic!("unexpected upstream calls: {other:?}"),
    }
}

#[tokio::test]
async fn test2_fetch_json_classifies_failures() -> Result<(), Box<dyn std::error::Error>> {
    use rusty_footy::AppError;
    use rusty_footy::controller::upstream::fetch_json;

    let fake = FakeUpstream::new()
        .reply("allLeagues", Reply::Json(200, json!({"popular": []})))
        .reply("worldnews", Reply::Raw(200, "not json".to_string()))
        .reply("data/matches", Reply::Unreachable);

    let (status, body) = fetch_json(&fake, &Endpoint::Leagues).await?;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"popular": []}));

    let err = fetch_json(&fake, &Endpoint::News).await.unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));

    let err = fetch_json(&fake, &Endpoint::LiveMatches).await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
    assert_eq!(err.upstream_status(), None);

    let missing = Endpoint::MatchDetail {
        match_id: "1".to_string(),
    };
    let err = fetch_json(&fake, &missing).await.unwrap_err();
    assert_eq!(err.upstream_status(), Some(404));
    Ok(())
}
