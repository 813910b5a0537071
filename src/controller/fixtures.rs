use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use serde::Serialize;

use crate::controller::proxy::{leagues_failure, leagues_fallback, validate_date};
use crate::controller::upstream::{Endpoint, UpstreamClient, fetch_json};
use crate::fixtures::{LeagueFixtures, group_fixtures};

#[derive(Debug, Serialize)]
pub struct FixturesResponse {
    pub date: String,
    pub leagues: Vec<LeagueFixtures>,
}

/// The day's matches with each competition listed once.
pub async fn fixtures_by_date(
    path: web::Path<String>,
    upstream: Data<dyn UpstreamClient>,
) -> HttpResponse {
    let date = path.into_inner();
    if let Err(message) = validate_date(&date) {
        return leagues_fallback(StatusCode::BAD_REQUEST, message);
    }
    let endpoint = Endpoint::MatchesByDate { date: date.clone() };
    match fetch_json(upstream.get_ref(), &endpoint).await {
        Ok((_, payload)) => HttpResponse::Ok().json(FixturesResponse {
            date,
            leagues: group_fixtures(&payload),
        }),
        Err(e) => leagues_failure(&e, &endpoint.to_string()),
    }
}
