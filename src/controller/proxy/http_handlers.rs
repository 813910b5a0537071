use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use std::collections::HashMap;

use super::responses::{bad_request, leagues_failure, leagues_fallback, status_code, upstream_failure};
use super::validation::{validate_date, validate_match_id};
use crate::controller::upstream::{Endpoint, UpstreamClient, fetch_json};

/// Mirrors a successful upstream json body, or the upstream failure.
async fn relay(upstream: &dyn UpstreamClient, endpoint: Endpoint) -> HttpResponse {
    match fetch_json(upstream, &endpoint).await {
        Ok((status, body)) => HttpResponse::build(status_code(status)).json(body),
        Err(e) => upstream_failure(&e, &endpoint.to_string()),
    }
}

pub async fn leagues(upstream: Data<dyn UpstreamClient>) -> HttpResponse {
    relay(upstream.get_ref(), Endpoint::Leagues).await
}

pub async fn league(
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    upstream: Data<dyn UpstreamClient>,
) -> HttpResponse {
    let season = query
        .get("season")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let endpoint = Endpoint::League {
        league_id: path.into_inner(),
        season,
    };
    relay(upstream.get_ref(), endpoint).await
}

/// Always answers 200 so pollers expecting a `leagues` array keep working.
pub async fn live_matches(upstream: Data<dyn UpstreamClient>) -> HttpResponse {
    let endpoint = Endpoint::LiveMatches;
    match fetch_json(upstream.get_ref(), &endpoint).await {
        Ok((status, body)) => HttpResponse::build(status_code(status)).json(body),
        Err(e) => {
            log::warn!("{endpoint} unavailable: {e}");
            leagues_fallback(StatusCode::OK, "Failed to fetch live matches")
        }
    }
}

pub async fn match_detail(
    path: web::Path<String>,
    upstream: Data<dyn UpstreamClient>,
) -> HttpResponse {
    let match_id = path.into_inner();
    if let Err(message) = validate_match_id(&match_id) {
        return bad_request(message);
    }
    relay(upstream.get_ref(), Endpoint::MatchDetail { match_id }).await
}

pub async fn matches_by_date(
    path: web::Path<String>,
    upstream: Data<dyn UpstreamClient>,
) -> HttpResponse {
    matches_for_date(upstream.get_ref(), path.into_inner()).await
}

/// Today's fixtures, with the date taken in UTC.
pub async fn matches_today(upstream: Data<dyn UpstreamClient>) -> HttpResponse {
    let today = chrono::Utc::now().format("%Y%m%d").to_string();
    matches_for_date(upstream.get_ref(), today).await
}

async fn matches_for_date(upstream: &dyn UpstreamClient, date: String) -> HttpResponse {
    if let Err(message) = validate_date(&date) {
        log::debug!("rejected date {date:?}");
        return leagues_fallback(StatusCode::BAD_REQUEST, message);
    }
    let endpoint = Endpoint::MatchesByDate { date };
    match fetch_json(upstream, &endpoint).await {
        Ok((status, body)) => HttpResponse::build(status_code(status)).json(body),
        Err(e) => leagues_failure(&e, &endpoint.to_string()),
    }
}

pub async fn news(upstream: Data<dyn UpstreamClient>) -> HttpResponse {
    relay(upstream.get_ref(), Endpoint::News).await
}
