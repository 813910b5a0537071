use actix_web::HttpResponse;
use actix_web::web::{self, Data};
use serde::Serialize;
use serde_json::Value;

use crate::controller::proxy::{bad_request, upstream_failure, validate_match_id};
use crate::controller::upstream::{Endpoint, UpstreamClient, fetch_json};
use crate::error::AppError;
use crate::lineup::{PositionAssignment, layout_lineup, resolve_formation};
use crate::model::{Side, TeamSheet, decode_events, decode_team_sheets};
use crate::timeline::{TimelineEntry, build_timeline};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub match_id: String,
    pub events: Vec<TimelineEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideLayout<'a> {
    pub team: &'a str,
    pub requested_formation: &'a str,
    pub formation: &'static str,
    pub players: Vec<PositionAssignment<'a>>,
}

impl<'a> SideLayout<'a> {
    #[must_use]
    pub fn build(sheet: &'a TeamSheet, side: Side) -> Self {
        SideLayout {
            team: &sheet.name,
            requested_formation: &sheet.formation,
            formation: resolve_formation(&sheet.formation).key,
            players: layout_lineup(&sheet.formation, &sheet.starters, side),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupsResponse<'a> {
    pub match_id: &'a str,
    pub home: SideLayout<'a>,
    pub away: SideLayout<'a>,
}

async fn load_detail(upstream: &dyn UpstreamClient, match_id: &str) -> Result<Value, AppError> {
    let endpoint = Endpoint::MatchDetail {
        match_id: match_id.to_string(),
    };
    let (_, detail) = fetch_json(upstream, &endpoint).await?;
    Ok(detail)
}

/// Match events in chronological order, each with the key that placed it.
pub async fn match_timeline(
    path: web::Path<String>,
    upstream: Data<dyn UpstreamClient>,
) -> HttpResponse {
    let match_id = path.into_inner();
    if let Err(message) = validate_match_id(&match_id) {
        return bad_request(message);
    }
    match load_detail(upstream.get_ref(), &match_id).await {
        Ok(detail) => {
            let events = build_timeline(decode_events(&detail));
            HttpResponse::Ok().json(TimelineResponse { match_id, events })
        }
        Err(e) => upstream_failure(&e, "match details"),
    }
}

/// Starting elevens of both teams laid out on one shared pitch.
pub async fn match_lineups(
    path: web::Path<String>,
    upstream: Data<dyn UpstreamClient>,
) -> HttpResponse {
    let match_id = path.into_inner();
    if let Err(message) = validate_match_id(&match_id) {
        return bad_request(message);
    }
    match load_detail(upstream.get_ref(), &match_id).await {
        Ok(detail) => {
            let (home, away) = decode_team_sheets(&detail);
            HttpResponse::Ok().json(LineupsResponse {
                match_id: &match_id,
                home: SideLayout::build(&home, Side::Home),
                away: SideLayout::build(&away, Side::Away),
            })
        }
        Err(e) => upstream_failure(&e, "match details"),
    }
}
