use actix_web::web;

use crate::controller::{fixtures, match_detail, proxy};

/// Registers every `/api` route.
///
/// `live` and the `detail/...` routes are registered before `{date}` so they
/// are matched first.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/leagues", web::get().to(proxy::leagues))
            .route("/leagues/{league_id}", web::get().to(proxy::league))
            .route("/matches", web::get().to(proxy::matches_today))
            .route("/matches/live", web::get().to(proxy::live_matches))
            .route(
                "/matches/detail/{match_id}/timeline",
                web::get().to(match_detail::match_timeline),
            )
            .route(
                "/matches/detail/{match_id}/lineups",
                web::get().to(match_detail::match_lineups),
            )
            .route("/matches/detail/{match_id}", web::get().to(proxy::match_detail))
            .route("/matches/{date}", web::get().to(proxy::matches_by_date))
            .route("/fixtures/{date}", web::get().to(fixtures::fixtures_by_date))
            .route("/news", web::get().to(proxy::news)),
    );
}
