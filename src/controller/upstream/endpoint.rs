use reqwest::Url;
use std::fmt;

use crate::error::AppError;

/// The upstream resources the proxy knows how to reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Leagues,
    League {
        league_id: String,
        season: Option<String>,
    },
    LiveMatches,
    MatchesByDate {
        date: String,
    },
    MatchDetail {
        match_id: String,
    },
    News,
}

impl Endpoint {
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Leagues => "allLeagues",
            Endpoint::League { .. } => "leagues",
            Endpoint::LiveMatches | Endpoint::MatchesByDate { .. } => "data/matches",
            Endpoint::MatchDetail { .. } => "data/matchDetails",
            Endpoint::News => "worldnews",
        }
    }

    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::Leagues => vec![],
            Endpoint::League { league_id, season } => {
                let mut query = vec![("id", league_id.clone())];
                if let Some(season) = season {
                    query.push(("season", season.clone()));
                }
                query
            }
            Endpoint::LiveMatches => vec![("live", "true".to_string())],
            Endpoint::MatchesByDate { date } => vec![("date", date.clone())],
            Endpoint::MatchDetail { match_id } => vec![("matchId", match_id.clone())],
            Endpoint::News => vec![("lang", "en".to_string())],
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if `base_url` is not a valid url
    pub fn url(&self, base_url: &str) -> Result<Url, AppError> {
        let raw = format!("{}/{}", base_url.trim_end_matches('/'), self.path());
        let mut url = Url::parse(&raw).map_err(|e| AppError::Other(format!("bad upstream url {raw}: {e}")))?;
        let query = self.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Leagues => write!(f, "leagues"),
            Endpoint::League { league_id, .. } => write!(f, "league {league_id}"),
            Endpoint::LiveMatches => write!(f, "live matches"),
            Endpoint::MatchesByDate { date } => write!(f, "matches for {date}"),
            Endpoint::MatchDetail { match_id } => write!(f, "match details for {match_id}"),
            Endpoint::News => write!(f, "news"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.test/api";

    #[test]
    fn urls_carry_expected_query() {
        assert_eq!(
            Endpoint::Leagues.url(BASE).unwrap().as_str(),
            "https://example.test/api/allLeagues"
        );
        assert_eq!(
            Endpoint::MatchesByDate { date: "20240101".into() }.url(BASE).unwrap().as_str(),
            "https://example.test/api/data/matches?date=20240101"
        );
        assert_eq!(
            Endpoint::MatchDetail { match_id: "4193490".into() }
                .url("https://example.test/api/")
                .unwrap()
                .as_str(),
            "https://example.test/api/data/matchDetails?matchId=4193490"
        );
    }

    #[test]
    fn league_params_are_encoded() {
        let endpoint = Endpoint::League {
            league_id: "47".into(),
            season: Some("2023/2024".into()),
        };
        assert_eq!(
            endpoint.url(BASE).unwrap().as_str(),
            "https://example.test/api/leagues?id=47&season=2023%2F2024"
        );
    }
}
