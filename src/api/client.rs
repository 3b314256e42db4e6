//! `TbaClient`: resolve options, build the URL, dispatch the GET

use futures::future::join_all;
use reqwest::Client;
use reqwest::header::HeaderMap;
use tracing::{debug, instrument};

use super::dispatch::{RawResponse, dispatch};
use super::http_client::create_http_client_with_timeout;
use crate::config::Config;
use crate::endpoints::{Endpoint, district, event, matches, team};
use crate::error::AppError;
use crate::options::{OptionsRecord, resolve};

/// Client for the API.
///
/// Holds only immutable settings and the pooled HTTP client, so it is cheap
/// to clone and safe to share between tasks. Every call resolves its own
/// options; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct TbaClient {
    base_url: String,
    headers: HeaderMap,
    http: Client,
}

macro_rules! endpoint_methods {
    ($($(#[$doc:meta])* $fn_name:ident => $endpoint:path;)+) => {
        $(
            $(#[$doc])*
            pub async fn $fn_name(&self, options: &OptionsRecord) -> Result<RawResponse, AppError> {
                self.request(&$endpoint, options).await
            }
        )+
    };
}

impl TbaClient {
    /// Creates a client from configuration, building a pooled HTTP client
    /// with the configured timeout.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Self::with_http_client(config, http)
    }

    /// Creates a client around an existing HTTP client.
    pub fn with_http_client(config: &Config, http: Client) -> Result<Self, AppError> {
        Ok(Self {
            base_url: config.normalized_base_url().to_string(),
            headers: config.headers()?,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Resolves `overrides` against the endpoint's group defaults and builds
    /// the URL, without any network access.
    pub fn build_url(
        &self,
        endpoint: &Endpoint,
        overrides: &OptionsRecord,
    ) -> Result<String, AppError> {
        let effective = resolve(&endpoint.group.defaults(), overrides);
        endpoint.build_url(&self.base_url, &effective)
    }

    /// Requests any catalogued endpoint.
    #[instrument(skip(self, endpoint, overrides), fields(endpoint = endpoint.name))]
    pub async fn request(
        &self,
        endpoint: &Endpoint,
        overrides: &OptionsRecord,
    ) -> Result<RawResponse, AppError> {
        let url = self.build_url(endpoint, overrides)?;
        dispatch(&self.http, &url, &self.headers).await
    }

    /// Runs several requests concurrently. Results come back in input order.
    pub async fn request_many(
        &self,
        calls: &[(&Endpoint, OptionsRecord)],
    ) -> Vec<Result<RawResponse, AppError>> {
        debug!("Dispatching {} requests concurrently", calls.len());
        join_all(
            calls
                .iter()
                .map(|(endpoint, overrides)| self.request(endpoint, overrides)),
        )
        .await
    }

    endpoint_methods! {
        /// `/teams/{page_num}`
        get_teams => team::GET_TEAMS;
        /// `/team/{team_key}`
        get_team => team::GET_TEAM;
        get_team_events => team::GET_TEAM_EVENTS;
        get_team_event_awards => team::GET_TEAM_EVENT_AWARDS;
        get_team_event_matches => team::GET_TEAM_EVENT_MATCHES;
        get_team_years_participated => team::GET_TEAM_YEARS_PARTICIPATED;
        /// `/team/{team_key}/{year}/media`
        get_team_media => team::GET_TEAM_MEDIA;
        get_team_event_history => team::GET_TEAM_EVENT_HISTORY;
        get_team_award_history => team::GET_TEAM_AWARD_HISTORY;
        get_team_robot_history => team::GET_TEAM_ROBOT_HISTORY;
        get_team_district_history => team::GET_TEAM_DISTRICT_HISTORY;

        /// `/events/{year}`
        get_events => event::GET_EVENTS;
        get_event => event::GET_EVENT;
        get_event_teams => event::GET_EVENT_TEAMS;
        get_event_matches => event::GET_EVENT_MATCHES;
        get_event_stats => event::GET_EVENT_STATS;
        get_event_rankings => event::GET_EVENT_RANKINGS;
        get_event_awards => event::GET_EVENT_AWARDS;
        get_event_district_points => event::GET_EVENT_DISTRICT_POINTS;

        /// `/match/{match_key}`
        get_single_match => matches::GET_SINGLE_MATCH;

        /// `/districts/{year}`
        get_district_list => district::GET_DISTRICT_LIST;
        get_district_events => district::GET_DISTRICT_EVENTS;
        get_district_rankings => district::GET_DISTRICT_RANKINGS;
        get_district_teams => district::GET_DISTRICT_TEAMS;
    }
}
