//! Team resources: team listings, per-team events, awards, media and history

use super::{Endpoint, Group};
use crate::constants::defaults;
use crate::options::OptionsRecord;

/// Fallback options for team requests.
pub fn defaults() -> OptionsRecord {
    OptionsRecord::new()
        .with("page_num", defaults::PAGE_NUM)
        .with("team_key", defaults::TEAM_KEY)
        .with("event_key", defaults::EVENT_KEY)
        .with("year", defaults::YEAR)
}

/// Page of teams. Page `n` covers team numbers `500 * n` to `500 * n + 499`.
pub const GET_TEAMS: Endpoint = Endpoint::new(Group::Team, "getTeams", "/teams/{page_num}");

/// A single team, keyed `frcNNNN`.
pub const GET_TEAM: Endpoint = Endpoint::new(Group::Team, "getTeam", "/team/{team_key}");

pub const GET_TEAM_EVENTS: Endpoint =
    Endpoint::new(Group::Team, "getTeamEvents", "/team/{team_key}/events");

/// Awards a team won at one event.
pub const GET_TEAM_EVENT_AWARDS: Endpoint = Endpoint::new(
    Group::Team,
    "getTeamEventAwards",
    "/team/{team_key}/event/{event_key}/awards",
);

/// Matches a team played at one event.
pub const GET_TEAM_EVENT_MATCHES: Endpoint = Endpoint::new(
    Group::Team,
    "getTeamEventMatches",
    "/team/{team_key}/event/{event_key}/matches",
);

pub const GET_TEAM_YEARS_PARTICIPATED: Endpoint = Endpoint::new(
    Group::Team,
    "getTeamYearsParticipated",
    "/team/{team_key}/years_participated",
);

/// Media (videos, photos, channels) recorded for a team in one year.
pub const GET_TEAM_MEDIA: Endpoint =
    Endpoint::new(Group::Team, "getTeamMedia", "/team/{team_key}/{year}/media");

pub const GET_TEAM_EVENT_HISTORY: Endpoint = Endpoint::new(
    Group::Team,
    "getTeamEventHistory",
    "/team/{team_key}/history/events",
);

pub const GET_TEAM_AWARD_HISTORY: Endpoint = Endpoint::new(
    Group::Team,
    "getTeamAwardHistory",
    "/team/{team_key}/history/awards",
);

pub const GET_TEAM_ROBOT_HISTORY: Endpoint = Endpoint::new(
    Group::Team,
    "getTeamRobotHistory",
    "/team/{team_key}/history/robots",
);

pub const GET_TEAM_DISTRICT_HISTORY: Endpoint = Endpoint::new(
    Group::Team,
    "getTeamDistrictHistory",
    "/team/{team_key}/history/districts",
);

pub const ENDPOINTS: &[Endpoint] = &[
    GET_TEAMS,
    GET_TEAM,
    GET_TEAM_EVENTS,
    GET_TEAM_EVENT_AWARDS,
    GET_TEAM_EVENT_MATCHES,
    GET_TEAM_YEARS_PARTICIPATED,
    GET_TEAM_MEDIA,
    GET_TEAM_EVENT_HISTORY,
    GET_TEAM_AWARD_HISTORY,
    GET_TEAM_ROBOT_HISTORY,
    GET_TEAM_DISTRICT_HISTORY,
];
