//! Event resources: season event lists and per-event teams, matches, results

use super::{Endpoint, Group};
use crate::constants::defaults;
use crate::options::OptionsRecord;

/// Fallback options for event requests.
pub fn defaults() -> OptionsRecord {
    OptionsRecord::new()
        .with("year", defaults::YEAR)
        .with("event_key", defaults::EVENT_KEY)
}

/// Every event held in a season.
pub const GET_EVENTS: Endpoint = Endpoint::new(Group::Event, "getEvents", "/events/{year}");

/// A single event, keyed `yyyy[EVENT_CODE]`.
pub const GET_EVENT: Endpoint = Endpoint::new(Group::Event, "getEvent", "/event/{event_key}");

pub const GET_EVENT_TEAMS: Endpoint =
    Endpoint::new(Group::Event, "getEventTeams", "/event/{event_key}/teams");

pub const GET_EVENT_MATCHES: Endpoint =
    Endpoint::new(Group::Event, "getEventMatches", "/event/{event_key}/matches");

// Path segment is `status`, not `stats`.
pub const GET_EVENT_STATS: Endpoint =
    Endpoint::new(Group::Event, "getEventStats", "/event/{event_key}/status");

pub const GET_EVENT_RANKINGS: Endpoint =
    Endpoint::new(Group::Event, "getEventRankings", "/event/{event_key}/rankings");

pub const GET_EVENT_AWARDS: Endpoint =
    Endpoint::new(Group::Event, "getEventAwards", "/event/{event_key}/awards");

/// District points earned by each team at a district event.
pub const GET_EVENT_DISTRICT_POINTS: Endpoint = Endpoint::new(
    Group::Event,
    "getEventDistrictPoints",
    "/event/{event_key}/district_points",
);

pub const ENDPOINTS: &[Endpoint] = &[
    GET_EVENTS,
    GET_EVENT,
    GET_EVENT_TEAMS,
    GET_EVENT_MATCHES,
    GET_EVENT_STATS,
    GET_EVENT_RANKINGS,
    GET_EVENT_AWARDS,
    GET_EVENT_DISTRICT_POINTS,
];
