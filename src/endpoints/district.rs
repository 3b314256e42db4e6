//! District resources: district lists, events, rankings and teams per season

use super::{Endpoint, Group};
use crate::constants::defaults;
use crate::options::OptionsRecord;

/// Fallback options for district requests.
pub fn defaults() -> OptionsRecord {
    OptionsRecord::new()
        .with("year", defaults::YEAR)
        .with("district_short", defaults::DISTRICT_SHORT)
}

/// Districts active in a season.
pub const GET_DISTRICT_LIST: Endpoint =
    Endpoint::new(Group::District, "getDistrictList", "/districts/{year}");

pub const GET_DISTRICT_EVENTS: Endpoint = Endpoint::new(
    Group::District,
    "getDistrictEvents",
    "/district/{district_short}/{year}/events",
);

pub const GET_DISTRICT_RANKINGS: Endpoint = Endpoint::new(
    Group::District,
    "getDistrictRankings",
    "/district/{district_short}/{year}/rankings",
);

pub const GET_DISTRICT_TEAMS: Endpoint = Endpoint::new(
    Group::District,
    "getDistrictTeams",
    "/district/{district_short}/{year}/teams",
);

pub const ENDPOINTS: &[Endpoint] = &[
    GET_DISTRICT_LIST,
    GET_DISTRICT_EVENTS,
    GET_DISTRICT_RANKINGS,
    GET_DISTRICT_TEAMS,
];
