//! Match resources

use super::{Endpoint, Group};
use crate::constants::defaults;
use crate::options::OptionsRecord;

/// Fallback options for match requests.
pub fn defaults() -> OptionsRecord {
    OptionsRecord::new().with("match_key", defaults::MATCH_KEY)
}

/// A single match, keyed `<event_key>_<comp_level><set>m<match>`.
pub const GET_SINGLE_MATCH: Endpoint =
    Endpoint::new(Group::Match, "getSingleMatch", "/match/{match_key}");

pub const ENDPOINTS: &[Endpoint] = &[GET_SINGLE_MATCH];
