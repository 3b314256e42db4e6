//! Endpoint catalogue and URL building
//!
//! Every operation the API offers is described by an [`Endpoint`]: its group,
//! its operation name and a path template such as
//! `/district/{district_short}/{year}/rankings`. Building a URL substitutes
//! each `{key}` with the matching effective option value, verbatim.

pub mod district;
pub mod event;
pub mod matches;
pub mod team;

use std::fmt;
use tracing::debug;

use crate::error::AppError;
use crate::options::OptionsRecord;

/// The four families of resources exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Team,
    Event,
    Match,
    District,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::Team, Group::Event, Group::Match, Group::District];

    /// Fresh copy of the group's fallback options.
    pub fn defaults(self) -> OptionsRecord {
        match self {
            Group::Team => team::defaults(),
            Group::Event => event::defaults(),
            Group::Match => matches::defaults(),
            Group::District => district::defaults(),
        }
    }

    pub fn endpoints(self) -> &'static [Endpoint] {
        match self {
            Group::Team => team::ENDPOINTS,
            Group::Event => event::ENDPOINTS,
            Group::Match => matches::ENDPOINTS,
            Group::District => district::ENDPOINTS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Group::Team => "team",
            Group::Event => "event",
            Group::Match => "match",
            Group::District => "district",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A GET resource of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub group: Group,
    /// Operation name, e.g. `getTeamEvents`
    pub name: &'static str,
    /// Path appended to the base URL, with `{key}` placeholders
    pub template: &'static str,
}

impl Endpoint {
    pub const fn new(group: Group, name: &'static str, template: &'static str) -> Self {
        Self {
            group,
            name,
            template,
        }
    }

    /// HTTP method used for the endpoint. The API is read-only.
    pub fn method(&self) -> reqwest::Method {
        reqwest::Method::GET
    }

    /// Placeholder keys in the order they appear in the template.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        let mut rest = self.template;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    keys.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        keys
    }

    /// `getTeamEvents` -> `get_team_events`
    pub fn snake_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 4);
        for c in self.name.chars() {
            if c.is_ascii_uppercase() {
                out.push('_');
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Builds the full resource URL from an effective options record.
    ///
    /// Values are substituted without any encoding. A placeholder whose key
    /// is absent from `effective` is rejected instead of producing a bogus
    /// path segment.
    ///
    /// ```
    /// use tba_wrapper::endpoints::district::GET_DISTRICT_RANKINGS;
    /// use tba_wrapper::options::OptionsRecord;
    ///
    /// let opts = OptionsRecord::new().with("district_short", "ne").with("year", 2014);
    /// let url = GET_DISTRICT_RANKINGS.build_url("https://api.example.com", &opts).unwrap();
    /// assert_eq!(url, "https://api.example.com/district/ne/2014/rankings");
    /// ```
    pub fn build_url(&self, base_url: &str, effective: &OptionsRecord) -> Result<String, AppError> {
        let mut url = String::with_capacity(base_url.len() + self.template.len() + 16);
        url.push_str(base_url);

        let mut rest = self.template;
        while let Some(start) = rest.find('{') {
            url.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                // Unterminated brace is literal text
                url.push_str(&rest[start..]);
                rest = "";
                break;
            };
            let key = &after[..end];
            let value = effective
                .get(key)
                .ok_or_else(|| AppError::missing_option(self.name, key))?;
            url.push_str(&value.to_string());
            rest = &after[end + 1..];
        }
        url.push_str(rest);

        debug!("Built URL for {}: {}", self.name, url);
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} GET {}", self.name, self.template)
    }
}

/// All catalogued endpoints, grouped in team, event, match, district order.
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    Group::ALL.into_iter().flat_map(|group| group.endpoints().iter())
}

/// Earlier operation names that are still accepted by [`find`].
const LEGACY_NAMES: &[(&str, &str)] = &[
    ("getTeamDistricHistory", "getTeamDistrictHistory"),
    ("getEventDistricPoints", "getEventDistrictPoints"),
];

/// Looks an endpoint up by its camelCase or snake_case operation name.
pub fn find(name: &str) -> Result<&'static Endpoint, AppError> {
    let lookup = LEGACY_NAMES
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map_or(name, |(_, current)| *current);

    all()
        .find(|endpoint| endpoint.name == lookup || endpoint.snake_name() == lookup)
        .ok_or_else(|| AppError::unknown_endpoint(name))
}
