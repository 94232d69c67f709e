//! Client routes accepted by `open`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScoutError};
use crate::PlayerUuid;

/// A screen of the client, addressed by path.
///
/// # Examples
///
/// ```rust
/// use football_scout::cli::route::Route;
/// use football_scout::PlayerUuid;
///
/// let route: Route = "/player/abc".parse().unwrap();
/// assert_eq!(route, Route::Player(PlayerUuid::new("abc")));
/// assert_eq!(route.to_string(), "/player/abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: search landing page.
    Home,
    /// `/players`: player list.
    Players,
    /// `/player/:uuid`: player profile.
    Player(PlayerUuid),
    /// `/about`: static page.
    About,
}

impl FromStr for Route {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ScoutError::InvalidRoute {
            route: s.to_string(),
        };

        let trimmed = s.trim();
        let path = trimmed.strip_prefix('/').ok_or_else(invalid)?;
        let segments: Vec<&str> = path.split('/').filter(|seg| !seg.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["players"] => Ok(Route::Players),
            ["player", uuid] => Ok(Route::Player(PlayerUuid::new(*uuid))),
            ["about"] => Ok(Route::About),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Players => write!(f, "/players"),
            Route::Player(uuid) => write!(f, "/player/{uuid}"),
            Route::About => write!(f, "/about"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("/players".parse::<Route>().unwrap(), Route::Players);
        assert_eq!("/players/".parse::<Route>().unwrap(), Route::Players);
        assert_eq!("/about".parse::<Route>().unwrap(), Route::About);
        assert_eq!(
            " /player/p-0042 ".parse::<Route>().unwrap(),
            Route::Player(PlayerUuid::new("p-0042"))
        );
    }

    #[test]
    fn test_parse_invalid_routes() {
        for raw in ["", "players", "/player", "/player/", "/player/a/b", "/teams"] {
            match raw.parse::<Route>() {
                Err(ScoutError::InvalidRoute { route }) => assert_eq!(route, raw),
                other => panic!("Expected InvalidRoute for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["/", "/players", "/player/abc", "/about"] {
            assert_eq!(raw.parse::<Route>().unwrap().to_string(), raw);
        }
    }
}
