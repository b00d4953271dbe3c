use std::path::PathBuf;
use std::time::Duration;

use turn_roulette_core_rs::{Facilitator, RosterError, RosterLoad, Status};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where roster text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    File(PathBuf),
    Url(String),
}

impl RosterSource {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            RosterSource::Url(raw.to_string())
        } else {
            RosterSource::File(PathBuf::from(raw))
        }
    }

    /// Read the roster text; every failure becomes `RosterError::Unavailable`
    pub async fn fetch(&self) -> Result<String, RosterError> {
        match self {
            RosterSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| RosterError::Unavailable(format!("{}: {}", path.display(), e))),
            RosterSource::Url(url) => fetch_url(url)
                .await
                .map_err(|e| RosterError::Unavailable(format!("{}: {}", url, e))),
        }
    }
}

async fn fetch_url(url: &str) -> Result<String, reqwest::Error> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

/// Load the roster into the facilitator, best effort
///
/// Without a source the configured lists stay as they are. On failure the
/// configured lists are kept as well; the returned status says which
/// happened.
pub async fn load_roster(facilitator: &mut Facilitator, source: Option<&RosterSource>) -> Status {
    let Some(source) = source else {
        return facilitator.status().clone();
    };

    let mut load = RosterLoad::new();
    load.on_ready(|outcome| tracing::info!("roster ready: {}", outcome.status()));

    tracing::debug!(?source, "fetching roster");
    let fetched = source.fetch().await;
    facilitator.resolve_roster_load(&mut load, fetched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_kinds() {
        assert_eq!(
            RosterSource::parse(" https://example.com/r.yml "),
            RosterSource::Url("https://example.com/r.yml".to_string())
        );
        assert_eq!(
            RosterSource::parse("team/roster.yml"),
            RosterSource::File(PathBuf::from("team/roster.yml"))
        );
    }
}
