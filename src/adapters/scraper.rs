use crate::domain::model::{PlayerId, TeamId};
use crate::domain::ports::SquadSource;
use crate::utils::error::{Result, TransferError};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::time::Duration;

/// Pulls player ids out of a team page.
///
/// The squad is the first `<table>` on the page. Its first row is a header;
/// every later row links to a player page whose URL ends in the player id.
#[derive(Debug, Clone)]
pub struct SquadPageParser {
    table: Regex,
    row: Regex,
    href: Regex,
    trailing_id: Regex,
}

impl SquadPageParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: compile(r"(?is)<table\b[^>]*>(.*?)</table>")?,
            row: compile(r"(?is)<tr\b[^>]*>(.*?)</tr>")?,
            href: compile(r#"(?is)<a\b[^>]*?\bhref\s*=\s*["']([^"']*)["']"#)?,
            trailing_id: compile(r"(\d+)/?(?:[?#].*)?$")?,
        })
    }

    pub fn parse(&self, html: &str) -> Result<Vec<PlayerId>> {
        let table = self
            .table
            .captures(html)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| TransferError::FetchFailed {
                message: "no squad table on page".to_string(),
            })?;

        let mut ids = Vec::new();
        for row in self.row.captures_iter(table.as_str()).skip(1) {
            let Some(href) = self
                .href
                .captures(&row[1])
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
            else {
                continue;
            };

            let id = self
                .trailing_id
                .captures(href)
                .and_then(|caps| caps[1].parse::<PlayerId>().ok())
                .ok_or_else(|| TransferError::FetchFailed {
                    message: format!("player link '{}' has no id", href),
                })?;
            ids.push(id);
        }

        if ids.is_empty() {
            return Err(TransferError::FetchFailed {
                message: "squad table has no player rows".to_string(),
            });
        }
        Ok(ids)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| TransferError::ConfigError {
        field: "scraper.pattern".to_string(),
        message: e.to_string(),
    })
}

/// Reads a team's squad from `{base_url}/entry/{team_id}/`.
pub struct HttpSquadScraper {
    client: Client,
    base_url: String,
    parser: SquadPageParser,
}

impl HttpSquadScraper {
    pub fn new(base_url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            parser: SquadPageParser::new()?,
        })
    }

    fn team_url(&self, team_id: &TeamId) -> String {
        format!("{}/entry/{}/", self.base_url.trim_end_matches('/'), team_id)
    }
}

#[async_trait]
impl SquadSource for HttpSquadScraper {
    async fn fetch_squad_ids(&self, team_id: &TeamId) -> Result<Vec<PlayerId>> {
        let url = self.team_url(team_id);
        tracing::debug!("Fetching squad page: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Squad page status: {}", response.status());

        if !response.status().is_success() {
            return Err(TransferError::FetchFailed {
                message: format!("{} returned {}", url, response.status()),
            });
        }

        let html = response.text().await?;
        let ids = self.parser.parse(&html)?;
        tracing::info!("Scraped {} players for team {}", ids.len(), team_id);
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
<table class="squad">
  <tr><th>Player</th><th>Pos</th></tr>
  <tr><td><a href="/player/1">Raya</a></td><td>GKP</td></tr>
  <TR><TD><A class="name" HREF='https://example.com/player/302/'>Saka</A></TD></TR>
  <tr><td><a href="/player/17?tab=history">Gabriel</a></td></tr>
</table>
<table><tr><td><a href="/player/999">Other</a></td></tr></table>
</body></html>
"#;

    #[test]
    fn test_parse_skips_header_and_reads_trailing_ids() {
        let parser = SquadPageParser::new().unwrap();
        assert_eq!(parser.parse(PAGE).unwrap(), vec![1, 302, 17]);
    }

    #[test]
    fn test_parse_bare_id_href() {
        let parser = SquadPageParser::new().unwrap();
        let page = r#"<table><tr><th>h</th></tr><tr><td><a href="1">x</a></td></tr></table>"#;
        assert_eq!(parser.parse(page).unwrap(), vec![1]);
    }

    #[test]
    fn test_parse_malformed_pages() {
        let parser = SquadPageParser::new().unwrap();
        assert!(matches!(
            parser.parse("<html>maintenance</html>"),
            Err(TransferError::FetchFailed { .. })
        ));
        assert!(matches!(
            parser.parse("<table><tr><th>Player</th></tr></table>"),
            Err(TransferError::FetchFailed { .. })
        ));
        assert!(matches!(
            parser.parse(r#"<table><tr><th>h</th></tr><tr><td><a href="/player/abc">x</a></td></tr></table>"#),
            Err(TransferError::FetchFailed { .. })
        ));
    }

    #[test]
    fn test_team_url() {
        let scraper =
            HttpSquadScraper::new("https://fpl.example.com/", Duration::from_secs(5), "test")
                .unwrap();
        let id = TeamId::parse("123").unwrap();
        assert_eq!(scraper.team_url(&id), "https://fpl.example.com/entry/123/");
    }
}
