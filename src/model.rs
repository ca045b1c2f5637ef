use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::status::{self, StatusCategory};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
}

impl Team {
    pub fn display_name(&self) -> &str {
        match self.short_name.as_deref() {
            Some(short) if !short.trim().is_empty() => short,
            _ => &self.name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Score {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScore {
    #[serde(default)]
    full_time: Score,
}

fn score_from_raw<'de, D>(deserializer: D) -> Result<Score, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScore>::deserialize(deserializer)?;
    Ok(raw.map(|r| r.full_time).unwrap_or_default())
}

/// Some feeds send the minute as a number, others as `"67"` or `"45+2"`.
fn lenient_minute<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Minute {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<Minute>::deserialize(deserializer)? {
        Some(Minute::Number(n)) => Some(n),
        Some(Minute::Text(text)) => text
            .split('+')
            .next()
            .and_then(|base| base.trim().trim_end_matches('\'').parse().ok()),
        None => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u64,
    #[serde(default)]
    pub utc_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_minute")]
    pub minute: Option<u32>,
    #[serde(default)]
    pub competition: Option<Competition>,
    #[serde(default)]
    pub home_team: Team,
    #[serde(default)]
    pub away_team: Team,
    #[serde(default, deserialize_with = "score_from_raw")]
    pub score: Score,
}

impl Match {
    pub fn label(&self) -> String {
        status::normalize(&self.status)
    }

    pub fn category(&self) -> StatusCategory {
        StatusCategory::from_code(&self.status)
    }

    pub fn competition_name(&self) -> Option<&str> {
        self.competition
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchList {
    #[serde(default)]
    pub matches: Vec<Match>,
}

/// Integer and uuid primary keys both end up as text.
fn id_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Key {
        Number(i64),
        Text(String),
    }

    Ok(match Key::deserialize(deserializer)? {
        Key::Number(n) => n.to_string(),
        Key::Text(text) => text,
    })
}

/// Row of the Supabase `highlights` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Highlight {
    #[serde(deserialize_with = "id_as_text")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "filters": {"dateFrom": "2024-05-01"},
        "matches": [
            {
                "id": 436001,
                "utcDate": "2024-05-01T19:00:00Z",
                "status": "IN_PLAY",
                "minute": "45+2",
                "competition": {"id": 2021, "name": "Premier League", "code": "PL"},
                "homeTeam": {"id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "crest": "x.png"},
                "awayTeam": {"id": 61, "name": "Chelsea FC", "shortName": "Chelsea"},
                "score": {"winner": null, "fullTime": {"home": 2, "away": 1}, "halfTime": {"home": 1, "away": 1}}
            },
            {
                "id": 436002,
                "status": "TIMED",
                "homeTeam": {"name": "Everton FC"},
                "awayTeam": {"name": "Fulham FC"},
                "score": {"fullTime": {"home": null, "away": null}}
            }
        ]
    }"#;

    #[test]
    fn match_list_decodes_upstream_payload() {
        let list: MatchList = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(list.matches.len(), 2);

        let live = &list.matches[0];
        assert_eq!(live.id, 436001);
        assert_eq!(live.minute, Some(45));
        assert_eq!(live.score, Score { home: Some(2), away: Some(1) });
        assert_eq!(live.home_team.display_name(), "Arsenal");
        assert_eq!(live.competition_name(), Some("Premier League"));
        assert_eq!(live.label(), "LIVE");
        assert_eq!(live.category(), StatusCategory::Live);

        let upcoming = &list.matches[1];
        assert!(upcoming.utc_date.is_none());
        assert_eq!(upcoming.score, Score::default());
        assert_eq!(upcoming.home_team.display_name(), "Everton FC");
        assert_eq!(upcoming.label(), "Not started");
    }

    #[test]
    fn match_list_defaults_when_matches_missing() {
        let list: MatchList = serde_json::from_str("{}").unwrap();
        assert!(list.matches.is_empty());
    }

    #[test]
    fn numeric_minute_and_missing_score_decode() {
        let m: Match =
            serde_json::from_str(r#"{"id": 7, "status": "2H", "minute": 67}"#).unwrap();
        assert_eq!(m.minute, Some(67));
        assert_eq!(m.score, Score::default());
        assert_eq!(m.label(), "2nd Half");
    }

    #[test]
    fn highlight_row_decodes() {
        let rows: Vec<Highlight> = serde_json::from_str(
            r#"[{"id": 3, "title": "Late winner", "video_url": "https://v/3", "created_at": "2024-05-02T08:00:00Z", "extra": 1}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "3");
        assert_eq!(rows[0].title, "Late winner");
        assert!(rows[0].competition.is_none());
        assert!(rows[0].created_at.is_some());
    }

    #[test]
    fn highlight_uuid_key_decodes() {
        let rows: Vec<Highlight> = serde_json::from_str(
            r#"[{"id": "9b1d7c2e-4f6a-4c1e-9a55-0d3c2b1a0f9e", "title": "Derby recap", "video_url": "https://v/d"}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].id, "9b1d7c2e-4f6a-4c1e-9a55-0d3c2b1a0f9e");
        assert!(rows[0].created_at.is_none());
    }
}
