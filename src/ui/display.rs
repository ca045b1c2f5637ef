use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::model::Match;
use crate::status::StatusCategory;

pub fn bulleted(parts: &[String]) -> String {
    parts.join(" • ")
}

pub fn score_line(m: &Match) -> String {
    let home = m.home_team.display_name();
    let away = m.away_team.display_name();
    match (m.score.home, m.score.away) {
        (Some(h), Some(a)) => format!("{home} {h} - {a} {away}"),
        _ => format!("{home} vs {away}"),
    }
}

/// `HH:MM` on the same local day as `now`, `Mon DD HH:MM` otherwise.
pub fn kickoff_label<Tz>(m: &Match, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(utc) = m.utc_date else {
        return "TBD".to_string();
    };
    let local = utc.with_timezone(&now.timezone());
    if local.date_naive() == now.date_naive() {
        local.format("%H:%M").to_string()
    } else {
        local.format("%b %d %H:%M").to_string()
    }
}

pub fn status_badge(m: &Match) -> String {
    let label = m.label();
    match (m.category(), m.minute) {
        (StatusCategory::Live, Some(minute)) => format!("{label} {minute}'"),
        _ => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Competition, Score, Team};
    use chrono::Utc;

    fn sample(status: &str) -> Match {
        Match {
            id: 1,
            status: status.to_string(),
            utc_date: Some(Utc.with_ymd_and_hms(2024, 5, 1, 19, 30, 0).unwrap()),
            home_team: Team {
                name: "Arsenal FC".to_string(),
                short_name: Some("Arsenal".to_string()),
                ..Default::default()
            },
            away_team: Team {
                name: "Chelsea FC".to_string(),
                ..Default::default()
            },
            competition: Some(Competition {
                name: "Premier League".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn score_line_falls_back_to_versus() {
        let mut m = sample("TIMED");
        assert_eq!(score_line(&m), "Arsenal vs Chelsea FC");
        m.score = Score {
            home: Some(3),
            away: Some(0),
        };
        assert_eq!(score_line(&m), "Arsenal 3 - 0 Chelsea FC");
    }

    #[test]
    fn kickoff_label_shortens_same_day() {
        let m = sample("TIMED");
        let same_day = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        assert_eq!(kickoff_label(&m, &same_day), "19:30");
        let next_day = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();
        assert_eq!(kickoff_label(&m, &next_day), "May 01 19:30");

        let undated = Match {
            utc_date: None,
            ..sample("TIMED")
        };
        assert_eq!(kickoff_label(&undated, &next_day), "TBD");
    }

    #[test]
    fn status_badge_adds_minute_only_when_live() {
        let mut live = sample("IN_PLAY");
        live.minute = Some(67);
        assert_eq!(status_badge(&live), "LIVE 67'");

        let mut done = sample("FINISHED");
        done.minute = Some(90);
        assert_eq!(status_badge(&done), "FT");

        assert_eq!(status_badge(&sample("Abandoned")), "Abandoned");
    }
}
