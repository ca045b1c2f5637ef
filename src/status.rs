use ratatui::style::Color;

/// Upper-cased upstream codes and the label shown for each.
const STATUS_LABELS: &[(&str, &str)] = &[
    ("LIVE", "LIVE"),
    ("IN_PLAY", "LIVE"),
    ("HT", "HT"),
    ("FT", "FT"),
    ("FINISHED", "FT"),
    ("SUSPENDED", "SUSPENDED"),
    ("POSTPONED", "POSTPONED"),
    ("CANCELLED", "CANCELLED"),
    ("SCHEDULED", "Not started"),
    ("TIMED", "Not started"),
    ("AET", "AET"),
    ("PEN", "PEN"),
    ("1H", "1st Half"),
    ("2H", "2nd Half"),
    ("ET", "Extra Time"),
];

/// Maps an upstream match status code to its display label.
///
/// Lookup is case-insensitive, but a code that is not in the table comes
/// back exactly as it was passed in: `"Abandoned"` stays `"Abandoned"`, it
/// is not upper-cased.
pub fn normalize(status: &str) -> String {
    let upper = status.to_uppercase();
    STATUS_LABELS
        .iter()
        .find(|(code, _)| *code == upper)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| status.to_string())
}

/// Returns true when `status` hits the table instead of the pass-through.
pub fn is_known(status: &str) -> bool {
    let upper = status.to_uppercase();
    STATUS_LABELS.iter().any(|(code, _)| *code == upper)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusCategory {
    Live,
    Upcoming,
    Finished,
    Interrupted,
    Other,
}

impl StatusCategory {
    /// Classifies a display label, i.e. the output of [`normalize`].
    pub fn of(label: &str) -> Self {
        match label {
            "LIVE" | "HT" | "1st Half" | "2nd Half" | "Extra Time" => StatusCategory::Live,
            "FT" | "AET" | "PEN" => StatusCategory::Finished,
            "Not started" => StatusCategory::Upcoming,
            "SUSPENDED" | "POSTPONED" | "CANCELLED" => StatusCategory::Interrupted,
            _ => StatusCategory::Other,
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::of(&normalize(code))
    }

    pub fn rank(self) -> u8 {
        match self {
            StatusCategory::Live => 0,
            StatusCategory::Upcoming => 1,
            StatusCategory::Finished => 2,
            StatusCategory::Interrupted => 3,
            StatusCategory::Other => 4,
        }
    }

    pub fn color(self) -> Color {
        match self {
            StatusCategory::Live => Color::Green,
            StatusCategory::Upcoming => Color::Cyan,
            StatusCategory::Finished => Color::Gray,
            StatusCategory::Interrupted => Color::Red,
            StatusCategory::Other => Color::Yellow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_maps_known_codes_case_insensitively() {
        assert_eq!(normalize("live"), "LIVE");
        assert_eq!(normalize("IN_PLAY"), "LIVE");
        assert_eq!(normalize("Ht"), "HT");
        assert_eq!(normalize("FINISHED"), "FT");
        assert_eq!(normalize("ft"), "FT");
        assert_eq!(normalize("Suspended"), "SUSPENDED");
        assert_eq!(normalize("postponed"), "POSTPONED");
        assert_eq!(normalize("CANCELLED"), "CANCELLED");
        assert_eq!(normalize("SCHEDULED"), "Not started");
        assert_eq!(normalize("timed"), "Not started");
        assert_eq!(normalize("aet"), "AET");
        assert_eq!(normalize("Pen"), "PEN");
        assert_eq!(normalize("1h"), "1st Half");
        assert_eq!(normalize("2H"), "2nd Half");
        assert_eq!(normalize("et"), "Extra Time");
    }

    #[test]
    fn normalize_returns_unknown_codes_in_original_casing() {
        // Unknown codes must not be upper-cased on the way out.
        assert_eq!(normalize("Abandoned"), "Abandoned");
        assert_eq!(normalize("weird-code"), "weird-code");
        assert_eq!(normalize("awarded"), "awarded");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" live "), " live ");
    }

    #[test]
    fn normalize_is_stable_when_reapplied() {
        let inputs = [
            "LIVE", "in_play", "HT", "FT", "finished", "SUSPENDED", "POSTPONED", "CANCELLED",
            "scheduled", "TIMED", "AET", "PEN", "1H", "2h", "ET", "Not started", "1st Half",
            "2nd Half", "Extra Time", "Abandoned", "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn is_known_tracks_the_table() {
        assert!(is_known("in_play"));
        assert!(is_known("2h"));
        assert!(!is_known("Abandoned"));
        assert!(!is_known(""));
    }

    #[test]
    fn category_groups_labels() {
        assert_eq!(StatusCategory::from_code("IN_PLAY"), StatusCategory::Live);
        assert_eq!(StatusCategory::from_code("ht"), StatusCategory::Live);
        assert_eq!(StatusCategory::from_code("ET"), StatusCategory::Live);
        assert_eq!(StatusCategory::from_code("PEN"), StatusCategory::Finished);
        assert_eq!(StatusCategory::from_code("FINISHED"), StatusCategory::Finished);
        assert_eq!(StatusCategory::from_code("TIMED"), StatusCategory::Upcoming);
        assert_eq!(StatusCategory::from_code("POSTPONED"), StatusCategory::Interrupted);
        assert_eq!(StatusCategory::from_code("Abandoned"), StatusCategory::Other);
    }

    #[test]
    fn category_rank_puts_live_first() {
        assert!(StatusCategory::Live.rank() < StatusCategory::Upcoming.rank());
        assert!(StatusCategory::Upcoming.rank() < StatusCategory::Finished.rank());
        assert!(StatusCategory::Finished.rank() < StatusCategory::Other.rank());
    }
}
