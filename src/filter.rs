use std::collections::BTreeSet;

use crate::model::Match;
use crate::status::StatusCategory;

pub const TAB_CYCLE: [Tab; 4] = [Tab::All, Tab::Live, Tab::Finished, Tab::Upcoming];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Live,
    Finished,
    Upcoming,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Live => "Live",
            Tab::Finished => "Finished",
            Tab::Upcoming => "Upcoming",
        }
    }

    pub fn includes(self, category: StatusCategory) -> bool {
        match self {
            Tab::All => true,
            Tab::Live => category == StatusCategory::Live,
            Tab::Finished => category == StatusCategory::Finished,
            Tab::Upcoming => category == StatusCategory::Upcoming,
        }
    }

    pub fn next(self) -> Tab {
        rotate(self, 1)
    }

    pub fn prev(self) -> Tab {
        rotate(self, TAB_CYCLE.len() - 1)
    }
}

fn rotate(current: Tab, step: usize) -> Tab {
    let idx = TAB_CYCLE.iter().position(|t| *t == current).unwrap_or(0);
    TAB_CYCLE[(idx + step) % TAB_CYCLE.len()]
}

#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub tab: Tab,
    pub competition: Option<String>,
    pub query: String,
}

impl MatchFilter {
    pub fn matches(&self, m: &Match) -> bool {
        if !self.tab.includes(m.category()) {
            return false;
        }
        if let Some(wanted) = self.competition.as_deref()
            && !competition_matches(m, wanted)
        {
            return false;
        }
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&m.home_team, &m.away_team].iter().any(|team| {
            team.name.to_lowercase().contains(&needle)
                || team
                    .short_name
                    .as_deref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
        })
    }

    /// Filters and orders: live first, then by kickoff (undated last), then by id.
    pub fn apply(&self, all: &[Match]) -> Vec<Match> {
        let mut out: Vec<Match> = all.iter().filter(|m| self.matches(m)).cloned().collect();
        sort_matches(&mut out);
        out
    }

    /// Moves to the next competition in `available`, wrapping back to "all".
    pub fn cycle_competition(&mut self, available: &[String]) {
        self.competition = match self.competition.as_deref() {
            None => available.first().cloned(),
            Some(current) => {
                let idx = available
                    .iter()
                    .position(|c| c.eq_ignore_ascii_case(current));
                match idx {
                    Some(i) if i + 1 < available.len() => Some(available[i + 1].clone()),
                    _ => None,
                }
            }
        };
    }
}

fn competition_matches(m: &Match, wanted: &str) -> bool {
    m.competition.as_ref().is_some_and(|c| {
        c.name.eq_ignore_ascii_case(wanted)
            || c.code
                .as_deref()
                .is_some_and(|code| code.eq_ignore_ascii_case(wanted))
    })
}

pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by(|a, b| {
        a.category()
            .rank()
            .cmp(&b.category().rank())
            .then_with(|| a.utc_date.is_none().cmp(&b.utc_date.is_none()))
            .then_with(|| a.utc_date.cmp(&b.utc_date))
            .then_with(|| a.id.cmp(&b.id))
    });
}

pub fn competitions(matches: &[Match]) -> Vec<String> {
    matches
        .iter()
        .filter_map(|m| m.competition_name())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Per-tab counts in [`TAB_CYCLE`] order, ignoring the tab of `filter`.
pub fn tab_counts(filter: &MatchFilter, matches: &[Match]) -> Vec<(Tab, usize)> {
    TAB_CYCLE
        .iter()
        .map(|tab| {
            let probe = MatchFilter {
                tab: *tab,
                ..filter.clone()
            };
            (*tab, matches.iter().filter(|m| probe.matches(m)).count())
        })
        .collect()
}
