use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FORM_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_goals(scored: u16, conceded: u16) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => MatchOutcome::Win,
            Ordering::Equal => MatchOutcome::Draw,
            Ordering::Less => MatchOutcome::Loss,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            MatchOutcome::Win => 'W',
            MatchOutcome::Draw => 'D',
            MatchOutcome::Loss => 'L',
        }
    }
}

/// Outcomes collected in the order matches were processed
#[derive(Debug, Clone, Default)]
pub struct FormLog {
    outcomes: Vec<MatchOutcome>,
}

impl FormLog {
    pub fn new() -> Self {
        FormLog::default()
    }

    pub fn push(&mut self, outcome: MatchOutcome) {
        self.outcomes.push(outcome);
    }

    /// Latest `FORM_LENGTH` outcomes, most recent first
    pub fn recent(&self) -> Vec<MatchOutcome> {
        self.outcomes.iter().rev().take(FORM_LENGTH).copied().collect()
    }
}
