use serde::{Deserialize, Serialize};

/// Visual tier of a table position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableZone {
    Leader,
    Qualification,
    Relegation,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneThresholds {
    /// Positions up to and including this one qualify (the leader included)
    pub qualification_places: usize,
    /// Number of positions at the bottom that are relegated
    pub relegation_places: usize,
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        ZoneThresholds {
            qualification_places: 4,
            relegation_places: 3,
        }
    }
}

impl TableZone {
    /// Zone for a 1-based `position` in a table of `total` teams.
    /// Higher tiers win when ranges overlap in small leagues.
    pub fn for_position(position: usize, total: usize, thresholds: &ZoneThresholds) -> Self {
        if position == 0 || position > total {
            return TableZone::None;
        }

        if position == 1 {
            return TableZone::Leader;
        }

        if position <= thresholds.qualification_places {
            return TableZone::Qualification;
        }

        if position + thresholds.relegation_places > total {
            return TableZone::Relegation;
        }

        TableZone::None
    }
}
