use serde::{Deserialize, Serialize};

pub type TeamId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: TeamId, name: String) -> Self {
        Team { id, name }
    }

    /// Case-insensitive name comparison used for league-wide uniqueness
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_name_ignores_case() {
        let team = Team::new(1, String::from("Garuda FC"));

        assert!(team.has_name("garuda fc"));
        assert!(team.has_name("GARUDA FC"));
        assert!(!team.has_name("Garuda"));
    }
}
