use crate::league::{FixtureId, TeamId};
use std::fmt;

/// Input rejected by a schedule generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InsufficientTeams { found: usize },
    DuplicateTeam(TeamId),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InsufficientTeams { found } => {
                write!(f, "at least 2 teams required, got {}", found)
            }
            ValidationError::DuplicateTeam(id) => {
                write!(f, "team {} is listed more than once", id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    EmptyName,
    DuplicateTeamName(String),
    TeamNotFound(TeamId),
    FixtureNotFound(FixtureId),
    DuplicateTeamId(TeamId),
    DuplicateFixtureId(FixtureId),
    IdsExhausted,
    Validation(ValidationError),
}

impl fmt::Display for LeagueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueError::EmptyName => write!(f, "name must not be empty"),
            LeagueError::DuplicateTeamName(name) => write!(f, "team '{}' already exists", name),
            LeagueError::TeamNotFound(id) => write!(f, "team {} not found", id),
            LeagueError::FixtureNotFound(id) => write!(f, "fixture {} not found", id),
            LeagueError::DuplicateTeamId(id) => write!(f, "team id {} is used more than once", id),
            LeagueError::DuplicateFixtureId(id) => write!(f, "fixture id {} is used more than once", id),
            LeagueError::IdsExhausted => write!(f, "no free ids left"),
            LeagueError::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LeagueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeagueError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for LeagueError {
    fn from(err: ValidationError) -> Self {
        LeagueError::Validation(err)
    }
}

pub type LeagueResult<T> = Result<T, LeagueError>;
