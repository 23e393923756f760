pub mod routes;

use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::State;
use itertools::Itertools;
use league_core::league::{LeagueTable, MatchOutcome, TableZone, TeamId, ZoneThresholds};
use serde::Serialize;

#[derive(Serialize)]
pub struct LeagueSummary {
    pub name: String,
    pub teams: usize,
    pub fixtures: usize,
    pub played: usize,
    pub pending: usize,
    pub leader: Option<String>,
}

#[derive(Serialize)]
pub struct LeagueTableRow {
    pub position: usize,
    pub zone: TableZone,
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    pub form: String,
}

pub async fn league_get_action(State(state): State<LeagueAppData>) -> ApiResult<Json<LeagueSummary>> {
    let league = state.league.read().await;

    let played = league.played_fixtures();
    // an untouched table has no meaningful leader
    let leader = if played > 0 {
        league.standings().leader().map(|row| row.name.clone())
    } else {
        None
    };

    Ok(Json(LeagueSummary {
        name: league.name().to_string(),
        teams: league.teams().len(),
        fixtures: league.fixtures().len(),
        played,
        pending: league.fixtures().len() - played,
        leader,
    }))
}

pub async fn league_table_action(State(state): State<LeagueAppData>) -> ApiResult<Json<Vec<LeagueTableRow>>> {
    let league = state.league.read().await;

    Ok(Json(table_rows(&league.standings(), &state.zones)))
}

fn table_rows(table: &LeagueTable, zones: &ZoneThresholds) -> Vec<LeagueTableRow> {
    let total = table.rows.len();

    table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| LeagueTableRow {
            position: idx + 1,
            zone: TableZone::for_position(idx + 1, total, zones),
            team_id: row.team_id,
            team_name: row.name.clone(),
            played: row.played,
            won: row.won,
            drawn: row.drawn,
            lost: row.lost,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            goal_difference: row.goal_difference,
            points: row.points,
            form: format_form(&row.form),
        })
        .collect()
}

fn format_form(form: &[MatchOutcome]) -> String {
    form.iter().map(|outcome| outcome.symbol()).join(" ")
}
