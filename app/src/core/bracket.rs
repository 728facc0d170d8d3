//! First-round pairing of approved teams.

use rand::{Rng, seq::SliceRandom};

use crate::error::{AppError, AppResult};

pub const FIRST_ROUND: &str = "Round 1";

/// Picks the label a registration plays under: its team name, falling back to
/// the registrant's full name.
pub fn team_label(team_name: Option<&str>, full_name: &str) -> String {
    match team_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => full_name.to_string(),
    }
}

/// Shuffles `teams` uniformly and pairs neighbours (0-1, 2-3, ...).
///
/// Byes are not supported: fewer than two teams or an odd count is rejected.
pub fn pair_teams<R: Rng + ?Sized>(
    mut teams: Vec<String>,
    rng: &mut R,
) -> AppResult<Vec<(String, String)>> {
    if teams.len() < 2 {
        return Err(AppError::InsufficientTeams(teams.len()));
    }
    if teams.len() % 2 != 0 {
        return Err(AppError::OddTeamCount(teams.len()));
    }

    teams.shuffle(rng);

    let mut pairs = Vec::with_capacity(teams.len() / 2);
    let mut it = teams.into_iter();
    while let (Some(home), Some(away)) = (it.next(), it.next()) {
        pairs.push((home, away));
    }
    Ok(pairs)
}
