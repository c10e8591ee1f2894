//! Test fixtures and helpers for integration testing

use podium::types::ContestResult;
use podium::RatingLedger;

/// Build a ledger with the given players already registered
pub fn ledger_with_players(names: &[&str]) -> RatingLedger {
    let mut ledger = RatingLedger::new();
    for name in names {
        ledger.add_player(name).unwrap();
    }
    ledger
}

/// Build a submission from (player, position) rows
pub fn results(rows: &[(&str, i32)]) -> Vec<ContestResult> {
    rows.iter()
        .map(|(name, position)| ContestResult::new(*name, *position))
        .collect()
}

/// Observable ledger state, for asserting that failed operations left
/// everything untouched
pub fn snapshot(ledger: &RatingLedger) -> serde_json::Value {
    serde_json::json!({
        "players": serde_json::to_value(ledger.list_players()).unwrap(),
        "contests": serde_json::to_value(ledger.list_contests()).unwrap(),
    })
}
