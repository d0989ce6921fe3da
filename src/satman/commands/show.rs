use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Roster;

pub fn run(roster: &Roster, name: &str) -> Result<CmdResult> {
    let candidate = roster.get(name)?.clone();
    Ok(CmdResult::default().with_listed(vec![candidate]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewCandidate;

    #[test]
    fn shows_exact_match_only() {
        let mut roster = Roster::default();
        roster
            .insert(NewCandidate::new("Alice", "123 Oak St", "Boston", "USA", "02101", 1350))
            .unwrap();

        let result = run(&roster, "Alice").unwrap();
        assert_eq!(result.listed[0].city, "Boston");

        let err = run(&roster, "ali").unwrap_err();
        assert_eq!(err.suggestions(), ["Alice"]);
    }
}
