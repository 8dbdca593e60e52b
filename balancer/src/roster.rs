//! Roster file loading

use std::path::Path;

use shared::{PlayerSeed, RosterEntry};

use crate::error::BalancerResult;

/// Read a JSON array of roster entries
pub fn load_roster(path: impl AsRef<Path>) -> BalancerResult<Vec<RosterEntry>> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let entries: Vec<RosterEntry> = serde_json::from_str(&raw)?;
    Ok(entries)
}

/// Resolve display handles, keeping roster order
pub fn resolve_seeds(entries: &[RosterEntry]) -> Vec<PlayerSeed> {
    entries.iter().map(RosterEntry::to_seed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BalancerError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_roster_resolves_handles() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"participant_id": "101", "nickname": "Zezima", "username": "zez_discord"}},
                {{"participant_id": "102", "username": "Woox"}},
                {{"participant_id": "103", "nickname": "", "username": "Lynx Titan"}}
            ]"#
        )
        .unwrap();

        let entries = load_roster(file.path()).unwrap();
        let seeds = resolve_seeds(&entries);
        let handles: Vec<&str> = seeds.iter().map(|s| s.display_handle.as_str()).collect();
        assert_eq!(handles, vec!["Zezima", "Woox", "Lynx Titan"]);
        assert_eq!(seeds[1].id.as_str(), "102");
    }

    #[test]
    fn test_load_roster_errors() {
        assert!(matches!(
            load_roster("/definitely/not/here.json"),
            Err(BalancerError::IoError(_))
        ));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(load_roster(file.path()), Err(BalancerError::JsonError(_))));
    }
}
