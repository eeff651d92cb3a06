//! Roster view-model backing the team table.
//!
//! Owns the last-loaded team list and the visible projection derived
//! from the active search term and sort config. Searching always
//! refilters from the source list; sorting permutes the visible list in
//! place, so it compounds with whatever filter is active.

use std::cmp::Ordering;

use crate::Team;

/// Sortable roster columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    TeamName,
    TeamLeader,
    TeamMembers,
    CheckedIn,
}

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort state. `key: None` means the list is in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

/// In-memory state behind the roster table.
///
/// `visible` is always a projection of `teams`: the same elements,
/// possibly reordered or filtered down, never anything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterModel {
    teams: Vec<Team>,
    visible: Vec<Team>,
    search_term: String,
    sort: SortConfig,
    generation: u64,
}

impl RosterModel {
    /// Source-of-truth list from the last applied load.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Currently displayed projection.
    pub fn visible(&self) -> &[Team] {
        &self.visible
    }

    /// Remembered search term, already lower-cased.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Remembered sort config.
    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    /// Apply a completed load.
    ///
    /// Loads are tagged with a generation counter by the caller; a
    /// completion that is not newer than the last applied one is
    /// discarded, so overlapping in-flight loads resolve to the newest
    /// request rather than to whichever response arrived last. Returns
    /// whether the payload was applied.
    ///
    /// On success both lists are replaced wholesale: the visible list
    /// becomes the full, unfiltered response. The remembered search
    /// term and sort config are left as they are, matching a table
    /// whose controls keep their state across a refresh.
    pub fn apply_load(&mut self, generation: u64, teams: Vec<Team>) -> bool {
        if generation <= self.generation {
            return false;
        }
        self.generation = generation;
        self.visible = teams.clone();
        self.teams = teams;
        true
    }

    /// Recompute the visible list from source for a new search term.
    ///
    /// The term is lower-cased and remembered. Each call filters the
    /// full source list, so successive keystrokes never compound.
    pub fn search(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
        self.visible = self
            .teams
            .iter()
            .filter(|team| team.matches(&self.search_term))
            .cloned()
            .collect();
    }

    /// Activate a sort column, flipping direction on repeat activation.
    ///
    /// Sorts the current visible list in place; an active search filter
    /// is preserved. Switching to a different column resets to
    /// ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        let direction = if self.sort.key == Some(key) {
            self.sort.direction.flipped()
        } else {
            SortDirection::Ascending
        };
        self.sort = SortConfig {
            key: Some(key),
            direction,
        };

        self.visible.sort_by(|a, b| {
            let ordering = compare_by(a, b, key);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    /// Revert the visible list to the full source list and clear the
    /// sort config. The remembered search term is kept; only its effect
    /// on the visible list is discarded.
    pub fn reset_view(&mut self) {
        self.visible = self.teams.clone();
        self.sort = SortConfig::default();
    }
}

/// Column comparator. Every key treats missing values as empty rather
/// than panicking on absent fields.
fn compare_by(a: &Team, b: &Team, key: SortKey) -> Ordering {
    match key {
        SortKey::TeamName => caseless(a.name(), b.name()),
        SortKey::TeamLeader => caseless(a.leader_name(), b.leader_name()),
        SortKey::TeamMembers => caseless(&a.member_roster(), &b.member_roster()),
        SortKey::CheckedIn => a.is_checkedin.cmp(&b.is_checkedin),
    }
}

/// Case-insensitive lexicographic order with a case-sensitive tiebreak.
fn caseless(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TeamLeader, TeamMember};

    fn team(id: &str, name: &str, leader: &str, members: &[&str], checked: bool) -> Team {
        Team {
            id: id.to_string(),
            team_name: (!name.is_empty()).then(|| name.to_string()),
            team_leader: (!leader.is_empty()).then(|| TeamLeader {
                name: Some(leader.to_string()),
            }),
            team_members: (!members.is_empty()).then(|| {
                members
                    .iter()
                    .map(|m| TeamMember {
                        name: Some(m.to_string()),
                    })
                    .collect()
            }),
            is_checkedin: checked,
        }
    }

    fn sample() -> Vec<Team> {
        vec![
            team("1", "Alpha", "Asha", &["Ravi", "Meera"], false),
            team("2", "beta", "Bala", &["Kiran"], true),
            team("3", "Gamma", "Chandra", &["Asha Junior"], false),
        ]
    }

    fn loaded() -> RosterModel {
        let mut model = RosterModel::default();
        assert!(model.apply_load(1, sample()));
        model
    }

    fn visible_ids(model: &RosterModel) -> Vec<&str> {
        model.visible().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_load_replaces_source_and_visible() {
        let model = loaded();

        assert_eq!(model.teams().len(), 3);
        assert_eq!(model.visible().len(), 3);
        assert_eq!(model.teams(), model.visible());
    }

    #[test]
    fn test_load_is_idempotent_for_unchanged_server_list() {
        let mut model = loaded();
        let before = model.clone();

        assert!(model.apply_load(2, sample()));

        assert_eq!(model.teams(), before.teams());
        assert_eq!(model.visible(), before.visible());
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut model = loaded();

        assert!(!model.apply_load(1, vec![]));
        assert!(!model.apply_load(0, vec![]));

        assert_eq!(model.teams().len(), 3);
    }

    #[test]
    fn test_out_of_order_completions_keep_newest_request() {
        let mut model = RosterModel::default();

        // Request 2 completes before request 1.
        assert!(model.apply_load(2, sample()));
        assert!(!model.apply_load(1, vec![team("9", "Zeta", "", &[], false)]));

        assert_eq!(visible_ids(&model), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_matches_name_leader_and_members() {
        let mut model = loaded();

        model.search("Alpha");
        assert_eq!(visible_ids(&model), vec!["1"]);

        model.search("bala");
        assert_eq!(visible_ids(&model), vec!["2"]);

        model.search("kiran");
        assert_eq!(visible_ids(&model), vec!["2"]);
    }

    #[test]
    fn test_search_term_is_remembered_lower_cased() {
        let mut model = loaded();

        model.search("AlPhA");

        assert_eq!(model.search_term(), "alpha");
        assert_eq!(visible_ids(&model), vec!["1"]);
    }

    #[test]
    fn test_search_is_always_from_source() {
        let mut model = loaded();

        model.search("alpha");
        model.search("asha");

        // "asha" matches Alpha's leader and Gamma's member; a compounded
        // filter would have lost Gamma after the first search.
        assert_eq!(visible_ids(&model), vec!["1", "3"]);

        let mut fresh = loaded();
        fresh.search("asha");
        assert_eq!(fresh.visible(), model.visible());
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let mut model = loaded();

        model.search("gamma");
        model.search("");

        assert_eq!(model.visible().len(), 3);
    }

    #[test]
    fn test_team_without_names_never_matches_a_term() {
        let mut model = RosterModel::default();
        model.apply_load(1, vec![team("1", "", "", &[], false), team("2", "Alpha", "", &[], false)]);

        model.search("a");

        assert_eq!(visible_ids(&model), vec!["2"]);
    }

    #[test]
    fn test_sort_by_name_then_toggle_reverses() {
        let mut model = loaded();

        model.toggle_sort(SortKey::TeamName);
        assert_eq!(visible_ids(&model), vec!["1", "2", "3"]);
        assert_eq!(model.sort().key, Some(SortKey::TeamName));
        assert_eq!(model.sort().direction, SortDirection::Ascending);

        model.toggle_sort(SortKey::TeamName);
        assert_eq!(visible_ids(&model), vec!["3", "2", "1"]);
        assert_eq!(model.sort().direction, SortDirection::Descending);
    }

    #[test]
    fn test_switching_sort_key_resets_to_ascending() {
        let mut model = loaded();

        model.toggle_sort(SortKey::TeamName);
        model.toggle_sort(SortKey::TeamName);
        model.toggle_sort(SortKey::TeamLeader);

        assert_eq!(model.sort().key, Some(SortKey::TeamLeader));
        assert_eq!(model.sort().direction, SortDirection::Ascending);
        assert_eq!(visible_ids(&model), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut model = RosterModel::default();
        model.apply_load(
            1,
            vec![
                team("1", "beta", "", &[], false),
                team("2", "Alpha", "", &[], false),
            ],
        );

        model.toggle_sort(SortKey::TeamName);

        assert_eq!(visible_ids(&model), vec!["2", "1"]);
    }

    #[test]
    fn test_sort_guards_missing_values_on_every_key() {
        let mut model = RosterModel::default();
        model.apply_load(
            1,
            vec![
                team("1", "Zeta", "Zoya", &["Zack"], true),
                team("2", "", "", &[], false),
            ],
        );

        for key in [
            SortKey::TeamName,
            SortKey::TeamLeader,
            SortKey::TeamMembers,
            SortKey::CheckedIn,
        ] {
            model.reset_view();
            model.toggle_sort(key);
            // The team with nothing filled in sorts first ascending.
            assert_eq!(visible_ids(&model), vec!["2", "1"]);
        }
    }

    #[test]
    fn test_sort_by_members_uses_joined_names() {
        let mut model = RosterModel::default();
        model.apply_load(
            1,
            vec![
                team("1", "", "", &["Noor", "Aziz"], false),
                team("2", "", "", &["Aziz", "Noor"], false),
            ],
        );

        model.toggle_sort(SortKey::TeamMembers);

        // "Aziz, Noor" < "Noor, Aziz"
        assert_eq!(visible_ids(&model), vec!["2", "1"]);
    }

    #[test]
    fn test_sort_by_checked_in_orders_unchecked_first() {
        let mut model = loaded();

        model.toggle_sort(SortKey::CheckedIn);
        assert_eq!(visible_ids(&model), vec!["1", "3", "2"]);

        model.toggle_sort(SortKey::CheckedIn);
        assert_eq!(visible_ids(&model), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_compounds_with_active_search() {
        let mut model = loaded();

        model.search("asha");
        model.toggle_sort(SortKey::TeamName);

        // Only the filtered rows get reordered; nothing excluded comes back.
        assert_eq!(visible_ids(&model), vec!["1", "3"]);

        model.toggle_sort(SortKey::TeamName);
        assert_eq!(visible_ids(&model), vec!["3", "1"]);
    }

    #[test]
    fn test_reset_restores_full_list_and_clears_sort() {
        let mut model = loaded();

        model.search("alpha");
        model.toggle_sort(SortKey::TeamLeader);
        model.reset_view();

        assert_eq!(model.visible(), model.teams());
        assert_eq!(model.sort(), SortConfig::default());
        // The search box keeps its text; only the filter effect is gone.
        assert_eq!(model.search_term(), "alpha");
    }

    #[test]
    fn test_example_flow() {
        let mut model = RosterModel::default();
        model.apply_load(
            1,
            vec![
                team("1", "Alpha", "", &[], false),
                team("2", "beta", "", &[], true),
            ],
        );

        model.search("alpha");
        assert_eq!(visible_ids(&model), vec!["1"]);

        model.reset_view();
        assert_eq!(model.visible().len(), 2);

        model.toggle_sort(SortKey::TeamName);
        assert_eq!(visible_ids(&model), vec!["1", "2"]);

        model.toggle_sort(SortKey::TeamName);
        assert_eq!(visible_ids(&model), vec!["2", "1"]);
    }
}
