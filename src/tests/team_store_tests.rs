#[cfg(test)]
mod tests {
    use crate::errors::{AppError, StoreError, ValidationError};
    use crate::providers::fs::{path::get_teams_file_path, team_writer::FileSystemTeamWriter};
    use crate::shapes::team::{SortField, Team, TeamPatch};
    use crate::store::team_store::TeamStore;
    use tempfile::TempDir;

    fn team(name: &str, city: &str, games: u32, wins: u32, losses: u32, draws: u32, players: u32) -> Team {
        Team {
            name: name.to_string(),
            city: city.to_string(),
            games_played: games,
            wins,
            losses,
            draws,
            players_count: players,
        }
    }

    fn make_store(teams: Vec<Team>) -> (TempDir, TeamStore<FileSystemTeamWriter>) {
        let dir = TempDir::new().expect("expected a temp dir");
        let writer = FileSystemTeamWriter::new(dir.path());
        (dir, TeamStore::new(teams, writer))
    }

    fn persisted(dir: &TempDir) -> String {
        std::fs::read_to_string(get_teams_file_path(dir.path())).expect("expected a teams file")
    }

    #[tokio::test]
    async fn add_valid_team_appends_and_persists() {
        let (dir, mut store) = make_store(vec![]);
        store
            .add(team("Tigers", "London", 10, 6, 3, 1, 15))
            .await
            .expect("expected a valid team");
        assert_eq!(store.list().len(), 1);
        assert_eq!(persisted(&dir), "Tigers,London,10,6,3,1,15\n");
    }

    #[tokio::test]
    async fn add_rejects_games_invariant_violation_without_mutation() {
        let (_dir, mut store) = make_store(vec![team("Tigers", "London", 10, 6, 3, 1, 15)]);
        let before = store.list().to_vec();
        let err = store
            .add(team("Lions", "Leeds", 10, 6, 3, 2, 12))
            .await
            .expect_err("expected a validation error");
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::GamesInvariant { .. })
        ));
        assert_eq!(store.list(), before.as_slice());
    }

    #[tokio::test]
    async fn add_rejects_invalid_name_and_city() {
        let (_dir, mut store) = make_store(vec![]);
        let err = store
            .add(team("Tigers7", "London", 0, 0, 0, 0, 5))
            .await
            .expect_err("expected a validation error");
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidName(_))
        ));
        let err = store
            .add(team("Tigers", "L0ndon", 0, 0, 0, 0, 5))
            .await
            .expect_err("expected a validation error");
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidCity(_))
        ));
        assert!(store.list().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_first_match_and_persists() {
        let (dir, mut store) = make_store(vec![
            team("Tigers", "London", 0, 0, 0, 0, 5),
            team("Lions", "Leeds", 0, 0, 0, 0, 8),
        ]);
        store.delete("Tigers").await.expect("expected a deletion");
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].name, "Lions");
        assert_eq!(persisted(&dir), "Lions,Leeds,0,0,0,0,8\n");
    }

    #[tokio::test]
    async fn delete_unknown_team_is_not_found() {
        let (_dir, mut store) = make_store(vec![]);
        let err = store
            .delete("Ghosts")
            .await
            .expect_err("expected a store error");
        assert!(matches!(
            err,
            AppError::Store(StoreError::TeamNotFound(name)) if name == "Ghosts"
        ));
    }

    #[tokio::test]
    async fn find_by_name_returns_first_exact_match() {
        let (_dir, store) = make_store(vec![
            team("Tigers", "London", 0, 0, 0, 0, 5),
            team("Tigers", "Leeds", 0, 0, 0, 0, 8),
        ]);
        let found = store.find_by_name("Tigers").expect("expected a team");
        assert_eq!(found.city, "London");
        assert!(store.find_by_name("tigers").is_none());
    }

    #[tokio::test]
    async fn edit_merges_patch_and_persists() {
        let (dir, mut store) = make_store(vec![team("Tigers", "London", 10, 6, 3, 1, 15)]);
        let patch = TeamPatch {
            wins: Some(7),
            losses: Some(2),
            ..TeamPatch::default()
        };
        store.edit("Tigers", patch).await.expect("expected an edit");
        let edited = store.find_by_name("Tigers").expect("expected a team");
        assert_eq!(edited.wins, 7);
        assert_eq!(edited.losses, 2);
        assert_eq!(edited.games_played, 10);
        assert_eq!(edited.city, "London");
        assert_eq!(persisted(&dir), "Tigers,London,10,7,2,1,15\n");
    }

    #[tokio::test]
    async fn edit_rejects_merged_invariant_violation_without_mutation() {
        let (_dir, mut store) = make_store(vec![team("Tigers", "London", 10, 6, 3, 1, 15)]);
        let patch = TeamPatch {
            wins: Some(9),
            ..TeamPatch::default()
        };
        let err = store
            .edit("Tigers", patch)
            .await
            .expect_err("expected a validation error");
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::GamesInvariant { .. })
        ));
        assert_eq!(store.find_by_name("Tigers").map(|t| t.wins), Some(6));
    }

    #[tokio::test]
    async fn edit_unknown_team_is_not_found() {
        let (_dir, mut store) = make_store(vec![]);
        let err = store
            .edit("Ghosts", TeamPatch::default())
            .await
            .expect_err("expected a store error");
        assert!(matches!(err, AppError::Store(StoreError::TeamNotFound(_))));
    }

    #[tokio::test]
    async fn count_below_counts_strictly_smaller_rosters() {
        let (_dir, store) = make_store(vec![
            team("A-team", "A-town", 0, 0, 0, 0, 5),
            team("B-team", "B-town", 0, 0, 0, 0, 12),
            team("C-team", "C-town", 0, 0, 0, 0, 9),
        ]);
        assert_eq!(store.count_below(10), 2);
        assert_eq!(store.count_below(5), 0);
    }

    #[tokio::test]
    async fn most_wins_on_empty_store_is_none() {
        let (_dir, store) = make_store(vec![]);
        assert!(store.most_wins().is_none());
    }

    #[tokio::test]
    async fn most_wins_breaks_ties_leftmost() {
        let (_dir, store) = make_store(vec![
            team("Three", "A-town", 3, 3, 0, 0, 5),
            team("First-Five", "B-town", 5, 5, 0, 0, 5),
            team("Second-Five", "C-town", 5, 5, 0, 0, 5),
        ]);
        let best = store.most_wins().expect("expected a team");
        assert_eq!(best.name, "First-Five");
    }

    #[tokio::test]
    async fn sort_by_wins_is_descending() {
        let (_dir, mut store) = make_store(vec![
            team("Two", "A-town", 2, 2, 0, 0, 5),
            team("Eight", "B-town", 8, 8, 0, 0, 5),
            team("Five", "C-town", 5, 5, 0, 0, 5),
        ]);
        store.sort_by(SortField::Wins);
        let wins: Vec<u32> = store.list().iter().map(|t| t.wins).collect();
        assert_eq!(wins, vec![8, 5, 2]);
    }

    #[tokio::test]
    async fn sort_by_name_is_ascending() {
        let (_dir, mut store) = make_store(vec![
            team("Zeta", "A-town", 0, 0, 0, 0, 5),
            team("Alpha", "B-town", 0, 0, 0, 0, 5),
        ]);
        store.sort_by(SortField::Name);
        let names: Vec<&str> = store.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[tokio::test]
    async fn sort_is_not_persisted() {
        let (dir, mut store) = make_store(vec![
            team("Zeta", "A-town", 0, 0, 0, 0, 5),
            team("Alpha", "B-town", 0, 0, 0, 0, 5),
        ]);
        // establish a file in insertion order via a persisting mutation
        store
            .add(team("Mid", "C-town", 0, 0, 0, 0, 5))
            .await
            .expect("expected a valid team");
        let before = persisted(&dir);
        store.sort_by(SortField::Name);
        assert_eq!(store.list()[0].name, "Alpha");
        assert_eq!(persisted(&dir), before);
    }
}
