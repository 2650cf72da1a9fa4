#[cfg(test)]
mod tests {
    use crate::auth::{login, Role};
    use crate::providers::fs::user_writer::FileSystemUserWriter;
    use crate::shapes::user::User;
    use crate::store::user_store::UserStore;
    use tempfile::TempDir;

    fn make_store() -> (TempDir, UserStore<FileSystemUserWriter>) {
        let dir = TempDir::new().expect("expected a temp dir");
        let writer = FileSystemUserWriter::new(dir.path());
        let users = vec![
            User {
                username: "admin".to_string(),
                password: "root".to_string(),
                is_admin: true,
            },
            User {
                username: "alice".to_string(),
                password: "secret".to_string(),
                is_admin: false,
            },
        ];
        (dir, UserStore::new(users, writer))
    }

    #[test]
    fn admin_credentials_yield_admin_role() {
        let (_dir, store) = make_store();
        assert_eq!(login(&store, "admin", "root"), Some(Role::Admin));
    }

    #[test]
    fn regular_credentials_yield_standard_role() {
        let (_dir, store) = make_store();
        assert_eq!(login(&store, "alice", "secret"), Some(Role::Standard));
    }

    #[test]
    fn wrong_password_and_unknown_user_are_indistinguishable() {
        let (_dir, store) = make_store();
        assert_eq!(login(&store, "alice", "wrong"), None);
        assert_eq!(login(&store, "nobody", "secret"), None);
    }
}
