mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let path;

    {
        let test_db = common::TestDb::new("lifecycle.db");
        path = test_db.path();
        assert!(path.exists());

        let conn = test_db.pool().get();
        assert!(conn.is_ok());
    }

    // The temp directory goes away with the TestDb value.
    assert!(!path.exists());
}
