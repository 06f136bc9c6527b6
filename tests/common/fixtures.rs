use statetrack::{StateId, Status, TrackerDb};

/// Creates a TrackerDb backed by a temp-dir sqlite file.
/// Returns both the db and the temp dir (which must be kept alive).
pub async fn create_test_db() -> (TrackerDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test.db");
    let db = TrackerDb::open(&path)
        .await
        .expect("Failed to open test database");
    (db, dir)
}

pub fn state(code: &str) -> StateId {
    StateId::try_from(code).expect("valid state code")
}

/// The mapping used throughout the derivation examples:
/// CA together, TX both, NY ben.
pub fn seed_sample(db: &TrackerDb) -> impl std::future::Future<Output = anyhow::Result<()>> {
    use statetrack::VisitRepository;
    let db = db.clone();
    async move {
        db.upsert_visit(state("CA"), Status::Together).await?;
        db.upsert_visit(state("TX"), Status::Both).await?;
        db.upsert_visit(state("NY"), Status::Ben).await?;
        Ok(())
    }
}
