//! Task CRUD against `PostgreSQL`.

use crate::postgres::helpers::{
    CleanupGuard, clock, ensure_template, execute_sql, setup_repository, test_runtime,
};
use chrono::TimeDelta;
use mockable::{Clock, DefaultClock};
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;
use tasktrack::task::{
    domain::{NewTask, TaskDescription, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};

fn draft(clock: &DefaultClock, title: &str, description: Option<&str>) -> NewTask {
    NewTask::new(
        TaskTitle::new(title).expect("valid title"),
        description.map(|value| TaskDescription::new(value).expect("valid description")),
        clock,
    )
}

fn database_name(test: &str) -> String {
    format!("test_{test}_{}", uuid::Uuid::new_v4().simple())
}

#[rstest]
fn insert_and_find_round_trip(clock: DefaultClock, shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = database_name("insert_find");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let db = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let stored = rt
        .block_on(db.repository.insert(&draft(&clock, "Buy milk", Some("whole"))))
        .expect("insert should succeed");
    let fetched = rt
        .block_on(db.repository.find_by_id(stored.id()))
        .expect("find should succeed");

    assert_eq!(stored.id().value(), 1);
    assert_eq!(fetched, stored);
    assert_eq!(
        fetched.description().map(TaskDescription::as_str),
        Some("whole")
    );
    assert_eq!(fetched.updated_at(), None);
}

#[rstest]
fn list_orders_by_id_and_count_matches(
    clock: DefaultClock,
    shared_test_cluster: &'static TestCluster,
) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = database_name("list_count");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let db = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    for title in ["first", "second", "third"] {
        rt.block_on(db.repository.insert(&draft(&clock, title, None)))
            .expect("insert should succeed");
    }

    let titles: Vec<String> = rt
        .block_on(db.repository.list_all())
        .expect("list should succeed")
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();

    assert_eq!(titles, vec!["first", "second", "third"]);
    assert_eq!(rt.block_on(db.repository.count()).expect("count"), 3);
}

#[rstest]
fn apply_patch_updates_supplied_fields_only(
    clock: DefaultClock,
    shared_test_cluster: &'static TestCluster,
) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = database_name("apply_patch");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let db = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let stored = rt
        .block_on(db.repository.insert(&draft(&clock, "Buy milk", Some("whole"))))
        .expect("insert should succeed");
    let when = stored.created_at() + TimeDelta::seconds(10);
    let patch = TaskPatch::new().with_description(TaskDescription::new("2%").expect("valid"));

    let updated = rt
        .block_on(db.repository.apply_patch(stored.id(), &patch, when))
        .expect("patch should succeed");

    assert_eq!(updated.title().as_str(), "Buy milk");
    assert_eq!(updated.description().map(TaskDescription::as_str), Some("2%"));
    assert_eq!(updated.created_at(), stored.created_at());
    assert_eq!(updated.updated_at(), Some(when));
    assert_eq!(
        rt.block_on(db.repository.find_by_id(stored.id()))
            .expect("find should succeed"),
        updated
    );
}

#[rstest]
fn missing_rows_are_not_found(clock: DefaultClock, shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = database_name("missing");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let db = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();
    let id = TaskId::from_persisted(404);

    assert!(matches!(
        rt.block_on(db.repository.find_by_id(id)),
        Err(TaskRepositoryError::NotFound(missing)) if missing == id
    ));
    assert!(matches!(
        rt.block_on(db.repository.apply_patch(id, &TaskPatch::new(), clock.utc())),
        Err(TaskRepositoryError::NotFound(_))
    ));
    assert!(matches!(
        rt.block_on(db.repository.delete(id)),
        Err(TaskRepositoryError::NotFound(_))
    ));
}

#[rstest]
fn delete_removes_row_and_ids_are_not_reused(
    clock: DefaultClock,
    shared_test_cluster: &'static TestCluster,
) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = database_name("delete");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let db = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let stored = rt
        .block_on(db.repository.insert(&draft(&clock, "Buy milk", None)))
        .expect("insert should succeed");
    rt.block_on(db.repository.delete(stored.id()))
        .expect("delete should succeed");
    let next = rt
        .block_on(db.repository.insert(&draft(&clock, "Walk dog", None)))
        .expect("insert should succeed");

    assert_eq!(next.id().value(), 2);
    assert_eq!(rt.block_on(db.repository.count()).expect("count"), 1);
    assert!(matches!(
        rt.block_on(db.repository.find_by_id(stored.id())),
        Err(TaskRepositoryError::NotFound(_))
    ));
}

#[rstest]
fn stored_row_failing_domain_rules_is_a_persistence_error(
    shared_test_cluster: &'static TestCluster,
) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = database_name("revalidate");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let db = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    // Passes the column CHECK, which only trims spaces.
    execute_sql(&db.pool, "INSERT INTO tasks (title) VALUES (E'\\t');").expect("raw insert");

    assert!(matches!(
        rt.block_on(db.repository.find_by_id(TaskId::from_persisted(1))),
        Err(TaskRepositoryError::Persistence(_))
    ));
}

#[rstest]
fn missing_table_is_a_persistence_error(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = database_name("no_table");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let db = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    execute_sql(&db.pool, "DROP TABLE tasks;").expect("drop table");

    assert!(matches!(
        rt.block_on(db.repository.list_all()),
        Err(TaskRepositoryError::Persistence(_))
    ));
}
