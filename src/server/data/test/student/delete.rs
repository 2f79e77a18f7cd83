use super::*;

/// Tests deleting a student.
///
/// Expected: Ok(true) with the row removed
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let deleted = repo.delete(StudentId::from_store(created.id)).await?;

    assert!(deleted);
    let check = entity::prelude::Student::find_by_id(created.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests that a second delete of the same ID reports nothing deleted.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let id = StudentId::from_store(created.id);

    assert!(repo.delete(id).await?);
    assert!(!repo.delete(id).await?);

    // Unrelated rows are untouched
    let remaining = entity::prelude::Student::find().all(db).await?;
    assert_eq!(remaining, vec![other]);

    Ok(())
}

/// Tests deleting a non-existent student.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_for_nonexistent_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let deleted = repo.delete(StudentId::from_store(999999)).await?;

    assert!(!deleted);

    Ok(())
}
