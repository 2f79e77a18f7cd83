use super::*;

/// Tests creating a student.
///
/// Verifies that the repository inserts the record and returns the stored fields
/// together with a store-assigned ID.
///
/// Expected: Ok(Student) with matching fields
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.create(ann_lee()).await?;

    assert_eq!(student.name, "Ann Lee");
    assert_eq!(student.roll_number, "R1");
    assert_eq!(student.email, "a@x.com");
    assert_eq!(student.department, "CS");
    assert_eq!(student.year, 2);

    let stored = entity::prelude::Student::find_by_id(student.id.into_store())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that every created student receives a fresh ID.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let first = repo.create(ann_lee()).await?;
    let second = repo.create(ann_lee()).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that duplicate roll numbers are accepted.
///
/// Roll numbers are intended to be unique but the store does not enforce it.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_duplicate_roll_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .roll_number("R1")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let result = repo.create(ann_lee()).await;

    assert!(result.is_ok());
    assert_eq!(entity::prelude::Student::find().count(db).await?, 2);

    Ok(())
}

/// Tests creating a student when the table does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.create(ann_lee()).await;

    assert!(result.is_err());

    Ok(())
}
