use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided field changes and the rest keep their
/// stored values.
///
/// Expected: Ok(Some(Student)) with year replaced
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let created = repo.create(ann_lee()).await?;

    let updated = repo
        .update(
            created.id,
            UpdateStudentParam {
                year: Some(3),
                ..Default::default()
            },
        )
        .await?
        .expect("student should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.year, 3);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.roll_number, created.roll_number);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.department, created.department);

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests a full replacement of every field.
///
/// Expected: Ok(Some(Student)) with every field replaced
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(
            StudentId::from_store(created.id),
            UpdateStudentParam {
                name: Some("Bo Chen".to_string()),
                roll_number: Some("R2".to_string()),
                email: Some("b@x.com".to_string()),
                department: Some("EE".to_string()),
                year: Some(4),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Bo Chen");
    assert_eq!(updated.roll_number, "R2");
    assert_eq!(updated.email, "b@x.com");
    assert_eq!(updated.department, "EE");
    assert_eq!(updated.year, 4);

    Ok(())
}

/// Tests an update with no fields.
///
/// Expected: Ok(Some(Student)) unchanged
#[tokio::test]
async fn empty_update_returns_stored_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let created = repo.create(ann_lee()).await?;

    let updated = repo
        .update(created.id, UpdateStudentParam::default())
        .await?;

    assert_eq!(updated, Some(created));

    Ok(())
}

/// Tests updating a non-existent student.
///
/// Verifies that nothing is created as a side effect.
///
/// Expected: Ok(None) and an empty table
#[tokio::test]
async fn returns_none_for_nonexistent_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .update(
            StudentId::from_store(999999),
            UpdateStudentParam {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    Ok(())
}
