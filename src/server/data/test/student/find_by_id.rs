use super::*;

/// Tests retrieving a student by ID.
///
/// Expected: Ok(Some(Student))
#[tokio::test]
async fn returns_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo.find_by_id(StudentId::from_store(created.id)).await?;

    let student = result.expect("student should exist");
    assert_eq!(student.id, StudentId::from_store(created.id));
    assert_eq!(student.name, created.name);
    assert_eq!(student.roll_number, created.roll_number);

    Ok(())
}

/// Tests retrieving a non-existent student.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.find_by_id(StudentId::from_store(999999)).await?;

    assert!(result.is_none());

    Ok(())
}
