use super::*;

/// Tests listing an empty store.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    assert!(students.is_empty());

    Ok(())
}

/// Tests listing returns every student in insertion order.
///
/// Expected: Ok(vec) ordered by ascending ID
#[tokio::test]
async fn returns_all_students_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_students(db, 3).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    let ids: Vec<StudentId> = students.iter().map(|s| s.id).collect();
    let expected: Vec<StudentId> = created
        .iter()
        .map(|s| StudentId::from_store(s.id))
        .collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that the list reflects creates minus deletes.
///
/// Expected: Ok(vec) with N - M entries
#[tokio::test]
async fn reflects_creates_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_students(db, 5).await?;

    let repo = StudentRepository::new(db);
    repo.delete(StudentId::from_store(created[1].id)).await?;
    repo.delete(StudentId::from_store(created[3].id)).await?;

    let students = repo.get_all().await?;

    assert_eq!(students.len(), 3);
    assert!(students
        .iter()
        .all(|s| s.id != StudentId::from_store(created[1].id)));

    Ok(())
}
