use crate::{
    model::student::StudentId,
    server::{
        data::student::StudentRepository,
        model::student::{CreateStudentParam, UpdateStudentParam},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod update;

fn ann_lee() -> CreateStudentParam {
    CreateStudentParam {
        name: "Ann Lee".to_string(),
        roll_number: "R1".to_string(),
        email: "a@x.com".to_string(),
        department: "CS".to_string(),
        year: 2,
    }
}
