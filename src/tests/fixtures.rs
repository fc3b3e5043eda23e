#![cfg(test)]

use rstest::fixture;

use crate::domain::entities::profile::{Gender, StudentProfile, TeacherProfile};

#[fixture]
pub fn teacher_profile() -> TeacherProfile {
    TeacherProfile {
        name: "Zhang".to_string(),
        gender: Gender::Male,
        introduction: "Teaches linear algebra".to_string(),
        profession: "Mathematics".to_string(),
        college: "College of Science".to_string(),
        email: "zhang@example.edu".to_string(),
        id_card: "110101198001011234".to_string(),
    }
}

#[fixture]
pub fn student_profile() -> StudentProfile {
    StudentProfile {
        name: "Li".to_string(),
        gender: Gender::Female,
        class_name: "3A".to_string(),
        profession: "Physics".to_string(),
        college: "College of Science".to_string(),
        email: "li@example.edu".to_string(),
        id_card: "110101200401015678".to_string(),
    }
}
