//! Teacher roster persistence

pub mod store;

pub use store::{RosterError, Teacher, TeacherInput, TeacherStore};
