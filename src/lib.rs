pub mod catalog;
pub mod grading;
pub mod marks;
pub mod output;
pub mod session;
pub mod settings;
