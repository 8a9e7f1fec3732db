//! HTTP client for the course home API

mod home;

pub use home::CourseHomeClient;
