pub mod advice;
pub mod anatomy;
pub mod community;
pub mod dashboard;
pub mod nutrition;
pub mod publish;
pub mod purchase;
pub mod session;
pub mod user;
pub mod workout;
