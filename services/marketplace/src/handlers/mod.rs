pub mod advice;
pub mod anatomy;
pub mod community;
pub mod dashboard;
pub mod form;
pub mod listing;
pub mod multipart;
pub mod nutrition;
pub mod purchase;
pub mod user;
pub mod workout;
