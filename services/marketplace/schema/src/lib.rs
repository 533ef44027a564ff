//! sea-orm entities for the marketplace tables.

pub mod advice;
pub mod nutrition_plans;
pub mod purchases;
pub mod users;
pub mod workout_content;
