pub mod assignments;
pub mod auth;
pub mod contents;
pub mod courses;
pub mod moderation;
pub mod submissions;
pub mod tutorials;
