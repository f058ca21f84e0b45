pub mod assignment;
pub mod auth;
pub mod content;
pub mod course;
pub mod moderation;
pub mod shared;
pub mod submission;
pub mod tutorial;
