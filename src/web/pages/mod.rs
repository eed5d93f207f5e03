pub mod about;
pub mod blog;
pub mod community;
pub mod events;
pub mod home;
