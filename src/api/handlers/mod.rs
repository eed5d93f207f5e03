pub mod contact;
pub mod events;
pub mod members;
pub mod root;
pub mod signup;
