pub mod calendar;
pub mod contact;
pub mod content;
pub mod event;
pub mod member;
pub mod submission;

pub use calendar::*;
pub use contact::*;
pub use content::*;
pub use event::Event;
pub use member::*;
pub use submission::SubmissionOutcome;
