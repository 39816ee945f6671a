pub mod comment;
pub mod like;
pub mod reply;
pub mod shared;
pub mod thread;
