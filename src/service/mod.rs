pub mod crypto;
pub mod invitation;
pub mod log;
pub mod user;
