pub mod auth;
pub mod challenges;
pub mod submissions;
