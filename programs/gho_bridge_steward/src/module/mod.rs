pub mod admin;
pub mod council;
