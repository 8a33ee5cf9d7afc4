pub mod access;
pub mod aggregate;
