pub mod auth;
pub mod contact;
pub mod me;
pub mod pricing;
pub mod project;
pub mod skill;
