pub mod contact;
pub mod me;
pub mod option_fields;
pub mod pricing;
pub mod project;
pub mod skill;
pub mod token;
pub mod validation;
