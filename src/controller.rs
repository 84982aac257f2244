pub mod contact;
pub mod services;
pub mod site;
