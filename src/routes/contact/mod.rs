mod contact_handler;
mod errors;
mod helpers;
mod types;

pub use contact_handler::submit_contact;
pub use errors::ContactError;
pub use types::ContactForm;
