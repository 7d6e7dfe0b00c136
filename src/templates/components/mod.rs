pub mod card;
pub mod contact_form;
pub mod error;
pub mod filter_form;
pub mod notice;

pub use card::{card, listing_card};
pub use contact_form::{contact_failure, contact_form, contact_success};
pub use error::html_error_response;
pub use filter_form::filter_form;
pub use notice::{notice, Tone};
