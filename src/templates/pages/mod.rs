pub mod about;
pub mod blog;
pub mod contact;
pub mod home;
pub mod listing_detail;
pub mod listings;

pub use about::about_page;
pub use blog::blog_page;
pub use contact::contact_page;
pub use home::home_page;
pub use listing_detail::{listing_not_found_page, listing_page};
pub use listings::{listings_page, listings_results, ListingsVm};
