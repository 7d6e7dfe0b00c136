pub mod category;
pub mod criteria;
pub mod inquiry;
pub mod listing;
pub mod price;

pub use category::CategoryTable;
pub use criteria::FilterCriteria;
pub use inquiry::Inquiry;
pub use listing::Listing;
pub use price::Price;
