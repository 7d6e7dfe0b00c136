mod contact_tests;
mod listings_tests;
mod pages_tests;
