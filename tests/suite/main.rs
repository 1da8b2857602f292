mod common;

mod contraction_tests;
mod multi_tests;
mod property_tests;
