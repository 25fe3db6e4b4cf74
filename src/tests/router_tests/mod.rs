pub mod api_tests;
pub mod estimator_tests;
pub mod export_tests;
pub mod searches_tests;
