pub mod compare;
pub mod estimator;
pub mod market;
pub mod searches;

pub use compare::compare_page;
pub use estimator::{estimator_page, EstimateView};
pub use market::{market_page, MarketVm};
pub use searches::searches_page;
