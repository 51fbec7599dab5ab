pub mod feature_converter;
pub mod range_checker;

pub use feature_converter::FeatureConverter;
pub use range_checker::{RangeChecker, RangeReport, RangeViolation};
