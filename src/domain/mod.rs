// Domain layer - Market data, selections and chart specifications
pub mod chart;
pub mod market;
pub mod range;
