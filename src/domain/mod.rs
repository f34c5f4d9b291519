// Domain layer - Dashboard data and chart geometry
pub mod chart;
pub mod greeting;
pub mod link;
pub mod snapshot;
pub mod stat_item;
