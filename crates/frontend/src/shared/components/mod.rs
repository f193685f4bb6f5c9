pub mod donut_chart;
pub mod pagination_controls;
