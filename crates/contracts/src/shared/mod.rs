pub mod profit;
