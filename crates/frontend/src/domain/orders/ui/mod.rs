pub mod form;
pub mod list;
pub mod toggles;

pub use list::OrdersPage;
