// GUI components module
pub mod explanation;
pub mod header;
pub mod price_input;
pub mod results;

pub use explanation::Explanation;
pub use header::Header;
pub use price_input::PriceInput;
pub use results::ResultsArea;
