pub mod error;
pub mod graph;
pub mod logging;
pub mod parser;
pub mod poset;
pub mod relation;
pub mod report;
pub mod table;

pub use error::PosetError;
pub use graph::*;
pub use poset::Poset;
pub use relation::*;
pub use report::Report;
pub use table::OperationTable;
