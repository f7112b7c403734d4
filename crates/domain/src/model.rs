pub mod collection;
pub mod record;

pub use collection::ResultCollection;
pub use record::ResultRecord;
