pub mod attributes;

pub use attributes::AttributeRecord;
