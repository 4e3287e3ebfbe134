mod metadata;

pub use metadata::MetadataRecord;
