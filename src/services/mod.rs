pub mod builder;
pub mod convert;
pub mod digest;
pub mod encoding;
pub mod fetch;
pub mod module;
pub mod normalize;
pub mod prompt;
pub mod store;
pub mod type_map;
