pub mod entity;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use entity::Configuration;
pub use errors::ConfigurationErrors;
pub use repository::ConfigurationStore;
pub use value_objects::ConfigurationId;
