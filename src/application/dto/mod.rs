pub mod configurations;

pub use configurations::ConfigurationResponse;
