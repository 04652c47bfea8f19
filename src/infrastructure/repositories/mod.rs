pub mod simulated_configuration;

pub use simulated_configuration::SimulatedConfigurationStore;
