pub mod configurations;
