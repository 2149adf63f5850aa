// Export modules for testing
pub mod cli;
pub mod color;

// Integration modules
pub mod integrations;

// Command modules
pub mod commands;

// Domain modules
pub mod domain;

// Interactive prompting
pub mod prompt;
