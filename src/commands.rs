// Command handlers module
// This module contains all CLI command implementations

pub mod branch;
pub mod commit;
pub mod generate_message;
