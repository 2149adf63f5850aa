// Domain entities module
// This module contains the branch-name / commit-message encoding scheme

pub mod ticket;
