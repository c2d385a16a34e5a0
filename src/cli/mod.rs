//! CLI infrastructure for the recall game
//!
//! This module provides the command-line interface for playing against the
//! agent and inspecting what it has learned.

pub mod commands;
pub mod config;
pub mod output;
