//! # CLI Module
//!
//! Command-line interface for the layergen scaffolding tool.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate the full artifact set for a domain model:
//!
//! ```bash
//! layergen generate --model user
//! ```
//!
//! Runs the controller, repository, service, DTO, and mapper generators in
//! that order, then records the model in the persisted model list.
//!
//! ### `patch`
//!
//! Rescan the model directory and overwrite the persisted model list:
//!
//! ```bash
//! layergen patch
//! ```
//!
//! ## Project root
//!
//! Both commands operate on the project tree at `--root` (default: current
//! directory), which must contain `layergen.json` and the configured layer
//! directories. Invoking `layergen` without a subcommand prints usage and
//! exits successfully.

mod commands;


pub use commands::{run_cli, Cli, Commands};
