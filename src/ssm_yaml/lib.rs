//! # ssm-yaml Architecture
//!
//! ssm-yaml keeps a YAML document and an AWS SSM Parameter Store namespace in
//! sync. A nested document (mappings, sequences, scalars) maps to a flat set
//! of "/"-delimited parameter paths and back, and both sides can be rendered
//! as a tree.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prints output, prompts for deletes     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the store        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per subcommand, returns CmdResult             │
//! │  - No I/O assumptions, no stdout/stderr                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core transforms (value, path, tree, flatten, sensitive,    │
//! │  render) — pure functions, no store, no I/O                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ParamStore trait                                │
//! │  - SsmStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The namespace mapping
//!
//! The whole tool hangs off one bidirectional mapping:
//!
//! - **YAML → store** ([`flatten`]): depth-first walk emitting one absolute
//!   path per scalar leaf, sequence elements addressed by decimal index.
//! - **store → YAML** ([`tree`]): parameters are typed via trial parsing
//!   ([`value`]), inserted shallow-first into a nested mapping, and
//!   numeric-keyed mappings are coerced back into sequences.
//!
//! Everywhere a mapping is iterated, an explicit deterministic order is
//! imposed (depth first, then lexicographic — see [`path::cmp_depth_then_lex`])
//! so that repeated runs produce identical output.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, core, storage), code takes regular
//! arguments, returns `Result<CmdResult>`, never writes to stdout/stderr, and
//! never calls `std::process::exit`. Per-key store failures are captured as
//! error messages inside `CmdResult` so a single bad key cannot abort a bulk
//! load or delete.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all store-backed operations
//! - [`commands`]: Business logic for each subcommand
//! - [`store`]: Storage abstraction, SSM client, in-memory test store
//! - [`model`]: Core data types (`Parameter`, `Classification`)
//! - [`value`]: Typed scalar codec (store string ↔ YAML scalar)
//! - [`path`]: Path segment codec and the shared namespace ordering
//! - [`tree`]: Nested tree builder and sequence coercion
//! - [`flatten`]: Document flattener (the builder's inverse)
//! - [`sensitive`]: Secret-keyword path classifier
//! - [`render`]: Box-drawing tree renderer
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod flatten;
pub mod model;
pub mod path;
pub mod render;
pub mod sensitive;
pub mod store;
pub mod tree;
pub mod value;
