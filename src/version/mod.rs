//! Version resolution layer
//!
//! This module provides the functionality for fetching the tag list of a
//! repository and deriving the next build version from its latest tag.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Resolver   │────▶│    stdout   │
//! │  (fetch)    │     │  (decide)   │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │     Tag     │
//! │  (GitHub)   │     │   (parse)   │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching tags from remote sources
//! - [`registries`]: Concrete registry implementations (GitHub)
//! - [`resolver`]: Next build version decision
//! - [`tag`]: Splitting tag names into version and build counter
//! - [`error`]: Error types for registry and resolve operations

pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod tag;
