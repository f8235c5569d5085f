//! # layergen
//!
//! **layergen** is a code-scaffolding CLI for layered C# web applications.
//! Given a domain model name, it generates the boilerplate artifact set
//! (controller, repository pair, service pair, data-transfer objects, and
//! object-mapper profile) and patches the "injection list" files that wire
//! the new artifacts into the dependency-injection container.
//!
//! ## Architecture
//!
//! The library is organized into a few small modules:
//!
//! - **[`config`]** - JSON configuration merged over embedded defaults,
//!   addressed by dotted namespace paths and kind-checked up front
//! - **[`paths`]** - symbolic path tokens resolved to absolute, existing
//!   locations in the target project tree
//! - **[`extractor`]** - class body extraction by balanced `{`/`}` scanning
//! - **[`patcher`]** - placeholder insertion into `#region` … `#endregion`
//!   marked spans, indentation inferred from brace depth
//! - **[`generator`]** - one generator per artifact kind, composing the
//!   extractor, the patcher, and Askama templates
//! - **[`cli`]** - clap-based command orchestration
//!
//! ## Scope
//!
//! layergen is deliberately lexical: it scans brace nesting, it does not
//! parse C#. Generated files are never overwritten; re-running generation for
//! an existing model is a logged no-op. Injection-list files get a `.bak`
//! sibling before every mutation.
//!
//! ## Usage
//!
//! ```bash
//! layergen generate --model user
//! layergen patch
//! ```

pub mod cli;
pub mod config;
pub mod extractor;
pub mod generator;
pub mod patcher;
pub mod paths;
