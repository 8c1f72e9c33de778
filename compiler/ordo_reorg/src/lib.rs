//! Ordo Reorganizer
//!
//! Canonical member ordering for a single class or struct body.
//!
//! # Architecture
//!
//! One pass over the direct members of a type body:
//!
//! 1. **Classify**: file every member under one of eleven kinds
//! 2. **Track groups**: a `[Header("...")]` label opens a group that the
//!    following unlabeled fields join
//! 3. **Sort**: within each section by access, group, exposure and name
//! 4. **Relocate labels**: move each group's label onto its new first member
//! 5. **Space groups**: blank line after a group's exposed fields
//! 6. **Assemble**: concatenate sections in canonical order
//!
//! Member bodies, initializers and statements are never touched; only member
//! order, section-annotation placement and the trailing trivia of exposed
//! fields change.
//!
//! # Modules
//!
//! - [`classify`]: Member classification
//! - [`group`]: Section-annotation group tracking
//! - [`sort`]: Ordering within a section
//! - [`relocate`]: Section label relocation
//! - [`spacing`]: Group separators
//! - [`assemble`]: Section table and canonical concatenation
//!
//! # Debugging
//!
//! Enable tracing with environment variables:
//! - `RUST_LOG=ordo_reorg=debug` - One summary line per type body
//! - `RUST_LOG=ordo_reorg=trace` - Every relocated label and inserted separator

pub mod assemble;
pub mod classify;
mod config;
mod error;
pub mod group;
mod handle;
mod kind;
mod pipeline;
pub mod relocate;
pub mod sort;
pub mod spacing;

pub use classify::{classify_member, Classification};
pub use config::{GroupScope, ReorganizeConfig, DEFAULT_LIFECYCLE_METHODS};
pub use error::ReorganizeError;
pub use handle::{MemberHandle, NodeArena, NodeId};
pub use kind::{MemberKind, Section};
pub use pipeline::{reorganize, reorganize_with_report, ReorganizeReport, Reorganized};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ordo_reorg=debug` or `RUST_LOG=ordo_reorg=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
