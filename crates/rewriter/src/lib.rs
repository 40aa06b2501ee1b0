//! # Incpath Rewriter
//!
//! Include-path normalization for C source trees that must build against
//! a single flat include search root.
//!
//! ## Pipeline
//!
//! ```text
//! Input root
//!     │
//!     ├──> Source Scanner (deterministic walk)
//!     │      └─> .h files / .c + .h files
//!     │
//!     ├──> Header Index (basename -> root-relative path)
//!     │      └─> first match wins, collisions recorded
//!     │
//!     └──> Tree Transformer
//!            ├─> Include Rewriter (overrides, then index)
//!            └─> Mirrored output tree
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use incpath_rewriter::{TransformConfig, TreeTransformer};
//!
//! fn main() -> incpath_rewriter::Result<()> {
//!     let config = TransformConfig::new("projlib", "out/projlib");
//!     let stats = TreeTransformer::new(config).run()?;
//!
//!     println!("Rewrote {} includes in {} files", stats.includes_rewritten, stats.files);
//!     Ok(())
//! }
//! ```

mod error;
mod index;
mod overrides;
mod rewrite;
mod scanner;
mod stats;
mod transform;

pub use error::{Result, RewriterError};
pub use index::{Collision, HeaderEntry, HeaderIndex};
pub use overrides::OverrideTable;
pub use rewrite::{IncludeRewriter, RewriteOutcome};
pub use scanner::SourceScanner;
pub use stats::RunStats;
pub use transform::{TransformConfig, TreeTransformer};
