//! Slipway - release-pipeline helpers for CI.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── keystore      # Recover the signing keystore secret
//! │   ├── downloads     # Generate the downloads page
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── normalize     # Base64 secret cleanup pipeline
//!     ├── keystore      # Strict decode and sanity checks
//!     ├── release       # Release metadata model
//!     ├── github        # gh-backed release source
//!     └── page          # Markdown page assembly
//! ```
//!
//! # Features
//!
//! - Forgiving normalization of base64 keystore secrets
//! - Strict, canonical decoding with size sanity checks
//! - Downloads page generation from GitHub releases via gh
//! - Mirrored download links for every published asset
pub mod cli;
pub mod core;
pub mod error;
