//! # Classlint-RS: Naming-Convention Linter for Stylesheets
//!
//! Checks class, variable and mixin names in SCSS/CSS sources against a
//! component naming grammar:
//!
//! - **Components** are camelCase: `myComponent`
//! - **Modifiers** follow `--`: `myComponent--primary`
//! - **Descendants** follow `-`: `myComponent-title`
//! - **States** adjoin a component with `is-`: `dropdown.is-active`
//! - **Utilities** and **JS hooks** are flat namespaces: `u-textTruncate`, `js-login`
//! - **Variables** and **mixins** end in `-<propertyName>-<variableName>`:
//!   `$dropdown-color-background`
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          API Layer                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Core          │  Detectors      │  Language  │  I/O         │
//! │ • Config       │ • Tokenizer     │ • SCSS     │ • Reports    │
//! │ • Discovery    │ • Grammar rules │   scanner  │              │
//! │ • Errors       │ • Reporter      │            │              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use classlint_rs::{ClasslintConfig, ClasslintEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = ClasslintEngine::new(ClasslintConfig::default())?;
//!     let report = engine.check_paths(&["./styles"]);
//!
//!     println!("{} of {} names passed", report.passed(), report.total());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core configuration, discovery and error types
pub mod core {
    //! Configuration, file discovery and shared error types.

    pub mod config;
    pub mod discovery;
    pub mod errors;
    pub mod file_utils;
}

// Naming grammar
pub mod detectors {
    //! Naming-convention detectors.

    pub mod naming;
}

// Stylesheet scanning
pub mod lang {
    //! Language-specific name extraction.

    pub mod scss;
}

// Reporting
pub mod io {
    //! Report rendering and output.

    pub mod reports;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::ClasslintEngine;
pub use api::results::LintReport;
pub use core::config::{ClasslintConfig, ReportFormat};
pub use core::errors::{ClasslintError, Result, ResultExt};
pub use detectors::naming::{NameToken, Reporter, RuleId, SelectorContext, TokenKind, Verdict};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
