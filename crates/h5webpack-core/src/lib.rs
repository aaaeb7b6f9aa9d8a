//! h5-webpack core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the h5-webpack
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          h5webpack-cli (CLI)            │
//! │  (flags, prompt, progress, next steps)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, CompletionLatch)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Renderer,   │
//! │  ProgressReporter)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    h5webpack-adapters (Infrastructure)  │
//! │ (LocalFilesystem, EmbeddedTemplates,    │
//! │  MiniJinjaRenderer)                     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Configuration, Manifest, naming, plan) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use h5webpack_core::prelude::*;
//!
//! let cfg = Configuration::builder()
//!     .stylesheet(StylesheetEngine::Less)
//!     .multiple_entry(true)
//!     .build();
//!
//! let service = ScaffoldService::new(store, renderer, filesystem, progress);
//! service.scaffold("my-app", &cfg, "./my-app".as_ref())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{Filesystem, ProgressReporter, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Configuration, ConfigurationBuilder, FileContent, Manifest, ScriptEngine,
        StylesheetEngine, TemplateBinding, app_name_or_fallback, create_app_name,
    };
    pub use crate::error::{H5Error, H5Result};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
