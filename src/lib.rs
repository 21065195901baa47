//! Per-language resource dispatch and multi-stage pipeline orchestration
//! for request-driven NLP operations: tokenization, dependency parsing,
//! frame/intent extraction, and location mention resolution.
//!
//! Each supported language is backed by its own set of model resources
//! (tokenizer, morpho-preprocessor, encoder chain, parser, embeddings),
//! held in an immutable [`ResourceRegistry`] built once at startup. A
//! request resolves its governing language ([`LanguageResolver`]), looks up
//! that language's resources, and runs the operation's stage chain strictly
//! in sequence, threading each stage's output into the next.
//!
//! The numerical components behind the seams in [`components`] are opaque
//! collaborators; this crate owns the dispatch policy, the stage contract,
//! and the error taxonomy — not the models.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use polyglot_nlp::components::RuleTokenizer;
//! use polyglot_nlp::{LanguageCode, LanguageResolver, ResourceRegistry};
//! use polyglot_nlp::ops::Tokenize;
//!
//! let registry = Arc::new(
//!     ResourceRegistry::builder()
//!         .tokenizer("en", RuleTokenizer)
//!         .build()
//!         .unwrap(),
//! );
//! let tokenize = Tokenize::new(registry, LanguageResolver::new());
//!
//! let sentences = tokenize
//!     .run("Book a flight to Paris.", Some(&LanguageCode::new("en")))
//!     .unwrap();
//! assert_eq!(sentences.len(), 1);
//! ```
//!
//! # Concurrency
//!
//! The registry is read-only after construction, so concurrent requests
//! share it through an `Arc` without locking. All per-request state is
//! owned by that request's execution. Independent extractor runs in the
//! frame fan-out are parallelized; everything else is sequential within a
//! request.

pub mod components;
pub mod encoder;
pub mod error;
pub mod ops;
pub mod registry;
pub mod resolver;
pub mod response;
pub mod types;

pub use error::{ErrorDiagnostic, NlpError, Result};
pub use registry::{RegistryBuilder, ResourceRegistry};
pub use resolver::LanguageResolver;
pub use types::{CandidateEntity, LanguageCode, Sentence, Token};
