//! Questionnaire-Driven Website Generation Library
//!
//! Turns a finalized questionnaire into a three-part website artifact
//! (markup, stylesheet, script) through one language-model call, and
//! publishes that artifact through an ordered list of hosting providers
//! with sequential fallback.
//!
//! # Design
//!
//! - External collaborators (model, hosts, document store) sit behind
//!   traits and are injected explicitly, never reached through globals.
//! - Extraction is total: a completion with missing or malformed code
//!   blocks degrades to empty strings, never an error.
//! - Deployment is strictly sequential: one generation call, one host
//!   attempt at a time, first success wins, and only exhausting every
//!   host surfaces a failure.
//! - No component retries automatically; a retry is a fresh caller-driven
//!   resubmission.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sitegen::{default_questions, generate_site, Deployer, Questionnaire};
//! use sitegen::testing::{MockHost, MockModel};
//!
//! let mut flow = Questionnaire::new(default_questions());
//! // ... walk questions, record answers ...
//! let answers = flow.finalize();
//!
//! let model = MockModel::completing("```html\n<h1>hi</h1>\n```");
//! let site = generate_site(&model, &answers).await?;
//!
//! let deployer = Deployer::new()
//!     .with_host(MockHost::publishing("a", "https://a.example/site"));
//! let deployment = deployer.deploy(&site).await?;
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types (site, answers, projects)
//! - [`questionnaire`] - Fixed question list and linear flow
//! - [`extract`] - Fenced code block extraction
//! - [`pipeline`] - Prompt building and the generation call
//! - [`deploy`] - Ordered-fallback deployment orchestrator
//! - [`traits`] - Seams for the model, hosts, and project store
//! - [`stores`] - Project store implementations
//! - [`export`] - Zip archive export/import
//! - [`testing`] - Mock implementations for testing

pub mod deploy;
pub mod error;
pub mod export;
pub mod extract;
pub mod pipeline;
pub mod questionnaire;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "anthropic")]
pub mod ai;

pub mod hosts;

// Re-export core types at crate root
pub use error::{HostAttempt, Result, SitegenError};
pub use types::{
    answers::{AnswerSet, AnswerValue},
    project::{Project, User},
    site::{GeneratedSite, INDEX_FILE, SCRIPT_FILE, STYLES_FILE},
};

pub use deploy::{Deployer, Deployment};
pub use export::{read_archive, write_archive};
pub use extract::extract_code;
pub use pipeline::{build_user_prompt, generate_site, MAX_OUTPUT_TOKENS, SYSTEM_PROMPT};
pub use questionnaire::{default_questions, Question, QuestionKind, Questionnaire, Step};
pub use stores::MemoryProjectStore;
pub use traits::{CompletionModel, ProjectStore, StaticHost};

#[cfg(feature = "anthropic")]
pub use ai::AnthropicModel;

#[cfg(feature = "netlify")]
pub use hosts::NetlifyHost;

#[cfg(feature = "vercel")]
pub use hosts::VercelHost;
