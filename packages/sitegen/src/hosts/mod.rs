//! Hosting provider adapters.
//!
//! Each adapter packages a [`GeneratedSite`] into its provider's submission
//! shape and implements [`StaticHost`] so the deployer can iterate a
//! uniform list instead of branching on provider names. A missing
//! credential is reported at publish time, exactly like a transport
//! failure, so the deployer falls back to the next host.
//!
//! [`GeneratedSite`]: crate::types::site::GeneratedSite
//! [`StaticHost`]: crate::traits::host::StaticHost

#[cfg(feature = "netlify")]
pub mod netlify;

#[cfg(feature = "vercel")]
pub mod vercel;

#[cfg(feature = "netlify")]
pub use netlify::NetlifyHost;

#[cfg(feature = "vercel")]
pub use vercel::VercelHost;
