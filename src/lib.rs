//! # Shopdesk
//!
//! Client-side state core for a product-catalog manager. Screens render from
//! the state these modules derive; the transport layer, routing, and the DOM
//! are collaborators on the other side of a narrow contract.
//!
//! # Architecture: Three Independent Engines
//!
//! All non-trivial state in the catalog manager lives in one of three
//! engines. Data flows one way into each — raw collection plus criteria in,
//! derived view out — and no engine depends on another:
//!
//! ```text
//! 1. validate   raw field text      →  verdicts, slug, strength score
//! 2. catalog    products + criteria →  visible list + status counters
//! 3. gallery    images + selection  →  one displayed image, kept in sync
//!               or supplied URL        from both directions
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Re-derivation over bookkeeping**: each engine recomputes its view
//!   from its full input on every change. At catalog scale there is nothing
//!   worth caching, and derived state can never drift from its source.
//! - **Testability**: every derivation is a pure function (or a small state
//!   machine with value semantics), so unit tests need no DOM, no HTTP
//!   stubs, no fixtures.
//! - **Exclusive ownership**: each screen instantiates the engine state it
//!   needs. Nothing is shared mutably across screens, so there is no
//!   locking and no action-at-a-distance.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared domain types; wire-shape normalization (legacy bare-string images) happens here |
//! | [`validate`] | Field validators, slug generation, password-strength scoring |
//! | [`catalog`] | Filter-and-aggregate engine behind the dashboard |
//! | [`gallery`] | Image-viewer selection state, reconcilable by index or by URL |
//! | [`forms`] | Form-state machines (signup, product create/edit) built on `validate` |
//! | [`session`] | Explicit auth-session context object |
//! | [`remote`] | Transport contract: wire shapes, error-message extraction, stale-response guard |
//! | [`config`] | `shopdesk.toml` loading and validation |
//! | [`output`] | CLI output formatting for the `shopdesk` binary |
//!
//! # Design Decisions
//!
//! ## Normalize at the Boundary
//!
//! Legacy records store gallery entries as bare URL strings, newer ones as
//! `{url, alt}` objects. Both deserialize into [`types::Image`]; no code
//! past the serde boundary ever branches on shape.
//!
//! ## Validation Errors Stay Local
//!
//! [`validate::FieldError`] blocks submission in the form layer and never
//! reaches the network. [`remote::RemoteError`] covers the opposite
//! direction: server and transport failures, reduced to one display message
//! through the two error-body shapes the API produces. A failed remote call
//! leaves prior state intact — retrying is the user's decision, not this
//! core's.
//!
//! ## One Selection, Two Masters
//!
//! The gallery viewer's selection can be driven by index (clicks, keyboard)
//! or by URL (restoring a product's main image). [`gallery::GalleryView`]
//! owns the reconciliation, including the deliberately unsettled case where
//! the supplied URL names an image not in the list — a just-uploaded main
//! image, for instance.
//!
//! ## Stale Responses Are Discarded Loudly
//!
//! A response arriving after its screen was superseded or torn down must not
//! be applied. [`remote::RequestTracker`] ties responses to screen
//! generations and logs every discard at WARN.

pub mod catalog;
pub mod config;
pub mod forms;
pub mod gallery;
pub mod output;
pub mod remote;
pub mod session;
pub mod types;
pub mod validate;
