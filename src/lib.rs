//! # colorme - Interactive CSS `color()` Builder
//!
//! Session state for a color builder: a base color, a list of adjusters the
//! user toggles and edits, and the resulting `color()` expression and output
//! color. The color math lives in the [`colorfn`] crate; this crate wires it
//! together, persists the short-name preference and sets up logging.
//!
//! ## Quick Start
//!
//! ```rust
//! use colorme::{AdjusterEdit, Session};
//!
//! let mut session = Session::with_defaults().unwrap();
//! assert!(session.set_base_color("#b577f2"));
//!
//! session
//!     .edit_adjuster("alphaValue", &AdjusterEdit::SetValue("60".to_string()))
//!     .unwrap();
//!
//! assert_eq!(session.expression(), "color(#b577f2 alpha(60%))");
//! assert_eq!(session.output_display(), "rgba(181, 119, 242, 0.6)");
//! ```
//!
//! ## Modules
//!
//! - [`session`]: The [`Session`] state holder
//! - [`store`]: The injected preference store
//! - [`config`]: Default base color and preference names
//! - [`log_init`]: File logger setup
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod log_init;
pub mod session;
pub mod store;

pub use colorfn;
pub use colorfn::{AdjusterEdit, CanonicalColor, ColorFormat, ExpressionEvaluator};
pub use config::SessionConfig;
pub use error::{ColorMeError, Result};
pub use session::Session;
pub use store::{MemoryStore, PreferenceStore};
