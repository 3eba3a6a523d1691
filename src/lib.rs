//! # iniconf
//!
//! A parser, editor and serializer for INI configuration files.
//!
//! INI files are made of bracketed section headers, `key = value` lines,
//! comments and blank lines. This crate loads them into a [`Document`], lets
//! you read and change values, and writes them back out with comments, blank
//! lines and key order preserved.
//!
//! ## Features
//!
//! - **Strict by default**: data before the first header, empty names,
//!   duplicate sections and duplicate keys are reported as errors
//! - **Lenient mode**: [`ParseOptions::permissive`] accepts duplicates, empty
//!   keys and `#` comments
//! - **Round-trip fidelity**: comments and blank lines survive a load/save cycle
//! - **Precise diagnostics**: every [`IniError`] raised while loading carries
//!   the offending line and its line number
//! - **File helpers**: load and save `.ini` files with extension checks
//!
//! ## Example
//!
//! ```rust
//! use iniconf::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = Document::parse(r#"
//! ; service settings
//! [server]
//! host = localhost
//! port = 8080
//!
//! [client]
//! timeout = 30
//! "#)?;
//!
//! assert_eq!(doc.section_names(), &["server", "client"]);
//! assert_eq!(doc.get("server", "port"), Some("8080"));
//! assert_eq!(doc.get("client", "retries"), None);
//!
//! doc.set("client", "retries", "3")?;
//! assert!(doc.serialize().contains("retries = 3"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use iniconf::{Document, IniError};
//!
//! let err = Document::parse("[a]\nkey = 1\nkey = 2").unwrap_err();
//! assert!(matches!(err, IniError::DuplicateKey { .. }));
//! assert_eq!(err.line_number(), Some(3));
//! ```
//!
//! ## Lenient Parsing
//!
//! ```rust
//! use iniconf::{Document, ParseOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = Document::with_options(ParseOptions::permissive());
//! doc.load_from_str("# legacy file\n[a]\nkey = 1\nkey = 2\n")?;
//! assert_eq!(doc.get("a", "key"), Some("2"));
//! # Ok(())
//! # }
//! ```

// Module declarations
mod document;
mod error;
mod file;
mod options;
mod parser;
mod section;

// Public API exports
pub use document::Document;
pub use error::{IniError, ParseResult};
pub use file::INI_EXTENSION;
pub use options::ParseOptions;
pub use section::{LineRecord, Section};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
