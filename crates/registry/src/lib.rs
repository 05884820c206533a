//! Typed, handle-based configuration registry.
//!
//! Declare options once, resolve them from the environment (or any injected
//! `EnvSource`) with a single `Registry::init` call, then read them through
//! the opaque `Handle`s it returns:
//!
//! ```
//! use std::collections::HashMap;
//! use envreg::{OptionDecl, Registry, ValueType};
//!
//! let env: HashMap<String, String> = [("BAZ".to_string(), "hello".to_string())].into();
//! let registry = Registry::with_source(env);
//!
//! let handles = registry
//!     .init(&[
//!         OptionDecl::required("BAZ", ValueType::String),
//!         OptionDecl::optional("BAR", 10),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(registry.get_string(handles[0]).unwrap(), "hello");
//! assert_eq!(registry.get_int(handles[1]).unwrap(), 10);
//! ```

mod docs;
mod dotenv;
mod error;
mod handle;
mod option;
mod registry;
mod source;
mod store;
mod value;

pub use docs::{DocFormat, MASK, doc_string, render};
pub use dotenv::{DOTENV_DISABLED_VAR, dotenv_disabled, load_dotenv, load_dotenv_from};
pub use error::RegistryError;
pub use handle::{Handle, HandleFault};
pub use option::OptionDecl;
pub use registry::{Registry, RegistryState};
pub use source::{EnvSource, FnSource, ProcessEnv};
pub use value::{Value, ValueType};
