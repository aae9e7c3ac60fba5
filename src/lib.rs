//! Multilingual FAQ service.
//!
//! Question text is translated into every supported secondary language when a
//! record is saved, and resolved per language through a read-through cache
//! when it is read, both per record and per whole list.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod state;
