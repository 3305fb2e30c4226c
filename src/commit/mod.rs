// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message handling.
//!
//! This module splits messages into lines and reads them from the places a
//! message can come from: a file, standard input, a raw commit object, or git.

mod message;
pub mod raw;
pub mod source;

pub use message::{clean_message, is_empty_message, Line, LineSequence};
pub use raw::RawCommit;
pub use source::{load_messages, LoadedMessage, MessageSource, ReadOptions};
