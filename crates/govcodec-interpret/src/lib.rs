//! # govcodec-interpret
//!
//! Turns decoded calldata into human-meaningful proposal actions:
//! type-aware value formatting, recipient classification, one-line
//! summaries, and the second-pass batch correlator that links stream
//! creation to stream funding.

pub mod action;
pub mod batch;
pub mod correlate;
pub mod format;
pub mod recipient;

pub use action::ActionDecoder;
pub use batch::{batch_summary, collect_recipients, decode_actions, descriptors_from_columns};
pub use correlate::correlate;
pub use format::{format_wei, AmountConventions, ValueFormatter};
pub use recipient::{is_recipient, recipient_role};
