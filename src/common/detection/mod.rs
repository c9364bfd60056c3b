//! File kind detection.
//!
//! Detection runs a fixed, ordered table of magic-number rules over the head
//! of a file. Only the bytes needed to tell formats apart are inspected: the
//! first 512 bytes cover nearly everything, while TAR and ISO 9660 need
//! offsets 257 and 32769 respectively. Short buffers never fail; they just
//! stop matching the deeper rules.

// Submodule declarations
pub mod container;
pub mod functions;
pub mod rules;
pub mod types;
pub mod utils;

// Re-exports
pub use container::refine_zip_kind;
pub use functions::{
    MIN_HEAD_LEN, detect_file_kind, detect_file_kind_from_bytes, detect_file_kind_from_reader,
    read_head,
};
pub use rules::{Probe, SIGNATURE_RULES, SignatureRule, matching_rule, sniff_signature};
pub use types::{FileKind, UnknownTag};
