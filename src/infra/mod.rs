//! Import parsing, fingerprints, markup rendering, file I/O

mod depth;
mod enex;
mod enml;
mod fingerprint;
mod fs;

pub use depth::MAX_DEPTH;
pub use enex::{ParseError, parse};
pub use enml::to_plain_text;
pub use fingerprint::{FINGERPRINT_HEX_LEN, Fingerprint, FingerprintError};
pub use fs::{FsError, read_bytes, read_snapshot, write_atomic};
