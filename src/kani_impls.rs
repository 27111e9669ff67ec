//! Kani Arbitrary implementations and proof harnesses for the validators.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Scheme, validate_host, validate_port, validate_scheme};

/// Letters allowed at the start of a scheme
const SCHEME_START_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters allowed inside a scheme
const SCHEME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789+.-";

/// Characters allowed at the end of a scheme
const SCHEME_END_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

fn pick(chars: &[u8]) -> char {
    let idx: usize = kani::any();
    chars[idx % chars.len()] as char
}

impl kani::Arbitrary for Scheme {
    fn any() -> Self {
        // 1-6 chars for tractability
        let len: usize = kani::any();
        let len = 1 + (len % 6);

        let mut s = String::with_capacity(len);
        s.push(pick(SCHEME_START_CHARS));
        for _ in 2..len {
            s.push(pick(SCHEME_CHARS));
        }
        if len > 1 {
            s.push(pick(SCHEME_END_CHARS));
        }

        Scheme::parse(&s).expect("valid scheme by construction")
    }
}

#[kani::proof]
fn port_accepted_iff_in_range() {
    let port: i64 = kani::any();
    let result = validate_port(port);
    assert_eq!(result.is_ok(), (0..=65535).contains(&port));
    if let Ok(p) = result {
        assert_eq!(i64::from(p), port);
    }
}

#[kani::proof]
#[kani::unwind(8)]
fn arbitrary_scheme_revalidates() {
    let scheme: Scheme = kani::any();
    assert!(validate_scheme(scheme.as_str()).is_ok());
}

#[kani::proof]
#[kani::unwind(6)]
fn scheme_validation_never_panics() {
    let bytes: [u8; 4] = kani::any();
    if let Ok(s) = std::str::from_utf8(&bytes) {
        let _ = validate_scheme(s);
    }
}

#[kani::proof]
#[kani::unwind(10)]
fn host_validation_never_panics() {
    let bytes: [u8; 7] = kani::any();
    if let Ok(s) = std::str::from_utf8(&bytes) {
        let _ = validate_host(s);
    }
}
