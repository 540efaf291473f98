// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Canonical byte encodings for memoized arguments.
//!
//! The dedup cache keys every memoized call on the bytes produced here, so
//! the encoding must be a function of the logical value only: equal values
//! encode identically, different values encode differently. Every variable
//! length piece is length-prefixed and every enum carries a discriminant
//! byte, which makes the encoding injective without relying on any
//! serializer's incidental output.
//!
//! Format summary:
//!
//! | Shape       | Encoding                                   |
//! |-------------|--------------------------------------------|
//! | `bool`      | `0x00` / `0x01`                            |
//! | `str`       | u64 LE byte length, then UTF-8 bytes       |
//! | `Option<T>` | `0x00`, or `0x01` then `T`                 |
//! | `[T]`       | u64 LE element count, then each element    |
//! | structs     | fields in declaration order                |
//! | `Output`    | `0x00` messages / `0x01` goals, then list  |

use crate::types::{Annotations, Goal, Hypothesis, Message, Output};

/// Values that can be written as canonical, order-stable bytes.
pub trait Canonical {
    fn write_canonical(&self, out: &mut Vec<u8>);

    fn to_canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(64);
        self.write_canonical(&mut out);
        out
    }
}

fn write_len(out: &mut Vec<u8>, len: usize) {
    out.extend_from_slice(&(len as u64).to_le_bytes());
}

impl Canonical for bool {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        out.push(u8::from(*self));
    }
}

impl Canonical for str {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        write_len(out, self.len());
        out.extend_from_slice(self.as_bytes());
    }
}

impl Canonical for String {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        self.as_str().write_canonical(out);
    }
}

impl<T: Canonical> Canonical for Option<T> {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        match self {
            None => out.push(0),
            Some(value) => {
                out.push(1);
                value.write_canonical(out);
            }
        }
    }
}

impl<T: Canonical> Canonical for [T] {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        write_len(out, self.len());
        for item in self {
            item.write_canonical(out);
        }
    }
}

impl<T: Canonical> Canonical for Vec<T> {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        self.as_slice().write_canonical(out);
    }
}

impl<T: Canonical + ?Sized> Canonical for &T {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        (**self).write_canonical(out);
    }
}

impl<A: Canonical, B: Canonical> Canonical for (A, B) {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        self.0.write_canonical(out);
        self.1.write_canonical(out);
    }
}

impl Canonical for Hypothesis {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        self.names.write_canonical(out);
        self.body.write_canonical(out);
        self.ty.write_canonical(out);
    }
}

impl Canonical for Goal {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        self.hypotheses.write_canonical(out);
        self.conclusion.write_canonical(out);
        self.name.write_canonical(out);
    }
}

impl Canonical for Message {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        self.contents.write_canonical(out);
    }
}

impl Canonical for Output {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        match self {
            Output::MessageList { messages } => {
                out.push(0);
                messages.write_canonical(out);
            }
            Output::GoalList { goals } => {
                out.push(1);
                goals.write_canonical(out);
            }
        }
    }
}

impl Canonical for Annotations {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        self.fails.write_canonical(out);
        self.unfold.write_canonical(out);
    }
}
