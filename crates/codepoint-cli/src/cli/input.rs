use std::io::Read;

use anyhow::{bail, Context};
use codepoint_core::boundary::{utf16, utf8};

use super::args::{Encoding, TextArgs};

/// Input text in the storage encoding the operation runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Utf8(String),
    Utf16(Vec<u16>),
}

impl Input {
    pub fn read(args: &TextArgs, encoding: Encoding) -> anyhow::Result<Self> {
        let raw = if args.text == "-" {
            read_stdin()?
        } else {
            args.text.clone()
        };

        if args.units {
            return parse_units(&raw).map(Self::Utf16);
        }
        Ok(match encoding {
            Encoding::Utf8 => Self::Utf8(raw),
            Encoding::Utf16 => Self::Utf16(raw.encode_utf16().collect()),
        })
    }

    pub fn encoding(&self) -> Encoding {
        match self {
            Self::Utf8(_) => Encoding::Utf8,
            Self::Utf16(_) => Encoding::Utf16,
        }
    }

    /// Storage units: bytes for UTF-8, code units for UTF-16.
    pub fn unit_len(&self) -> usize {
        match self {
            Self::Utf8(text) => text.len(),
            Self::Utf16(units) => units.len(),
        }
    }

    pub fn scalar_len(&self) -> usize {
        match self {
            Self::Utf8(text) => utf8::scalar_len(text),
            Self::Utf16(units) => utf16::scalar_len(units),
        }
    }

    /// Lossy rendering; unpaired surrogates become U+FFFD.
    pub fn to_display(&self) -> String {
        match self {
            Self::Utf8(text) => text.clone(),
            Self::Utf16(units) => String::from_utf16_lossy(units),
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

fn parse_units(raw: &str) -> anyhow::Result<Vec<u16>> {
    raw.split_whitespace()
        .map(|token| {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            if digits.is_empty() || digits.len() > 4 {
                bail!("invalid UTF-16 code unit {token:?}: expected 1-4 hex digits");
            }
            u16::from_str_radix(digits, 16)
                .with_context(|| format!("invalid UTF-16 code unit {token:?}"))
        })
        .collect()
}
