//! Byte-level entry points
//!
//! Same metrics and sentinels as the crate-root functions, for callers holding
//! raw bytes in a declared encoding. Decoding failures are the only errors.

use crate::algorithms::encoding::{decode_text, SourceEncoding};
use crate::error::Result;
use crate::options::ComparisonOptions;
use std::borrow::Cow;

type DecodedPair<'a, 'b> = (Option<Cow<'a, str>>, Option<Cow<'b, str>>);

/// Decode both inputs, keeping absent inputs absent
fn decode_pair<'a, 'b>(
    a: Option<&'a [u8]>,
    b: Option<&'b [u8]>,
    encoding: SourceEncoding,
) -> Result<DecodedPair<'a, 'b>> {
    let a = a.map(|bytes| decode_text(bytes, encoding)).transpose()?;
    let b = b.map(|bytes| decode_text(bytes, encoding)).transpose()?;
    Ok((a, b))
}

pub fn sorensen_dice_coefficient_bytes(
    a: Option<&[u8]>,
    b: Option<&[u8]>,
    encoding: SourceEncoding,
    ignore_case: bool,
) -> Result<f64> {
    let (a, b) = decode_pair(a, b, encoding)?;
    Ok(crate::sorensen_dice_coefficient(
        a.as_deref(),
        b.as_deref(),
        ignore_case,
    ))
}

pub fn jaro_similarity_bytes(
    a: Option<&[u8]>,
    b: Option<&[u8]>,
    encoding: SourceEncoding,
    ignore_case: bool,
) -> Result<f64> {
    let (a, b) = decode_pair(a, b, encoding)?;
    Ok(crate::jaro_similarity(a.as_deref(), b.as_deref(), ignore_case))
}

pub fn jaro_winkler_similarity_bytes(
    a: Option<&[u8]>,
    b: Option<&[u8]>,
    encoding: SourceEncoding,
    options: ComparisonOptions,
) -> Result<f64> {
    let (a, b) = decode_pair(a, b, encoding)?;
    Ok(crate::jaro_winkler_similarity(a.as_deref(), b.as_deref(), options))
}

pub fn jaro_winkler_distance_bytes(
    a: Option<&[u8]>,
    b: Option<&[u8]>,
    encoding: SourceEncoding,
    options: ComparisonOptions,
) -> Result<f64> {
    let (a, b) = decode_pair(a, b, encoding)?;
    Ok(crate::jaro_winkler_distance(a.as_deref(), b.as_deref(), options))
}

pub fn levenshtein_distance_bytes(
    a: Option<&[u8]>,
    b: Option<&[u8]>,
    encoding: SourceEncoding,
    ignore_case: bool,
) -> Result<usize> {
    let (a, b) = decode_pair(a, b, encoding)?;
    Ok(crate::levenshtein_distance(a.as_deref(), b.as_deref(), ignore_case))
}

pub fn damerau_levenshtein_distance_bytes(
    a: Option<&[u8]>,
    b: Option<&[u8]>,
    encoding: SourceEncoding,
    ignore_case: bool,
) -> Result<usize> {
    let (a, b) = decode_pair(a, b, encoding)?;
    Ok(crate::damerau_levenshtein_distance(
        a.as_deref(),
        b.as_deref(),
        ignore_case,
    ))
}
