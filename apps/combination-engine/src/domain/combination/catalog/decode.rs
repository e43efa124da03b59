//! Attribute decoding from the catalog source into template semantics.
//!
//! Encodings:
//! - `ratio`: a lone `+`/`-` is a sign constraint, any other literal an exact ratio.
//! - `strike` / `expiration`: the first character is a tie-group label.
//! - `strike_offset`: the literal's character count is the offset, negated
//!   when it starts with `-` (`"--"` is -2, `"+++"` is 3).
//! - `expiration_offset`: a trailing `d`/`m`/`q`/`y` makes a calendar delta
//!   whose count is the leading integer (1 when absent); otherwise the
//!   literal is an ordering offset decoded like `strike_offset`.
//!
//! Both offset attributes must be written as strings; a YAML number is
//! rejected because its written characters are gone.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::source::{CombinationSource, LegSource, OffsetLiteral};
use crate::domain::combination::errors::{CatalogError, LegDecodeError};
use crate::domain::combination::value_objects::{
    CalendarDelta, CalendarUnit, Cardinality, CombinationTemplate, ExpirationSpec, LegTemplate,
    RatioSign, RatioSpec, StrikeSpec,
};
use crate::domain::position::InstrumentType;

/// Decode one combination record.
pub(super) fn decode_combination(
    source: CombinationSource,
) -> Result<CombinationTemplate, CatalogError> {
    let CombinationSource {
        name,
        shortname,
        identifier,
        legs,
    } = source;

    let invalid = |message: &str| CatalogError::InvalidCombination {
        name: name.clone(),
        message: message.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if legs.leg.is_empty() {
        return Err(invalid("at least one leg is required"));
    }

    let cardinality = match legs.cardinality.as_str() {
        "fixed" | "multiple" if legs.mincount.is_some() => {
            return Err(invalid("mincount applies only to cardinality 'more'"));
        }
        "fixed" => Cardinality::Fixed,
        "multiple" => Cardinality::Multiple,
        "more" => {
            let Some(min_count) = legs.mincount else {
                return Err(invalid("cardinality 'more' requires mincount"));
            };
            if legs.leg.len() != 1 {
                return Err(invalid("cardinality 'more' takes exactly one leg"));
            }
            Cardinality::AtLeast { min_count }
        }
        other => {
            return Err(invalid(&format!(
                "unknown cardinality '{other}', expected fixed, more or multiple"
            )));
        }
    };

    let slots = legs
        .leg
        .iter()
        .enumerate()
        .map(|(index, leg)| {
            decode_leg(leg).map_err(|source| CatalogError::InvalidLeg {
                combination: name.clone(),
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CombinationTemplate::new(
        name,
        shortname,
        identifier,
        cardinality,
        slots,
    ))
}

/// Decode one leg record.
pub(super) fn decode_leg(source: &LegSource) -> Result<LegTemplate, LegDecodeError> {
    let instrument_type = decode_type(
        source
            .instrument_type
            .as_deref()
            .ok_or(LegDecodeError::MissingType)?,
    )?;

    let ratio = source
        .ratio
        .as_deref()
        .map(decode_ratio)
        .transpose()?
        .unwrap_or_default();

    let strike = match (source.strike.as_deref(), source.strike_offset.as_ref()) {
        (Some(_), Some(_)) => {
            return Err(LegDecodeError::ConflictingAttributes {
                first: "strike",
                second: "strike_offset",
            });
        }
        (Some(label), None) => StrikeSpec::Label(decode_label(label, "strike")?),
        (None, Some(offset)) => {
            StrikeSpec::Offset(decode_length_offset(offset_text(offset, "strike_offset")?))
        }
        (None, None) => StrikeSpec::Unset,
    };

    let expiration = match (
        source.expiration.as_deref(),
        source.expiration_offset.as_ref(),
    ) {
        (Some(_), Some(_)) => {
            return Err(LegDecodeError::ConflictingAttributes {
                first: "expiration",
                second: "expiration_offset",
            });
        }
        (Some(label), None) => ExpirationSpec::Label(decode_label(label, "expiration")?),
        (None, Some(offset)) => {
            decode_expiration_offset(offset_text(offset, "expiration_offset")?)?
        }
        (None, None) => ExpirationSpec::Unset,
    };

    Ok(LegTemplate {
        instrument_type,
        ratio,
        strike,
        expiration,
    })
}

fn offset_text<'a>(
    literal: &'a OffsetLiteral,
    attribute: &'static str,
) -> Result<&'a str, LegDecodeError> {
    match literal {
        OffsetLiteral::Text(text) => Ok(text),
        OffsetLiteral::Number(number) => Err(LegDecodeError::UnquotedOffset {
            attribute,
            literal: number.clone(),
        }),
    }
}

fn decode_type(text: &str) -> Result<InstrumentType, LegDecodeError> {
    let code = text.chars().next().ok_or(LegDecodeError::MissingType)?;
    InstrumentType::from_code(code)
        .ok_or_else(|| LegDecodeError::UnknownInstrumentType(text.to_string()))
}

fn decode_ratio(text: &str) -> Result<RatioSpec, LegDecodeError> {
    match text {
        "+" => Ok(RatioSpec::Sign(RatioSign::PositiveOnly)),
        "-" => Ok(RatioSpec::Sign(RatioSign::NegativeOnly)),
        literal => Decimal::from_str(literal)
            .or_else(|_| Decimal::from_scientific(literal))
            .map(RatioSpec::Exact)
            .map_err(|_| LegDecodeError::InvalidRatio(literal.to_string())),
    }
}

fn decode_label(text: &str, attribute: &'static str) -> Result<char, LegDecodeError> {
    text.chars()
        .next()
        .ok_or(LegDecodeError::EmptyTieGroup { attribute })
}

/// Offset whose magnitude is the literal's length.
fn decode_length_offset(text: &str) -> i32 {
    let length = text.chars().count() as i32;
    if text.starts_with('-') { -length } else { length }
}

fn decode_expiration_offset(text: &str) -> Result<ExpirationSpec, LegDecodeError> {
    let unit = text.chars().last().and_then(CalendarUnit::from_suffix);
    let Some(unit) = unit else {
        return Ok(ExpirationSpec::Offset(decode_length_offset(text)));
    };

    // Unit suffixes are ASCII, so the count prefix ends one byte early.
    let prefix = &text[..text.len() - 1];
    let count = if prefix.is_empty() {
        1
    } else {
        prefix
            .parse::<i32>()
            .map_err(|_| LegDecodeError::InvalidExpirationOffset(text.to_string()))?
    };

    Ok(ExpirationSpec::Delta(CalendarDelta::new(count, unit)))
}
