//! Catalog source model.
//!
//! Mirrors the hierarchical rule source attribute-for-attribute. Values stay
//! textual here; [`super::decode`] turns them into template semantics.

use serde::{Deserialize, Deserializer};

/// Root of the rule source.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct CatalogSource {
    /// Combination records in priority order.
    #[serde(default)]
    pub combinations: Vec<CombinationSource>,
}

/// One `combination` record.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct CombinationSource {
    pub name: String,
    #[serde(default)]
    pub shortname: String,
    #[serde(default)]
    pub identifier: String,
    pub legs: LegsSource,
}

/// The `legs` block of a combination record.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct LegsSource {
    pub cardinality: String,
    #[serde(default)]
    pub mincount: Option<usize>,
    #[serde(default)]
    pub leg: Vec<LegSource>,
}

/// One `leg` record. Absent attributes stay `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct LegSource {
    #[serde(rename = "type", default, deserialize_with = "attribute")]
    pub instrument_type: Option<String>,
    #[serde(default, deserialize_with = "attribute")]
    pub ratio: Option<String>,
    #[serde(default, deserialize_with = "attribute")]
    pub strike: Option<String>,
    #[serde(default, deserialize_with = "offset_literal")]
    pub strike_offset: Option<OffsetLiteral>,
    #[serde(default, deserialize_with = "attribute")]
    pub expiration: Option<String>,
    #[serde(default, deserialize_with = "offset_literal")]
    pub expiration_offset: Option<OffsetLiteral>,
}

/// An offset attribute as written.
///
/// Offsets decode by literal length, and a YAML number no longer carries
/// the characters it was written with (`+1`, `007`, `1.0`), so numbers are
/// kept apart from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum OffsetLiteral {
    Text(String),
    Number(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Read an attribute written as a YAML string or number as its text.
fn attribute<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
    }))
}

fn offset_literal<'de, D>(deserializer: D) -> Result<Option<OffsetLiteral>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => OffsetLiteral::Text(text),
        Scalar::Integer(value) => OffsetLiteral::Number(value.to_string()),
        Scalar::Float(value) => OffsetLiteral::Number(value.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_attributes_read_as_text() {
        let yaml = r#"
type: C
ratio: -2
strike_offset: "--"
expiration_offset: 3m
"#;
        let leg: LegSource = serde_yaml_bw::from_str(yaml).unwrap();

        assert_eq!(leg.instrument_type.as_deref(), Some("C"));
        assert_eq!(leg.ratio.as_deref(), Some("-2"));
        assert_eq!(leg.strike_offset, Some(OffsetLiteral::Text("--".to_string())));
        assert_eq!(leg.expiration_offset, Some(OffsetLiteral::Text("3m".to_string())));
        assert!(leg.strike.is_none());
        assert!(leg.expiration.is_none());
    }

    #[test]
    fn float_ratio_reads_as_text() {
        let leg: LegSource = serde_yaml_bw::from_str("type: P\nratio: 0.5\n").unwrap();
        assert_eq!(leg.ratio.as_deref(), Some("0.5"));
    }

    #[test]
    fn numeric_offsets_stay_numbers() {
        let leg: LegSource =
            serde_yaml_bw::from_str("type: C\nstrike_offset: +1\nexpiration_offset: 1.0\n").unwrap();
        assert!(matches!(leg.strike_offset, Some(OffsetLiteral::Number(_))));
        assert!(matches!(leg.expiration_offset, Some(OffsetLiteral::Number(_))));
    }

    #[test]
    fn unknown_leg_attribute_is_rejected() {
        let result: Result<LegSource, _> = serde_yaml_bw::from_str("type: C\nstrikes: a\n");
        assert!(result.is_err());
    }

    #[test]
    fn combination_record_shape() {
        let yaml = r#"
combinations:
  - name: Long Call
    shortname: LC
    identifier: long_call
    legs:
      cardinality: fixed
      leg:
        - { type: C, ratio: "+" }
"#;
        let source: CatalogSource = serde_yaml_bw::from_str(yaml).unwrap();
        assert_eq!(source.combinations.len(), 1);

        let combination = &source.combinations[0];
        assert_eq!(combination.name, "Long Call");
        assert_eq!(combination.shortname, "LC");
        assert_eq!(combination.legs.cardinality, "fixed");
        assert_eq!(combination.legs.mincount, None);
        assert_eq!(combination.legs.leg.len(), 1);
        assert_eq!(combination.legs.leg[0].ratio.as_deref(), Some("+"));
    }
}
