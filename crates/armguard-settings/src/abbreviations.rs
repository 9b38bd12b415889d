use anyhow::Context;
use armguard_domain::model::AbbreviationMap;

/// Parse `abbreviations.json`: a flat object of abbreviation -> full term.
///
/// Non-string values are rejected rather than coerced.
pub fn parse_abbreviations_json(input: &str) -> anyhow::Result<AbbreviationMap> {
    let map: AbbreviationMap =
        serde_json::from_str(input).context("abbreviations must be a JSON object of strings")?;
    Ok(map)
}
