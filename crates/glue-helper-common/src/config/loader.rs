use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Integer(u64),
}

/// The number of digits in an AWS account ID.
const ACCOUNT_ID_DIGITS: usize = 12;

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Deserializes an optional string where the empty string means [`None`].
///
/// Environment variables are parsed by figment, so a numeric value arrives
/// as an integer and is accepted here as well.
pub fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = match Scalar::deserialize(deserializer)? {
        Scalar::String(value) => value,
        Scalar::Integer(value) => value.to_string(),
    };
    Ok(non_empty(value))
}

/// Deserializes an optional AWS account ID where the empty string means [`None`].
///
/// An account ID read from the environment is parsed by figment as an
/// integer, which drops leading zeros. Account IDs always have 12 digits,
/// so integers are zero-padded back to that width.
pub fn deserialize_account_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::String(value) => Ok(non_empty(value)),
        Scalar::Integer(value) => {
            let value = format!("{value:0width$}", width = ACCOUNT_ID_DIGITS);
            if value.len() > ACCOUNT_ID_DIGITS {
                return Err(serde::de::Error::custom(format!(
                    "invalid AWS account ID: {value}"
                )));
            }
            Ok(Some(value))
        }
    }
}
