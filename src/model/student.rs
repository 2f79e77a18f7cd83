use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, num::ParseIntError, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Opaque student identifier assigned by the store on insert.
///
/// Travels over the wire as a string (`"_id": "42"`) so clients never do
/// arithmetic on it. Only the store hands out new values; everything else
/// either parses one from a path segment or copies one it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(i32);

impl StudentId {
    #[cfg(feature = "server")]
    pub(crate) fn from_store(id: i32) -> Self {
        Self(id)
    }

    #[cfg(feature = "server")]
    pub(crate) fn into_store(self) -> i32 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Self)
    }
}

impl Serialize for StudentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        String::deserialize(deserializer)?
            .parse::<StudentId>()
            .map_err(D::Error::custom)
    }
}

/// A stored student record as returned by every gateway response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    #[serde(rename = "_id")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: StudentId,
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub department: String,
    pub year: i32,
}

/// Request body for create and update.
///
/// Every field is optional on the wire: create rejects missing fields with a
/// validation error, update keeps the stored value for whatever is absent.
/// `rollNumber` accepts either a JSON string or a JSON number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StudentFieldsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_roll_number"
    )]
    pub roll_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Response body of create and update: `{ message, student }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StudentMutationDto {
    pub message: String,
    pub student: StudentDto,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RollNumberInput {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

fn deserialize_roll_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RollNumberInput>::deserialize(deserializer)?;

    Ok(value.map(|input| match input {
        RollNumberInput::Text(text) => text,
        RollNumberInput::Integer(number) => number.to_string(),
        RollNumberInput::Decimal(number) => number.to_string(),
    }))
}
