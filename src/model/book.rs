use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// External representation of a book.
///
/// Optional attributes serialize as `null` rather than being omitted so clients always see
/// the full field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub pages: Option<String>,
    pub edition: Option<String>,
    pub year: Option<String>,
}

/// Request body for creating a book.
///
/// Every field is optional at the decoding stage; presence of `id`, `title` and `author`
/// is checked by the service so a missing field produces the catalog's own error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateBookDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub pages: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

/// Request body for a partial book update.
///
/// Each attribute distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(None)`). Unknown keys, `id` included, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UpdateBookDto {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub author: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub pages: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub edition: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub year: Option<Option<String>>,
}

/// Marks a key as present, keeping an explicit `null` as `Some(None)`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
