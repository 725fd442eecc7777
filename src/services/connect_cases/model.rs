//! Shapes shared by ConnectCases operations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Document;

/// Value of a case field. Exactly one member is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValueUnion {
    /// String value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    /// Numeric value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,
    /// Boolean value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,
    /// Explicitly empty value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_value: Option<Document>,
    /// User ARN value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_arn_value: Option<String>,
}

impl FieldValueUnion {
    /// A string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            ..Self::default()
        }
    }

    /// A numeric value.
    pub fn double(value: f64) -> Self {
        Self {
            double_value: Some(value),
            ..Self::default()
        }
    }

    /// A boolean value.
    pub fn boolean(value: bool) -> Self {
        Self {
            boolean_value: Some(value),
            ..Self::default()
        }
    }
}

/// A field id paired with its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    /// Field id.
    pub id: String,
    /// Field value.
    pub value: FieldValueUnion,
}

impl FieldValue {
    /// Pair a field id with a value.
    pub fn new(id: impl Into<String>, value: FieldValueUnion) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// Reference to a field by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldIdentifier {
    /// Field id.
    pub id: String,
}

impl FieldIdentifier {
    /// Reference `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Summary of a Cases domain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSummary {
    /// Domain id.
    pub domain_id: String,
    /// Domain ARN.
    pub domain_arn: String,
    /// Domain name.
    pub name: String,
}

/// Summary of a field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSummary {
    /// Field id.
    pub field_id: String,
    /// Field ARN.
    pub field_arn: String,
    /// Field name.
    pub name: String,
    /// `Text`, `Number`, `Boolean`, `DateTime`, `SingleSelect` or `Url`.
    #[serde(rename = "type")]
    pub field_type: String,
    /// `System` or `Custom`.
    pub namespace: String,
}

/// Sort order applied to case search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    /// Field to sort by.
    pub field_id: String,
    /// `Asc` or `Desc`.
    pub sort_order: String,
}

/// One case returned by a search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCasesResponseItem {
    /// Case id.
    pub case_id: String,
    /// Template the case was created from.
    pub template_id: String,
    /// Requested field values.
    #[serde(default)]
    pub fields: Vec<FieldValue>,
    /// Case tags.
    pub tags: Option<HashMap<String, Option<String>>>,
}

/// A field a template requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredField {
    /// Field id.
    pub field_id: String,
}

/// Content of a comment related item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentContent {
    /// Comment text.
    pub body: String,
    /// Only `Text/Plain` is accepted.
    pub content_type: String,
}

/// A contact related item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// ARN of the Amazon Connect contact.
    pub contact_arn: String,
}

/// Content of a related item. Exactly one member is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedItemInputContent {
    /// Comment content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentContent>,
    /// Contact content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

/// Who performed a case change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUnion {
    /// ARN of the Connect user.
    pub user_arn: String,
}
