//! ConnectCases requests and outputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{
    DomainSummary, FieldIdentifier, FieldSummary, FieldValue, RelatedItemInputContent,
    RequiredField, SearchCasesResponseItem, Sort, UserUnion,
};
use crate::error::ServiceResult;
use crate::operation::{require, serialize_token, Operation, Paginated, RequestUri};
use crate::transport::HttpMethod;
use crate::types::{Document, Tags};

/// Input for `CreateDomain`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainRequest {
    /// Domain name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

crate::request_setters!(CreateDomainRequest { name: String });

/// Output of `CreateDomain`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainOutput {
    /// Domain id.
    pub domain_id: Option<String>,
    /// Domain ARN.
    pub domain_arn: Option<String>,
    /// `Active`, `CreationInProgress` or `CreationFailed`.
    pub domain_status: Option<String>,
}

impl Operation for CreateDomainRequest {
    type Output = CreateDomainOutput;
    const NAME: &'static str = "CreateDomain";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Name", &self.name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains"))
    }
}

/// Input for `GetDomain`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetDomainRequest {
    /// Domain id.
    #[serde(skip)]
    pub domain_id: Option<String>,
}

crate::request_setters!(GetDomainRequest { domain_id: String });

/// Output of `GetDomain`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDomainOutput {
    /// Domain id.
    pub domain_id: Option<String>,
    /// Domain ARN.
    pub domain_arn: Option<String>,
    /// Domain name.
    pub name: Option<String>,
    /// Creation time.
    pub created_time: Option<DateTime<Utc>>,
    /// Domain status.
    pub domain_status: Option<String>,
    /// Domain tags.
    pub tags: Option<Tags>,
}

impl Operation for GetDomainRequest {
    type Output = GetDomainOutput;
    const NAME: &'static str = "GetDomain";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DomainId", &self.domain_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains/").param(&self.domain_id))
    }
}

/// Input for `ListDomains`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListDomainsRequest {
    /// Page size.
    #[serde(skip)]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
}

crate::request_setters!(ListDomainsRequest {
    max_results: i32,
    next_token: String,
});

/// Output of `ListDomains`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDomainsOutput {
    /// Domains on this page.
    #[serde(default)]
    pub domains: Vec<DomainSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListDomainsRequest {
    type Output = ListDomainsOutput;
    const NAME: &'static str = "ListDomains";

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains-list")
            .query_opt("maxResults", &self.max_results)
            .query_opt("nextToken", &self.next_token))
    }
}

impl Paginated for ListDomainsRequest {
    fn next_token(output: &ListDomainsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `DeleteDomain`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteDomainRequest {
    /// Domain id.
    #[serde(skip)]
    pub domain_id: Option<String>,
}

crate::request_setters!(DeleteDomainRequest { domain_id: String });

/// Output of `DeleteDomain`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteDomainOutput {}

impl Operation for DeleteDomainRequest {
    type Output = DeleteDomainOutput;
    const NAME: &'static str = "DeleteDomain";
    const METHOD: HttpMethod = HttpMethod::DELETE;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DomainId", &self.domain_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains/").param(&self.domain_id))
    }
}

/// Input for `CreateCase`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    /// Domain id.
    #[serde(skip)]
    pub domain_id: Option<String>,
    /// Template to create the case from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Initial field values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldValue>>,
    /// Idempotency token, generated when unset.
    #[serde(serialize_with = "serialize_token")]
    pub client_token: Option<String>,
    /// User creating the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<UserUnion>,
}

crate::request_setters!(CreateCaseRequest {
    domain_id: String,
    template_id: String,
    fields: Vec<FieldValue>,
    client_token: String,
    performed_by: UserUnion,
});

/// Output of `CreateCase`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseOutput {
    /// Case id.
    pub case_id: Option<String>,
    /// Case ARN.
    pub case_arn: Option<String>,
}

impl Operation for CreateCaseRequest {
    type Output = CreateCaseOutput;
    const NAME: &'static str = "CreateCase";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DomainId", &self.domain_id)?;
        require(Self::NAME, "TemplateId", &self.template_id)?;
        require(Self::NAME, "Fields", &self.fields)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains/")
            .param(&self.domain_id)
            .literal("/cases"))
    }
}

/// Input for `GetCase`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCaseRequest {
    /// Case id.
    #[serde(skip)]
    pub case_id: Option<String>,
    /// Domain id.
    #[serde(skip)]
    pub domain_id: Option<String>,
    /// Fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldIdentifier>>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

crate::request_setters!(GetCaseRequest {
    case_id: String,
    domain_id: String,
    fields: Vec<FieldIdentifier>,
    next_token: String,
});

/// Output of `GetCase`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCaseOutput {
    /// Requested field values.
    #[serde(default)]
    pub fields: Vec<FieldValue>,
    /// Template id.
    pub template_id: Option<String>,
    /// Case tags.
    pub tags: Option<Tags>,
    /// Token for the remaining fields.
    pub next_token: Option<String>,
}

impl Operation for GetCaseRequest {
    type Output = GetCaseOutput;
    const NAME: &'static str = "GetCase";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "CaseId", &self.case_id)?;
        require(Self::NAME, "DomainId", &self.domain_id)?;
        require(Self::NAME, "Fields", &self.fields)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains/")
            .param(&self.domain_id)
            .literal("/cases/")
            .param(&self.case_id))
    }
}

impl Paginated for GetCaseRequest {
    fn next_token(output: &GetCaseOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `UpdateCase`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCaseRequest {
    /// Case id.
    #[serde(skip)]
    pub case_id: Option<String>,
    /// Domain id.
    #[serde(skip)]
    pub domain_id: Option<String>,
    /// Field values to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldValue>>,
    /// User making the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<UserUnion>,
}

crate::request_setters!(UpdateCaseRequest {
    case_id: String,
    domain_id: String,
    fields: Vec<FieldValue>,
    performed_by: UserUnion,
});

/// Output of `UpdateCase`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCaseOutput {}

impl Operation for UpdateCaseRequest {
    type Output = UpdateCaseOutput;
    const NAME: &'static str = "UpdateCase";
    const METHOD: HttpMethod = HttpMethod::PUT;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "CaseId", &self.case_id)?;
        require(Self::NAME, "DomainId", &self.domain_id)?;
        require(Self::NAME, "Fields", &self.fields)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains/")
            .param(&self.domain_id)
            .literal("/cases/")
            .param(&self.case_id))
    }
}

/// Input for `SearchCases`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCasesRequest {
    /// Domain id.
    #[serde(skip)]
    pub domain_id: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    /// Case filter expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Document>,
    /// Result ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorts: Option<Vec<Sort>>,
    /// Fields to return per case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldIdentifier>>,
}

crate::request_setters!(SearchCasesRequest {
    domain_id: String,
    max_results: i32,
    next_token: String,
    search_term: String,
    filter: Document,
    sorts: Vec<Sort>,
    fields: Vec<FieldIdentifier>,
});

/// Output of `SearchCases`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCasesOutput {
    /// Matching cases.
    #[serde(default)]
    pub cases: Vec<SearchCasesResponseItem>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for SearchCasesRequest {
    type Output = SearchCasesOutput;
    const NAME: &'static str = "SearchCases";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DomainId", &self.domain_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains/")
            .param(&self.domain_id)
            .literal("/cases-search"))
    }
}

impl Paginated for SearchCasesRequest {
    fn next_token(output: &SearchCasesOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `CreateField`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldRequest {
    /// Domain id.
    #[serde(skip)]
    pub domain_id: Option<String>,
    /// Field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Field type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Field description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

crate::request_setters!(CreateFieldRequest {
    domain_id: String,
    name: String,
    field_type: String,
    description: String,
});

/// Output of `CreateField`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldOutput {
    /// Field id.
    pub field_id: Option<String>,
    /// Field ARN.
    pub field_arn: Option<String>,
}

impl Operation for CreateFieldRequest {
    type Output = CreateFieldOutput;
    const NAME: &'static str = "CreateField";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DomainId", &self.domain_id)?;
        require(Self::NAME, "Name", &self.name)?;
        require(Self::NAME, "Type", &self.field_type)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains/")
            .param(&self.domain_id)
            .literal("/fields"))
    }
}

/// Input for `ListFields`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListFieldsRequest {
    /// Domain id.
    #[serde(skip)]
    pub domain_id: Option<String>,
    /// Page size.
    #[serde(skip)]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip)]
    pub next_token: Option<String>,
}

crate::request_setters!(ListFieldsRequest {
    domain_id: String,
    max_results: i32,
    next_token: String,
});

/// Output of `ListFields`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFieldsOutput {
    /// Fields on this page.
    #[serde(default)]
    pub fields: Vec<FieldSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl Operation for ListFieldsRequest {
    type Output = ListFieldsOutput;
    const NAME: &'static str = "ListFields";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DomainId", &self.domain_id)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains/")
            .param(&self.domain_id)
            .literal("/fields-list")
            .query_opt("maxResults", &self.max_results)
            .query_opt("nextToken", &self.next_token))
    }
}

impl Paginated for ListFieldsRequest {
    fn next_token(output: &ListFieldsOutput) -> Option<String> {
        output.next_token.clone()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

/// Input for `CreateTemplate`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    /// Domain id.
    #[serde(skip)]
    pub domain_id: Option<String>,
    /// Template name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Template description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Layout configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_configuration: Option<Document>,
    /// Fields every case must set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<Vec<RequiredField>>,
    /// `Active` or `Inactive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

crate::request_setters!(CreateTemplateRequest {
    domain_id: String,
    name: String,
    description: String,
    layout_configuration: Document,
    required_fields: Vec<RequiredField>,
    status: String,
});

/// Output of `CreateTemplate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateOutput {
    /// Template id.
    pub template_id: Option<String>,
    /// Template ARN.
    pub template_arn: Option<String>,
}

impl Operation for CreateTemplateRequest {
    type Output = CreateTemplateOutput;
    const NAME: &'static str = "CreateTemplate";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "DomainId", &self.domain_id)?;
        require(Self::NAME, "Name", &self.name)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains/")
            .param(&self.domain_id)
            .literal("/templates"))
    }
}

/// Input for `CreateRelatedItem`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelatedItemRequest {
    /// Case id.
    #[serde(skip)]
    pub case_id: Option<String>,
    /// Domain id.
    #[serde(skip)]
    pub domain_id: Option<String>,
    /// `Contact` or `Comment`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Item content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<RelatedItemInputContent>,
    /// User adding the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<UserUnion>,
}

crate::request_setters!(CreateRelatedItemRequest {
    case_id: String,
    domain_id: String,
    item_type: String,
    content: RelatedItemInputContent,
    performed_by: UserUnion,
});

/// Output of `CreateRelatedItem`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelatedItemOutput {
    /// Related item id.
    pub related_item_id: Option<String>,
    /// Related item ARN.
    pub related_item_arn: Option<String>,
}

impl Operation for CreateRelatedItemRequest {
    type Output = CreateRelatedItemOutput;
    const NAME: &'static str = "CreateRelatedItem";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "CaseId", &self.case_id)?;
        require(Self::NAME, "DomainId", &self.domain_id)?;
        require(Self::NAME, "Type", &self.item_type)?;
        require(Self::NAME, "Content", &self.content)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/domains/")
            .param(&self.domain_id)
            .literal("/cases/")
            .param(&self.case_id)
            .literal("/related-items/"))
    }
}

/// Input for `TagResource`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceRequest {
    /// Resource ARN.
    #[serde(skip)]
    pub arn: Option<String>,
    /// Tags to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

crate::request_setters!(TagResourceRequest {
    arn: String,
    tags: Tags,
});

/// Output of `TagResource`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagResourceOutput {}

impl Operation for TagResourceRequest {
    type Output = TagResourceOutput;
    const NAME: &'static str = "TagResource";

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Arn", &self.arn)?;
        require(Self::NAME, "Tags", &self.tags)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/tags/").param(&self.arn))
    }
}

/// Input for `UntagResource`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UntagResourceRequest {
    /// Resource ARN.
    #[serde(skip)]
    pub arn: Option<String>,
    /// Keys of the tags to remove.
    #[serde(skip)]
    pub tag_keys: Option<Vec<String>>,
}

crate::request_setters!(UntagResourceRequest {
    arn: String,
    tag_keys: Vec<String>,
});

/// Output of `UntagResource`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UntagResourceOutput {}

impl Operation for UntagResourceRequest {
    type Output = UntagResourceOutput;
    const NAME: &'static str = "UntagResource";
    const METHOD: HttpMethod = HttpMethod::DELETE;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Arn", &self.arn)?;
        require(Self::NAME, "TagKeys", &self.tag_keys)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/tags/")
            .param(&self.arn)
            .query_list("tagKeys", &self.tag_keys))
    }
}

/// Input for `ListTagsForResource`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListTagsForResourceRequest {
    /// Resource ARN.
    #[serde(skip)]
    pub arn: Option<String>,
}

crate::request_setters!(ListTagsForResourceRequest { arn: String });

/// Output of `ListTagsForResource`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTagsForResourceOutput {
    /// Resource tags.
    pub tags: Option<Tags>,
}

impl Operation for ListTagsForResourceRequest {
    type Output = ListTagsForResourceOutput;
    const NAME: &'static str = "ListTagsForResource";
    const METHOD: HttpMethod = HttpMethod::GET;

    fn validate(&self) -> ServiceResult<()> {
        require(Self::NAME, "Arn", &self.arn)?;
        Ok(())
    }

    fn uri(&self) -> ServiceResult<RequestUri> {
        Ok(RequestUri::from_literal("/tags/").param(&self.arn))
    }
}
