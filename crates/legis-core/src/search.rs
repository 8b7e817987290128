//! Search request model and the JSON payload sent to the `search` endpoint.
//!
//! [`SearchRequest`] is what callers fill in; [`SearchPayload`] is its wire
//! form. The payload field names are the API's (French) names, kept through
//! serde renames so the Rust side reads in English.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Facet used to restrict a search to one code, e.g. `"Code civil"`.
pub const FACET_CODE_NAME: &str = "NOM_CODE";

/// Which field of the documents the free-text query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    #[default]
    All,
    Title,
    NumArticle,
    Article,
    Num,
    Nor,
    Texte,
    Ecli,
}

/// How strictly the query must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchMode {
    #[default]
    Exacte,
    Approximative,
}

/// Document collection ("fond") a search targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Corpus {
    #[default]
    LegiArticle,
    CodeDate,
    CodeEtat,
    JuriDate,
    LodaDate,
    LodaEtat,
    Jorf,
    Kali,
    Cnil,
    Cetat,
    Constit,
    All,
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    Pertinence,
    Date,
}

/// Logical operator joining criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "ET")]
    And,
    #[serde(rename = "OU")]
    Or,
}

/// A facet restriction, forwarded to the API untouched.
///
/// Keys other than `facette`/`valeurs` (date ranges, for instance) are kept
/// in `extras` and serialized back next to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "facette")]
    pub facet: String,
    #[serde(rename = "valeurs", default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl Filter {
    /// Builds a facet filter matching any of `values`.
    pub fn new<I, S>(facet: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            facet: facet.into(),
            values: Some(values.into_iter().map(Into::into).collect()),
            extras: Map::new(),
        }
    }
}

/// Parameters of one search call.
///
/// | field        | default        |
/// |--------------|----------------|
/// | `query`      | `None`         |
/// | `field_type` | `ALL`          |
/// | `match_mode` | `EXACTE`       |
/// | `corpus`     | `LEGI_ARTICLE` |
/// | `filters`    | `None`         |
/// | `page`       | `1`            |
/// | `page_size`  | `10`           |
/// | `sort`       | `PERTINENCE`   |
///
/// # Examples
///
/// ```
/// use legis_core::search::{Corpus, SearchRequest};
///
/// let request = SearchRequest {
///     query: Some("bail commercial".to_string()),
///     corpus: Corpus::CodeDate,
///     ..Default::default()
/// };
/// let payload = serde_json::to_value(request.to_payload()).unwrap();
/// assert_eq!(payload["fond"], "CODE_DATE");
/// assert_eq!(payload["recherche"]["pageSize"], 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Free-text query; `None` or empty means no text criterion
    pub query: Option<String>,
    pub field_type: FieldType,
    pub match_mode: MatchMode,
    pub corpus: Corpus,
    /// Facet filters; `None` or empty means no `filtres` key
    pub filters: Option<Vec<Filter>>,
    pub page: u32,
    pub page_size: u32,
    pub sort: SortOrder,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: None,
            field_type: FieldType::default(),
            match_mode: MatchMode::default(),
            corpus: Corpus::default(),
            filters: None,
            page: 1,
            page_size: 10,
            sort: SortOrder::default(),
        }
    }
}

impl SearchRequest {
    /// Approximate search for a legal question across law articles.
    pub fn question(question: impl Into<String>) -> Self {
        Self {
            query: Some(question.into()),
            match_mode: MatchMode::Approximative,
            corpus: Corpus::LegiArticle,
            page_size: 15,
            ..Default::default()
        }
    }

    /// Lookup of one article number inside a named code.
    pub fn code_article(code_name: impl Into<String>, article_number: impl Into<String>) -> Self {
        let code_name: String = code_name.into();
        Self {
            query: Some(article_number.into()),
            field_type: FieldType::NumArticle,
            corpus: Corpus::CodeDate,
            filters: Some(vec![Filter::new(FACET_CODE_NAME, [code_name])]),
            ..Default::default()
        }
    }

    /// Case-law search, most recent decisions first.
    pub fn case_law(theme: impl Into<String>) -> Self {
        Self {
            query: Some(theme.into()),
            corpus: Corpus::JuriDate,
            sort: SortOrder::Date,
            page_size: 20,
            ..Default::default()
        }
    }

    /// Builds the wire payload for this request.
    pub fn to_payload(&self) -> SearchPayload {
        let query = self.query.as_deref().filter(|q| !q.is_empty());

        let (fields, operator) = match query {
            Some(value) => (
                Some(vec![FieldCriteria {
                    field_type: self.field_type,
                    criteria: vec![Criterion {
                        match_mode: self.match_mode,
                        value: value.to_string(),
                        operator: Operator::And,
                    }],
                    operator: Operator::And,
                }]),
                Some(Operator::And),
            ),
            None => (None, None),
        };

        SearchPayload {
            search: SearchBody {
                page_number: self.page,
                page_size: self.page_size,
                sort: self.sort,
                pagination_type: PAGINATION_DEFAULT.to_string(),
                fields,
                operator,
                filters: self.filters.clone().filter(|f| !f.is_empty()),
            },
            corpus: self.corpus,
        }
    }
}

const PAGINATION_DEFAULT: &str = "DEFAUT";

/// Top-level JSON body of a `search` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPayload {
    #[serde(rename = "recherche")]
    pub search: SearchBody,
    #[serde(rename = "fond")]
    pub corpus: Corpus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    pub page_number: u32,
    pub page_size: u32,
    pub sort: SortOrder,
    #[serde(rename = "typePagination")]
    pub pagination_type: String,
    #[serde(rename = "champs", skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldCriteria>>,
    #[serde(rename = "operateur", skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    #[serde(rename = "filtres", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCriteria {
    #[serde(rename = "typeChamp")]
    pub field_type: FieldType,
    #[serde(rename = "criteres")]
    pub criteria: Vec<Criterion>,
    #[serde(rename = "operateur")]
    pub operator: Operator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    #[serde(rename = "typeRecherche")]
    pub match_mode: MatchMode,
    #[serde(rename = "valeur")]
    pub value: String,
    #[serde(rename = "operateur")]
    pub operator: Operator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload_json(request: &SearchRequest) -> Value {
        serde_json::to_value(request.to_payload()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let request = SearchRequest::default();
        assert_eq!(request.query, None);
        assert_eq!(request.field_type, FieldType::All);
        assert_eq!(request.match_mode, MatchMode::Exacte);
        assert_eq!(request.corpus, Corpus::LegiArticle);
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 10);
        assert_eq!(request.sort, SortOrder::Pertinence);
    }

    #[test]
    fn test_payload_without_query_has_no_text_block() {
        let payload = payload_json(&SearchRequest::default());

        assert_eq!(
            payload,
            json!({
                "recherche": {
                    "pageNumber": 1,
                    "pageSize": 10,
                    "sort": "PERTINENCE",
                    "typePagination": "DEFAUT"
                },
                "fond": "LEGI_ARTICLE"
            })
        );
    }

    #[test]
    fn test_empty_query_is_treated_as_absent() {
        let request = SearchRequest {
            query: Some(String::new()),
            ..Default::default()
        };
        let payload = payload_json(&request);
        assert!(payload["recherche"].get("champs").is_none());
        assert!(payload["recherche"].get("operateur").is_none());
    }

    #[test]
    fn test_payload_with_query_has_single_criterion() {
        let request = SearchRequest {
            query: Some("mineur commerçant".to_string()),
            field_type: FieldType::Title,
            match_mode: MatchMode::Approximative,
            ..Default::default()
        };
        let payload = payload_json(&request);

        assert_eq!(
            payload["recherche"]["champs"],
            json!([{
                "typeChamp": "TITLE",
                "criteres": [{
                    "typeRecherche": "APPROXIMATIVE",
                    "valeur": "mineur commerçant",
                    "operateur": "ET"
                }],
                "operateur": "ET"
            }])
        );
        assert_eq!(payload["recherche"]["operateur"], "ET");
    }

    #[test]
    fn test_filters_pass_through_unchanged() {
        let filters_json = json!([
            {"facette": "NOM_CODE", "valeurs": ["Code civil"]},
            {"facette": "DATE_VERSION", "singleDate": 1577836800000_i64}
        ]);
        let filters: Vec<Filter> = serde_json::from_value(filters_json.clone()).unwrap();

        let request = SearchRequest {
            filters: Some(filters),
            ..Default::default()
        };
        let payload = payload_json(&request);

        assert_eq!(payload["recherche"]["filtres"], filters_json);
    }

    #[test]
    fn test_no_filters_key_when_omitted() {
        let payload = payload_json(&SearchRequest::default());
        assert!(payload["recherche"].get("filtres").is_none());
    }

    #[test]
    fn test_empty_filter_list_is_treated_as_absent() {
        let request = SearchRequest {
            filters: Some(vec![]),
            ..Default::default()
        };
        let payload = payload_json(&request);
        assert!(payload["recherche"].get("filtres").is_none());
    }

    #[test]
    fn test_question_request() {
        let request = SearchRequest::question("Un enfant peut-il être commerçant ?");
        assert_eq!(request.match_mode, MatchMode::Approximative);
        assert_eq!(request.corpus, Corpus::LegiArticle);
        assert_eq!(request.page_size, 15);
    }

    #[test]
    fn test_code_article_request() {
        let request = SearchRequest::code_article("Code civil", "1128");
        let payload = payload_json(&request);

        assert_eq!(payload["fond"], "CODE_DATE");
        assert_eq!(payload["recherche"]["champs"][0]["typeChamp"], "NUM_ARTICLE");
        assert_eq!(
            payload["recherche"]["champs"][0]["criteres"][0]["valeur"],
            "1128"
        );
        assert_eq!(
            payload["recherche"]["filtres"],
            json!([{"facette": "NOM_CODE", "valeurs": ["Code civil"]}])
        );
    }

    #[test]
    fn test_case_law_request() {
        let payload = payload_json(&SearchRequest::case_law("licenciement"));
        assert_eq!(payload["fond"], "JURI_DATE");
        assert_eq!(payload["recherche"]["sort"], "DATE");
        assert_eq!(payload["recherche"]["pageSize"], 20);
    }
}
