use serde::Deserialize;

/// List endpoints answer with either a bare JSON array or a pagination
/// envelope, depending on the endpoint. Both shapes normalize into a flat
/// record vec via [`ListPayload::into_records`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Plain(Vec<T>),
    Paged(PagedEnvelope<T>),
}

/// `{items|funcionarios|usuarios, total, page}` style envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedEnvelope<T> {
    #[serde(alias = "funcionarios", alias = "usuarios")]
    pub items: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
}

impl<T> ListPayload<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            ListPayload::Plain(records) => records,
            ListPayload::Paged(envelope) => envelope.items,
        }
    }
}

/// `{data: ...}` wrapper used by the login and detection endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `{message}` body carried by error responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn bare_array_normalizes() {
        let payload: ListPayload<Row> = serde_json::from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
        let records = payload.into_records();
        assert_eq!(records, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn funcionarios_envelope_normalizes() {
        let payload: ListPayload<Row> =
            serde_json::from_str(r#"{"funcionarios":[{"id":7}],"total":31,"page":2}"#).unwrap();
        assert_eq!(payload.into_records(), vec![Row { id: 7 }]);
    }

    #[test]
    fn usuarios_envelope_normalizes() {
        let payload: ListPayload<Row> =
            serde_json::from_str(r#"{"usuarios":[],"total":0}"#).unwrap();
        assert!(payload.into_records().is_empty());
    }
}
