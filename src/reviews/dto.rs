use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub reviewer_name: String,
    pub reviewer_email: Option<String>,
    pub rating: i16,
    #[serde(default)]
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_parses_minimal_body() {
        let req: CreateReviewRequest =
            serde_json::from_str(r#"{"reviewer_name":"Alice","rating":5}"#).unwrap();
        assert_eq!(req.reviewer_name, "Alice");
        assert_eq!(req.rating, 5);
        assert!(req.comment.is_empty());
        assert!(req.reviewer_email.is_none());
    }
}
