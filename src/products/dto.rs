use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    pub price: i64,
    #[serde(default = "default_min_order")]
    pub min_order_qty: i64,
    #[serde(default)]
    pub available_qty: i64,
}

fn default_min_order() -> i64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_fills_defaults() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Hammer","price":25}"#).unwrap();
        assert_eq!(req.name, "Hammer");
        assert_eq!(req.price, 25);
        assert_eq!(req.min_order_qty, 1);
        assert_eq!(req.available_qty, 0);
        assert!(req.description.is_empty());
        assert!(req.image_url.is_none());
    }
}
