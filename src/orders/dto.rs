use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub user_email: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: i64,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteOrderResponse {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_parses_optional_contact_fields() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"user_email":"bob@example.com","product_name":"Hammer","quantity":3,"price":25}"#,
        )
        .unwrap();
        assert_eq!(req.user_email, "bob@example.com");
        assert_eq!(req.quantity, 3);
        assert!(req.address.is_none());
        assert!(req.phone.is_none());
    }
}
