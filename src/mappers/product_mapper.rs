use sea_orm::{ActiveValue::NotSet, Set};

use crate::types::db::product::{ActiveModel, Model};
use crate::types::dto::product::{ProductRequest, ProductResponse};

/// Stateless converter between product DTOs and product records
///
/// Performs no I/O and never fails; requests are expected to be validated
/// by the API layer before they reach the mapper.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductMapper;

impl ProductMapper {
    pub fn new() -> Self {
        Self
    }

    /// Build a new record from a request, leaving the identity for the store to assign
    pub fn to_new_record(&self, request: ProductRequest) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(request.name),
            description: Set(request.description),
            price: Set(request.price),
        }
    }

    pub fn to_response(&self, record: Model) -> ProductResponse {
        ProductResponse {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
        }
    }

    pub fn to_responses(&self, records: Vec<Model>) -> Vec<ProductResponse> {
        records.into_iter().map(|record| self.to_response(record)).collect()
    }

    /// Overwrite the mutable fields of an existing record with the request values
    ///
    /// The id stays `Unchanged` so saving the result updates the same row.
    pub fn apply_update(&self, record: Model, request: ProductRequest) -> ActiveModel {
        let mut active_model: ActiveModel = record.into();
        active_model.name = Set(request.name);
        active_model.description = Set(request.description);
        active_model.price = Set(request.price);
        active_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn request(name: &str, description: Option<&str>, price: f64) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            description: description.map(str::to_string),
            price,
        }
    }

    fn record() -> Model {
        Model {
            id: 5,
            name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            price: 9.99,
        }
    }

    #[test]
    fn test_to_new_record_leaves_id_unset() {
        let active = ProductMapper::new().to_new_record(request("Widget", Some("A widget"), 9.99));

        assert!(matches!(active.id, ActiveValue::NotSet));
        assert_eq!(active.name, Set("Widget".to_string()));
        assert_eq!(active.description, Set(Some("A widget".to_string())));
        assert_eq!(active.price, Set(9.99));
    }

    #[test]
    fn test_to_response_copies_all_fields() {
        let response = ProductMapper::new().to_response(record());

        assert_eq!(response, ProductResponse {
            id: 5,
            name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            price: 9.99,
        });
    }

    #[test]
    fn test_to_responses_preserves_order() {
        let mut second = record();
        second.id = 6;
        second.name = "Gadget".to_string();

        let responses = ProductMapper::new().to_responses(vec![record(), second]);

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].id, 5);
        assert_eq!(responses[1].id, 6);
        assert_eq!(responses[1].name, "Gadget");
    }

    #[test]
    fn test_apply_update_preserves_id_and_overwrites_fields() {
        let active = ProductMapper::new().apply_update(record(), request("Widget2", None, 12.5));

        assert_eq!(active.id, ActiveValue::Unchanged(5));
        assert_eq!(active.name, Set("Widget2".to_string()));
        assert_eq!(active.description, Set(None));
        assert_eq!(active.price, Set(12.5));
    }
}
