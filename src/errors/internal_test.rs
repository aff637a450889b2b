#[cfg(test)]
mod tests {
    use crate::errors::internal::{DatabaseError, InternalError, ProductError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_includes_operation() {
        let db_err = DbErr::RecordNotFound("test record".to_string());
        let error = InternalError::database("save_product", db_err);

        let error_string = error.to_string();
        assert!(error_string.contains("save_product"));
        assert!(error_string.contains("Database error"));
    }

    #[test]
    fn test_transaction_begin_error_message() {
        let error: InternalError = DatabaseError::TransactionBegin {
            source: DbErr::Custom("pool closed".to_string()),
        }
        .into();

        let error_string = error.to_string();
        assert!(error_string.contains("Starting transaction failed"));
        assert!(error_string.contains("pool closed"));
    }

    #[test]
    fn test_product_not_found_message() {
        let error = ProductError::not_found(42);
        assert_eq!(error.to_string(), "Product not found: 42");
    }

    #[test]
    fn test_is_not_found() {
        let not_found: InternalError = ProductError::not_found(1).into();
        assert!(not_found.is_not_found());

        let db = InternalError::database("find_product_by_id", DbErr::Custom("boom".to_string()));
        assert!(!db.is_not_found());
    }
}
