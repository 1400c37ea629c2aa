#[cfg(test)]
mod tests {
    use pricebook::db::context::DatabaseContext;
    use pricebook::db::db::DbLocation;
    use pricebook::db::error::DbError;
    use pricebook::db::filter::Filter;
    use pricebook::db::table::{Column, ColumnType, Table};
    use pricebook::libs::product::Product;
    use rusqlite::types::Value;
    use rusqlite::Row;
    use tempfile::TempDir;

    /// A second record type, to check the context is not tied to products.
    #[derive(Debug, Clone, PartialEq)]
    struct Supplier {
        id: i64,
        name: String,
        rating: i64,
    }

    impl Table for Supplier {
        const NAME: &'static str = "Supplier";
        const PRIMARY_KEY: &'static str = "Id";
        const COLUMNS: &'static [Column] = &[Column::new("Name", ColumnType::Text), Column::new("Rating", ColumnType::Integer)];

        fn key(&self) -> i64 {
            self.id
        }

        fn set_key(&mut self, key: i64) {
            self.id = key;
        }

        fn values(&self) -> Vec<Value> {
            vec![Value::Text(self.name.clone()), Value::Integer(self.rating)]
        }

        fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
            Ok(Supplier {
                id: row.get(0)?,
                name: row.get(1)?,
                rating: row.get(2)?,
            })
        }
    }

    fn file_context(dir: &TempDir) -> DatabaseContext {
        DatabaseContext::new(DbLocation::File(dir.path().join("products.db3")))
    }

    #[tokio::test]
    async fn test_crud_walkthrough() {
        let context = DatabaseContext::new(DbLocation::Memory);

        let mut pen = Product::new("Pen", 1.50);
        assert!(context.insert(&mut pen).await.unwrap());
        assert_eq!(pen.id, 1);

        let all: Vec<Product> = context.get_all().await.unwrap();
        assert_eq!(all, vec![Product { id: 1, name: Some("Pen".to_string()), price: 1.50 }]);

        pen.price = 2.00;
        assert!(context.update(&pen).await.unwrap());
        let fetched = context.get_by_key::<Product>(1).await.unwrap().unwrap();
        assert_eq!(fetched.price, 2.00);
        assert_eq!(fetched.name.as_deref(), Some("Pen"));

        assert!(context.delete_by_key::<Product>(1).await.unwrap());
        let all: Vec<Product> = context.get_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_connection_opens_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.db3");
        let context = DatabaseContext::new(DbLocation::File(path.clone()));

        assert!(!context.is_open());
        assert!(!path.exists());

        let _: Vec<Product> = context.get_all().await.unwrap();
        assert!(context.is_open());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_get_by_key_missing_is_none() {
        let context = DatabaseContext::new(DbLocation::Memory);
        assert!(context.get_by_key::<Product>(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_ignores_existing_key() {
        let context = DatabaseContext::new(DbLocation::Memory);

        let mut first = Product::new("Pen", 1.0);
        context.insert(&mut first).await.unwrap();

        let mut second = Product { id: first.id, ..Product::new("Pencil", 0.5) };
        assert!(context.insert(&mut second).await.unwrap());
        assert_ne!(second.id, first.id);
        assert_eq!(context.get_all::<Product>().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_unknown_key_affects_nothing() {
        let context = DatabaseContext::new(DbLocation::Memory);
        let ghost = Product { id: 99, ..Product::new("Ghost", 1.0) };

        assert!(!context.update(&ghost).await.unwrap());
        assert!(context.get_all::<Product>().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_record_and_unknown_key() {
        let context = DatabaseContext::new(DbLocation::Memory);
        let mut pen = Product::new("Pen", 1.0);
        let mut ink = Product::new("Ink", 4.0);
        context.insert(&mut pen).await.unwrap();
        context.insert(&mut ink).await.unwrap();

        assert!(context.delete(&pen).await.unwrap());
        assert!(!context.delete(&pen).await.unwrap());
        assert!(!context.delete_by_key::<Product>(1000).await.unwrap());

        let remaining: Vec<Product> = context.get_all().await.unwrap();
        assert_eq!(remaining, vec![ink]);
    }

    #[tokio::test]
    async fn test_keys_are_never_reused() {
        let context = DatabaseContext::new(DbLocation::Memory);
        let mut pen = Product::new("Pen", 1.0);
        context.insert(&mut pen).await.unwrap();
        context.delete_by_key::<Product>(pen.id).await.unwrap();

        let mut pencil = Product::new("Pencil", 0.5);
        context.insert(&mut pencil).await.unwrap();
        assert!(pencil.id > pen.id);
    }

    #[tokio::test]
    async fn test_get_filtered() {
        let context = DatabaseContext::new(DbLocation::Memory);
        for (name, price) in [("Pen", 1.5), ("Fountain pen", 25.0), ("Notebook", 3.0)] {
            let mut product = Product::new(name, price);
            context.insert(&mut product).await.unwrap();
        }

        let pens: Vec<Product> = context.get_filtered(Filter::new().like("Name", "%pen%")).await.unwrap();
        assert_eq!(pens.len(), 2);

        let cheap_pens: Vec<Product> = context
            .get_filtered(Filter::new().like("Name", "%pen%").lt("Price", 10.0))
            .await
            .unwrap();
        assert_eq!(cheap_pens.len(), 1);
        assert_eq!(cheap_pens[0].display_name(), "Pen");

        let exact: Vec<Product> = context
            .get_filtered(Filter::new().eq("Name", "Notebook".to_string()))
            .await
            .unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].price, 3.0);
    }

    #[tokio::test]
    async fn test_contains_matches_wildcards_literally() {
        let context = DatabaseContext::new(DbLocation::Memory);
        for name in ["100% cotton", "1000 sheets", "snake_case pen", "snakeXcase"] {
            let mut product = Product::new(name, 1.0);
            context.insert(&mut product).await.unwrap();
        }

        let percent: Vec<Product> = context.get_filtered(Filter::new().contains("Name", "100%")).await.unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].display_name(), "100% cotton");

        let underscore: Vec<Product> = context.get_filtered(Filter::new().contains("Name", "e_c")).await.unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].display_name(), "snake_case pen");
    }

    #[tokio::test]
    async fn test_filter_on_unknown_column_fails() {
        let context = DatabaseContext::new(DbLocation::Memory);
        let result = context.get_filtered::<Product>(Filter::new().eq("Colour", "red".to_string())).await;

        assert!(matches!(result, Err(DbError::UnknownColumn { table: "Product", .. })));
        assert!(!context.is_open());
    }

    #[tokio::test]
    async fn test_table_creation_is_idempotent_across_contexts() {
        let dir = tempfile::tempdir().unwrap();

        let first = file_context(&dir);
        let mut pen = Product::new("Pen", 1.0);
        first.insert(&mut pen).await.unwrap();
        first.close().await.unwrap();

        let second = file_context(&dir);
        let all: Vec<Product> = second.get_all().await.unwrap();
        assert_eq!(all, vec![pen]);
    }

    #[tokio::test]
    async fn test_close_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let context = file_context(&dir);

        let mut pen = Product::new("Pen", 1.0);
        context.insert(&mut pen).await.unwrap();
        context.close().await.unwrap();
        assert!(!context.is_open());

        let fetched = context.get_by_key::<Product>(pen.id).await.unwrap();
        assert_eq!(fetched, Some(pen));
        assert!(context.is_open());
    }

    #[tokio::test]
    async fn test_multiple_record_types_share_connection() {
        let context = DatabaseContext::new(DbLocation::Memory);

        let mut pen = Product::new("Pen", 1.0);
        let mut acme = Supplier {
            id: 0,
            name: "Acme".to_string(),
            rating: 5,
        };
        context.insert(&mut pen).await.unwrap();
        context.insert(&mut acme).await.unwrap();
        assert_eq!(acme.id, 1);

        acme.rating = 4;
        assert!(context.update(&acme).await.unwrap());

        let suppliers: Vec<Supplier> = context.get_filtered(Filter::new().ge("Rating", 4)).await.unwrap();
        assert_eq!(suppliers, vec![acme]);
        assert_eq!(context.get_all::<Product>().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let context = DatabaseContext::new(DbLocation::Memory);
        let clone = context.clone();

        let mut pen = Product::new("Pen", 1.0);
        context.insert(&mut pen).await.unwrap();

        let seen: Vec<Product> = clone.get_all().await.unwrap();
        assert_eq!(seen.len(), 1);
    }
}
