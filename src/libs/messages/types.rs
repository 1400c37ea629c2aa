/// Every user-facing message in pricebook.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === PRODUCT MESSAGES ===
    ProductCreated(String),
    ProductUpdated(String),
    ProductDeleted(i64),
    ProductNotFound(i64),
    ProductCreateFailed,
    ProductUpdateFailed,
    ProductDeleteFailed,
    ProductsHeader,
    ProductsNotFound,
    ProductsMatchingHeader,
    NoProductsMatching,
    ProductsLoaded(usize),
    ConfirmDeleteProduct(String),
    EditingProduct(String),

    // === BUSY TEXTS ===
    Processing,
    LoadingProducts,
    RefreshingProducts,
    CreatingProduct,
    UpdatingProduct,
    DeletingProduct,

    // === ALERT TITLES ===
    ValidationErrorTitle,
    ErrorTitle,
    Alert {
        title: String,
        message: String,
    },

    // === PROMPTS ===
    PromptProductName,
    PromptProductPrice,
    PromptDatabaseFileName,
    SelectProductAction,
    SelectProductToEdit,
    SelectProductToDelete,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigParseError,
    ConfigSaveError,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    DatabaseClosed,
    TableCreated(String),

    // === GENERIC MESSAGES ===
    OperationCancelled,
    InvalidInput(String),
}
