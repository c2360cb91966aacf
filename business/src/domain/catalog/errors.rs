#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.duplicate_id")]
    DuplicateId,
    #[error("catalog.name_empty")]
    NameEmpty,
}
