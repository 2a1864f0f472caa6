#![forbid(unsafe_code)]

pub mod repository;
pub mod tables;

pub use repository::{
    CatalogRepository, ContentError, ContentTables, QuestionProvider, StaticContent,
};
