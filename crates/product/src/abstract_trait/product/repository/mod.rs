mod query;
mod schema;

pub use self::query::{DynProductQueryRepository, ProductQueryRepositoryTrait};
pub use self::schema::{DynSchemaRepository, SchemaRepositoryTrait};
