mod health;
mod query;

pub use self::health::{DynHealthService, HealthServiceTrait};
pub use self::query::{DynProductQueryService, ProductQueryServiceTrait};
