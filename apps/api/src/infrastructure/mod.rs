// Infrastructure layer module
// Contains database adapters and schema bootstrap

pub mod repositories;
pub mod schema;
