// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod note;
pub mod repositories;
