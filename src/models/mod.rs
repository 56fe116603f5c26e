pub mod dataset;
pub mod record;
pub mod schema;
pub mod status;
