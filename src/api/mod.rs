pub mod docs;
pub mod v1;
