//! Repository layer: one zero-sized struct per table, methods take the pool.

pub mod product_repo;

pub use product_repo::ProductRepo;
