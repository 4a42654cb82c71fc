//! End-to-end tests over real files on disk

mod e2e;
