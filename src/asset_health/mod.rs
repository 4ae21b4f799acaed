/// Asset health domain: pure models and services with no I/O
pub mod domain;
pub mod services;
