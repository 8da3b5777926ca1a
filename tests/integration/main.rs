//! End-to-end tests driving the HTTP router with the in-memory store
//! and a mock ledger-query client.


mod license_test;
mod purchase_test;
