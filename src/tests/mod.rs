//! Integration level test suite, driven by the `test_resources` files.
mod nav;
