//! Live-server test harness: cargo test --test integration -- --ignored

mod integration {
    mod api_tests;
}
