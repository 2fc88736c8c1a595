mod concurrent_type_resolver_tests;
mod utils;
