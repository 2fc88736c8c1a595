mod build_schema_tests;
mod schema_builder_tests;
