mod sdl_parse_error_tests;
mod sdl_parser_error_tests;
mod utils;
