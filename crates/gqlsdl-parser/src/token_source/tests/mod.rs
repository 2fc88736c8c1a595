mod str_sdl_token_source_mode_tests;
