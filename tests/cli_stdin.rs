//! Reading the source from standard input.

#![cfg(unix)]

mod common;

use common::*;

#[test]
fn stdin_source_without_file_argument() {
    let env = TestEnv::new();
    let cpp = env.write_script("bin/cpp.sh", COPYING_PREPROCESSOR);

    let result = env.run_with_stdin(&["--preprocessor", arg(&cpp)], VALID_IDL);

    assert_exit_code!(result, 0);
    assert_no_temp_files!(env);

    // No input directory, so no extra -I after the flavor flag.
    let log = std::fs::read_to_string(env.work_path("bin/args.log")).unwrap();
    assert_eq!(log.lines().nth(3), Some("-o"));
}

#[test]
fn dash_reads_stdin_and_names_it_in_diagnostics() {
    let env = TestEnv::new();
    let cpp = env.write_script("bin/cpp.sh", COPYING_PREPROCESSOR);

    let result = env.run_with_stdin(&["--preprocessor", arg(&cpp), "-"], UNCLOSED_IDL);

    assert_exit_code!(result, 1);
    assert_output_contains!(result, "stdin:1: error: unclosed '{'");
    assert_no_temp_files!(env);
}
