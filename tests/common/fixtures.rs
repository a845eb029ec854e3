//! Reusable test content.

/// A small, well-formed IDL source.
pub const VALID_IDL: &str = r#"// greeter.idl
module Example {
    interface Greeter {
        string greet(in string name);
    };
    struct Point { long x; long y; };
};
"#;

/// A source with one unclosed brace on line 1.
pub const UNCLOSED_IDL: &str = "module m {\n    interface I { };\n";

/// Fake preprocessor: records its arguments next to itself, then copies the
/// last argument (the raw input) to the path after `-o`.
pub const COPYING_PREPROCESSOR: &str = r#"#!/bin/sh
dir=$(dirname "$0")
out=""
prev=""
for arg in "$@"; do
    if [ "$prev" = "-o" ]; then out="$arg"; fi
    prev="$arg"
done
printf '%s\n' "$@" > "$dir/args.log"
cat "$prev" > "$out"
"#;

/// Fake preprocessor that fails with status 7 without writing output.
pub const FAILING_PREPROCESSOR: &str = "#!/bin/sh\necho 'cpp: fatal error' >&2\nexit 7\n";

/// Fake preprocessor that emits line markers naming an included file.
pub const MARKER_PREPROCESSOR: &str = r#"#!/bin/sh
out=""
prev=""
for arg in "$@"; do
    if [ "$prev" = "-o" ]; then out="$arg"; fi
    prev="$arg"
done
{
    printf '# 1 "%s"\n' "$prev"
    echo 'module m {'
    echo '# 1 "inc/base.idl" 1'
    echo 'struct S { long x; }'
    printf '# 3 "%s" 2\n' "$prev"
    echo '};'
} > "$out"
"#;
