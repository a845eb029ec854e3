//! Property tests for the structural checker.

use proptest::prelude::*;

use idlc::domain::entities::SourceNames;
use idlc::domain::ports::IdlParser;
use idlc::StructuralParser;

fn balanced_idl() -> impl Strategy<Value = String> {
    let leaf = proptest::string::string_regex("[a-z]{1,8}")
        .unwrap()
        .prop_map(|name| format!("typedef long {name};"));
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            proptest::string::string_regex("[a-z]{1,8}").unwrap(),
            proptest::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, body)| format!("module {name} {{\n{}\n}};", body.join("\n")))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The checker never panics and its count matches its diagnostics.
    #[test]
    fn property_parse_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let names = SourceNames::new("fuzz.idl", "/tmp/idli_fuzz");
        let mut parser = StructuralParser::new();

        let count = parser.parse(&mut bytes.as_slice(), &names);

        prop_assert_eq!(count, parser.diagnostics().len());
    }

    /// PROPERTY: Nested, properly terminated modules are always clean.
    #[test]
    fn property_balanced_modules_are_clean(source in balanced_idl()) {
        let names = SourceNames::new("gen.idl", "/tmp/idli_gen");
        let mut parser = StructuralParser::new();

        prop_assert_eq!(parser.parse(&mut source.as_bytes(), &names), 0, "{:?}", parser.diagnostics());
    }
}
