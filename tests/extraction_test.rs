use hclexpr::catalog::NodeCatalog;
use hclexpr::errors::HclExprError;
use hclexpr::extraction::{extract_references, ReferenceExtractor};

fn catalog() -> Vec<&'static str> {
    vec![
        "aws_instance.foo",
        "aws_s3_bucket.logs",
        "data.aws_ami.ubuntu",
        "var.environment",
        "var.users",
        "local.prefix",
        "module.vpc",
    ]
}

#[test]
fn test_plain_literal_has_no_references() {
    let refs = extract_references("plain text", &catalog()).unwrap();
    assert!(refs.is_empty());

    let refs = extract_references("prefix-${var.environment}", &catalog()).unwrap();
    assert!(refs.is_empty(), "strings not starting with ${{ are literals");
}

#[test]
fn test_single_resource_reference() {
    let refs = extract_references("${aws_instance.foo.id}", &["aws_instance.foo"]).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].referencee.id, "aws_instance.foo");
    assert_eq!(refs[0].referencee.full, "aws_instance.foo.id");
    assert_eq!(refs[0].start, 2);
    assert_eq!(refs[0].end, 2 + "aws_instance.foo.id".len());
}

#[test]
fn test_splat_is_unsupported() {
    let err = extract_references("${aws_instance.foo.*.id}", &catalog()).unwrap_err();
    assert!(
        matches!(err, HclExprError::UnsupportedFeature { .. }),
        "expected UnsupportedFeature, got {:?}",
        err
    );

    // Regardless of catalog contents.
    let empty: Vec<&str> = Vec::new();
    let err = extract_references("${aws_instance.foo.*.id}", &empty).unwrap_err();
    assert!(matches!(err, HclExprError::UnsupportedFeature { .. }));
}

#[test]
fn test_unknown_reference_reports_input_and_catalog() {
    let err = extract_references("${undeclared.thing.id}", &catalog()).unwrap_err();
    match &err {
        HclExprError::UnknownReference {
            expression,
            catalog,
        } => {
            assert_eq!(expression, "${undeclared.thing.id}");
            assert!(catalog.contains("\"aws_instance.foo\""));
            assert!(catalog.contains("\"module.vpc\""));
        }
        other => panic!("expected UnknownReference, got {:?}", other),
    }
    assert!(err.to_string().contains("undeclared.thing.id"));
}

#[test]
fn test_unknown_reference_fails_whole_extraction() {
    let result = extract_references("${var.environment == undeclared.thing}", &catalog());
    assert!(result.is_err(), "no partial result on failure");
}

#[test]
fn test_data_source_requires_third_segment() {
    let refs = extract_references("${data.aws_ami.ubuntu.id}", &catalog()).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].referencee.id, "data.aws_ami.ubuntu");

    let err = extract_references("${data.aws_ami.debian.id}", &catalog()).unwrap_err();
    assert!(matches!(err, HclExprError::UnknownReference { .. }));
}

#[test]
fn test_operators_split_references_in_discovery_order() {
    let input = "${var.environment == \"prod\" && local.prefix != module.vpc.name}";
    let refs = extract_references(input, &catalog()).unwrap();
    let ids: Vec<&str> = refs.iter().map(|r| r.referencee.id.as_str()).collect();
    assert_eq!(ids, vec!["var.environment", "local.prefix", "module.vpc"]);

    for r in &refs {
        assert!(r.start < r.end);
        assert_eq!(&input[r.start..r.end], r.referencee.full);
    }
}

#[test]
fn test_function_call_arguments() {
    let refs =
        extract_references("${max(var.environment, aws_s3_bucket.logs.arn)}", &catalog()).unwrap();
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].referencee.full, "var.environment");
    assert_eq!(refs[1].referencee.full, "aws_s3_bucket.logs.arn");
}

#[test]
fn test_loop_meta_variables_are_skipped() {
    let refs = extract_references("${count.index + each.value.port}", &catalog()).unwrap();
    assert!(refs.is_empty());
}

#[test]
fn test_dangling_access_and_spread_are_skipped() {
    let refs = extract_references("${foo(var.users...)}", &catalog()).unwrap();
    assert!(refs.is_empty(), "spread is not a reference");

    let refs = extract_references("${lookup(x) .attr}", &catalog()).unwrap();
    assert!(refs.is_empty(), "dangling property access is not a reference");
}

#[test]
fn test_for_comprehension_only_scans_source_collection() {
    let input = "${[for name, user in var.users : user.role]}";
    let refs = extract_references(input, &catalog()).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].referencee.id, "var.users");
    assert_eq!(&input[refs[0].start..refs[0].end], "var.users");
}

#[test]
fn test_object_comprehension_with_arrow() {
    let input = "${{for k, v in var.users : k => v.name}}";
    let refs = extract_references(input, &catalog()).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].referencee.full, "var.users");
}

#[test]
fn test_keyword_substrings_do_not_trigger_comprehension() {
    let input = "${format(\"%s:%s\", aws_instance.foo.id, var.environment)}";
    let refs = extract_references(input, &catalog()).unwrap();
    let fulls: Vec<&str> = refs.iter().map(|r| r.referencee.full.as_str()).collect();
    assert_eq!(fulls, vec!["aws_instance.foo.id", "var.environment"]);
}

#[test]
fn test_doubled_marker() {
    let refs = extract_references("${{var.environment}}", &catalog()).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].referencee.full, "var.environment");
    assert_eq!(refs[0].start, 3);
}

#[test]
fn test_multiple_interpolation_segments() {
    let input = "${var.environment}-${local.prefix}";
    let refs = extract_references(input, &catalog()).unwrap();
    assert_eq!(refs.len(), 2);
    assert_eq!(&input[refs[0].start..refs[0].end], "var.environment");
    assert_eq!(&input[refs[1].start..refs[1].end], "local.prefix");
}

#[test]
fn test_repeated_reference_gets_distinct_spans() {
    let input = "${var.environment}/${var.environment}";
    let refs = extract_references(input, &catalog()).unwrap();
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].start, 2);
    assert!(refs[1].start >= refs[0].end);
    assert_eq!(&input[refs[1].start..refs[1].end], "var.environment");
}

#[test]
fn test_extractor_reuses_catalog() {
    let catalog = NodeCatalog::new(catalog());
    let extractor = ReferenceExtractor::new(&catalog);

    assert_eq!(extractor.extract("${var.environment}").unwrap().len(), 1);
    assert_eq!(extractor.extract("${module.vpc.vpc_id}").unwrap().len(), 1);
    assert!(extractor.extract("no markers").unwrap().is_empty());
}
