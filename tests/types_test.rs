use hclexpr::types::*;

#[test]
fn reference_new_computes_end_from_full_text() {
    let r = Reference::new(2, "aws_instance.foo", "aws_instance.foo.id");
    assert_eq!(r.start, 2);
    assert_eq!(r.end, 21);
    assert_eq!(r.segments(), vec!["aws_instance", "foo", "id"]);
}

#[test]
fn expression_kind_as_str() {
    assert_eq!(Expression::string_literal("x").kind().as_str(), "string_literal");
    assert_eq!(Expression::identifier("x").kind().as_str(), "identifier");
    assert_eq!(
        Expression::member(Expression::identifier("x"), "y")
            .kind()
            .as_str(),
        "member"
    );
}

#[test]
fn member_path_flattens_chain() {
    let chain = Expression::member(
        Expression::member(Expression::identifier("vpc"), "subnetsOutput"),
        "ids",
    );
    assert_eq!(chain.member_path(), Some(vec!["vpc", "subnetsOutput", "ids"]));
    assert_eq!(Expression::string_literal("x").member_path(), None);
}

#[test]
fn template_serializes_with_type_tag() {
    let expr = Expression::Template {
        quasis: vec![
            TemplateElement {
                raw: "a-".to_string(),
                tail: false,
            },
            TemplateElement {
                raw: String::new(),
                tail: true,
            },
        ],
        expressions: vec![Expression::identifier("name")],
    };
    let json = serde_json::to_value(&expr).unwrap();
    assert_eq!(json["type"], "template");
    assert_eq!(json["quasis"][0]["raw"], "a-");
    assert_eq!(json["quasis"][1]["tail"], true);
    assert_eq!(json["expressions"][0]["type"], "identifier");
}
