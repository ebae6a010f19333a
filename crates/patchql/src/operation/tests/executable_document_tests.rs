use crate::loc::SourcePosition;
use crate::operation::ExecutableDocument;
use crate::operation::FieldSelection;
use crate::operation::Operation;
use crate::operation::OperationBuildError;
use crate::operation::OperationKind;
use crate::operation::OperationLookupError;
use crate::operation::Selection;
use crate::Value;

#[test]
fn loads_anonymous_mutation() {
    let doc = ExecutableDocument::from_str(
        r#"mutation { updateUser(input: {id: 123, name: "Marta"}) { id } }"#,
    ).unwrap();

    let op = doc.operation(None).unwrap();
    assert_eq!(op.kind(), OperationKind::Mutation);
    assert_eq!(op.name(), None);

    let fields: Vec<&FieldSelection> = op.field_selections().collect();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name(), "updateUser");
    assert_eq!(fields[0].selection_set().len(), 1);

    let input = fields[0].argument("input").unwrap().as_object().unwrap();
    assert_eq!(input.keys().collect::<Vec<_>>(), vec!["id", "name"]);
}

#[test]
fn keeps_object_literal_fields_in_written_order() {
    let doc = ExecutableDocument::from_str(
        r#"mutation { updateUser(input: {name: "Marta", id: 123, age: 40}) { id } }"#,
    ).unwrap();

    let selection = doc.operation(None).unwrap().field_selections().next().unwrap();
    let input = selection.argument("input").unwrap().as_object().unwrap();
    assert_eq!(input.keys().collect::<Vec<_>>(), vec!["name", "id", "age"]);
    assert_eq!(input.get("id"), Some(&Value::Int(123)));
}

#[test]
fn shorthand_selection_set_is_a_query() {
    let doc = ExecutableDocument::from_str("{ user(id: 1) { id } }").unwrap();
    assert_eq!(doc.operation(None).unwrap().kind(), OperationKind::Query);
}

#[test]
fn records_operation_kind_and_name() {
    let doc = ExecutableDocument::from_str(
        r#"
        query GetUser { user(id: 1) { id } }
        mutation UpdateUser { updateUser(input: {id: 1}) { id } }
        subscription OnUser { userUpdated { id } }
        "#,
    ).unwrap();

    let kinds: Vec<_> = doc.operations().iter()
        .map(|op| (op.name(), op.kind()))
        .collect();
    assert_eq!(kinds, vec![
        (Some("GetUser"), OperationKind::Query),
        (Some("UpdateUser"), OperationKind::Mutation),
        (Some("OnUser"), OperationKind::Subscription),
    ]);
}

#[test]
fn records_declared_variables_in_order() {
    let doc = ExecutableDocument::from_str(
        "mutation ($input: UpdateUserInput!, $settings: SettingsInput) {
            updateUser(input: $input, settings: $settings) { id }
        }",
    ).unwrap();

    let op = doc.operation(None).unwrap();
    assert_eq!(op.variable_names().collect::<Vec<_>>(), vec!["input", "settings"]);
    assert!(op.declares_variable("settings"));
    assert!(!op.declares_variable("other"));

    let selection = op.field_selections().next().unwrap();
    assert_eq!(
        selection.argument("settings"),
        Some(&Value::Variable("settings".to_string())),
    );
    assert_eq!(
        selection.argument("input").and_then(Value::as_variable_name),
        Some("input"),
    );
}

#[test]
fn keeps_arguments_in_written_order() {
    let doc = ExecutableDocument::from_str(
        "mutation { updateUser(settings: {notify: true}, input: {id: 1}, force: true) { id } }",
    ).unwrap();

    let selection = doc.operation(None).unwrap().field_selections().next().unwrap();
    let arg_names: Vec<&str> = selection.arguments().keys().map(String::as_str).collect();
    assert_eq!(arg_names, vec!["settings", "input", "force"]);
}

#[test]
fn keeps_aliases_and_fragments() {
    let doc = ExecutableDocument::from_str(
        "mutation {
            renamed: updateUser(input: {id: 1}) { id }
            ... on Mutation { deleteUser(id: 1) }
            ...MoreFields
        }
        fragment MoreFields on Mutation { deleteUser(id: 2) }",
    ).unwrap();

    let op = doc.operation(None).unwrap();
    assert_eq!(op.selections().len(), 3);
    assert_eq!(op.field_selections().count(), 1);

    let field = op.field_selections().next().unwrap();
    assert_eq!(field.name(), "updateUser");
    assert_eq!(field.alias(), Some("renamed"));
    assert_eq!(field.selected_name(), "renamed");

    match &op.selections()[1] {
        Selection::InlineFragment(inline) => {
            assert_eq!(inline.type_condition(), Some("Mutation"));
            assert_eq!(inline.selection_set().len(), 1);
        },
        other => panic!("Expected an inline fragment, found {other:?}"),
    }
    match &op.selections()[2] {
        Selection::FragmentSpread(spread) =>
            assert_eq!(spread.fragment_name(), "MoreFields"),
        other => panic!("Expected a fragment spread, found {other:?}"),
    }
}

#[test]
fn records_field_position() {
    let doc = ExecutableDocument::from_str(
        "mutation {\n  updateUser(input: {id: 1}) { id }\n}",
    ).unwrap();

    let field = doc.operation(None).unwrap().field_selections().next().unwrap();
    assert_eq!(field.def_location(), &SourcePosition::new(2, 3));
}

#[test]
fn duplicate_argument_is_an_error() {
    let result = ExecutableDocument::from_str(
        "mutation { updateUser(input: {id: 1}, input: {id: 2}) { id } }",
    );

    match result {
        Err(OperationBuildError::DuplicateFieldArgument {
            argument_name,
            field_name,
            ..
        }) => {
            assert_eq!(argument_name, "input");
            assert_eq!(field_name, "updateUser");
        },
        other => panic!("Expected DuplicateFieldArgument, found {other:?}"),
    }
}

#[test]
fn duplicate_variable_is_an_error() {
    let result = ExecutableDocument::from_str(
        "mutation ($a: Int, $a: Int) { updateUser(input: {id: $a}) { id } }",
    );

    assert!(
        matches!(
            result,
            Err(OperationBuildError::DuplicateVariableName { ref variable_name, .. })
                if variable_name == "a"
        ),
        "Expected DuplicateVariableName, found {result:?}",
    );
}

#[test]
fn unparseable_document_is_a_parse_error() {
    let result = ExecutableDocument::from_str("mutation { updateUser(");
    assert!(matches!(result, Err(OperationBuildError::ParseError(_))));
}

#[test]
fn lookup_by_operation_name() {
    let doc = ExecutableDocument::from_str(
        "mutation A { a(input: {x: 1}) }
         mutation B { b(input: {y: 1}) }",
    ).unwrap();

    assert_eq!(doc.operation(Some("B")).unwrap().name(), Some("B"));
    assert_eq!(
        doc.operation(None),
        Err(OperationLookupError::AmbiguousOperation { num_operations_found: 2 }),
    );
    assert_eq!(
        doc.operation(Some("C")),
        Err(OperationLookupError::OperationNotFound {
            operation_name: "C".to_string(),
        }),
    );
}

#[test]
fn empty_document_has_no_operation() {
    let doc = ExecutableDocument::from_operations(vec![]);
    assert_eq!(doc.operation(None), Err(OperationLookupError::NoOperationsFound));
}

#[test]
fn builders_reject_duplicates() {
    let field_result = FieldSelection::builder("updateUser")
        .add_argument("input", Value::Null)
        .unwrap()
        .add_argument("input", Value::Boolean(true));
    assert!(matches!(
        field_result,
        Err(OperationBuildError::DuplicateFieldArgument { .. }),
    ));

    let op_result = Operation::builder(OperationKind::Mutation)
        .add_variable("input")
        .unwrap()
        .add_variable("input");
    assert!(matches!(
        op_result,
        Err(OperationBuildError::DuplicateVariableName { .. }),
    ));
}
