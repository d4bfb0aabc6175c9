//! Combined parsing of `[Example<Type>(new[] { 0, 1, 1, 2 }, name: "Fib", Answer = 42)]`.

use std::sync::Arc;

use attribute_parser::base::{
    ArgumentValue, AttributeArgumentSyntax, ExpressionSyntax, NamedArgument, TextRange, TypeRef,
};
use attribute_parser::location::{CollectionLocation, Location};
use attribute_parser::mappers::{CombinedMapper, MapperOptions, Mappings};
use attribute_parser::parsing::{
    ArgumentCategory, CombinedParser, DiagnosticCollector, ParseDiagnostic,
};
use attribute_parser::pattern;
use attribute_parser::repositories::{
    Combined, CombinedMappingRepository, ParameterComparer, RepositoryError,
};

use crate::helpers::fixtures::{
    EXAMPLE, element_ranges, example_data, example_syntax, initializer_range, range_of,
    tags_attribute,
};

#[derive(Debug, Default)]
struct ExampleRecord {
    t: Option<TypeRef>,
    t_location: Location,
    sequence: Option<Vec<i32>>,
    sequence_location: Option<Arc<CollectionLocation>>,
    name: Option<String>,
    name_location: Location,
    answer: Option<i32>,
    answer_location: Location,
}

fn example_mapper(
    options: MapperOptions,
) -> CombinedMapper<ExampleRecord, impl Mappings<Combined<ExampleRecord>>> {
    CombinedMapper::with_options(
        |repository: &mut CombinedMappingRepository<ExampleRecord>| -> Result<(), RepositoryError> {
            repository.type_parameters.add_indexed_mapping_with(0, |recorders| {
                recorders.assign_type_argument(|record: &mut ExampleRecord, ty, location| {
                    record.t = Some(ty);
                    record.t_location = location;
                })
            })?;
            repository
                .constructor_parameters
                .add_named_mapping_with("Sequence", |recorders| {
                    recorders.assign_collection(
                        pattern::array(pattern::i32()),
                        |record: &mut ExampleRecord, sequence, location| {
                            record.sequence = Some(sequence);
                            record.sequence_location = Some(location);
                        },
                    )
                })?;
            repository
                .constructor_parameters
                .add_named_mapping_with("Name", |recorders| {
                    recorders.assign_constructor(
                        pattern::string(),
                        |record: &mut ExampleRecord, name, location| {
                            record.name = Some(name);
                            record.name_location = location;
                        },
                    )
                })?;
            repository
                .named_parameters
                .add_named_mapping_with("Answer", |recorders| {
                    recorders.assign_named(
                        pattern::i32(),
                        |record: &mut ExampleRecord, answer, location| {
                            record.answer = Some(answer);
                            record.answer_location = location;
                        },
                    )
                })
        },
        options,
    )
}

fn case_insensitive() -> MapperOptions {
    MapperOptions::default().with_comparer(ParameterComparer::case_insensitive())
}

#[test]
fn test_example_attribute_end_to_end() {
    let diagnostics = Arc::new(DiagnosticCollector::new());
    let parser = CombinedParser::with_diagnostics(diagnostics.clone());
    let mapper = example_mapper(case_insensitive());
    let mut record = ExampleRecord::default();

    let parsed = {
        let mut recorder = mapper.recorder(&mut record).unwrap();
        parser.try_parse(&mut recorder, &example_data(), &example_syntax())
    };

    assert!(parsed);
    assert!(diagnostics.is_empty());
    assert_eq!(record.t, Some(TypeRef::new("Type")));
    assert_eq!(record.sequence, Some(vec![0, 1, 1, 2]));
    assert_eq!(record.name.as_deref(), Some("Fib"));
    assert_eq!(record.answer, Some(42));
}

#[test]
fn test_example_attribute_locations() {
    let mapper = example_mapper(case_insensitive());
    let mut record = ExampleRecord::default();

    let parsed = {
        let mut recorder = mapper.recorder(&mut record).unwrap();
        CombinedParser::new().try_parse(&mut recorder, &example_data(), &example_syntax())
    };
    assert!(parsed);

    assert_eq!(record.t_location, Location::Source(range_of(EXAMPLE, "Type")));
    assert_eq!(
        record.name_location,
        Location::Source(range_of(EXAMPLE, "\"Fib\""))
    );
    assert_eq!(
        record.answer_location,
        Location::Source(range_of(EXAMPLE, "42"))
    );

    let sequence = record.sequence_location.unwrap();
    assert_eq!(
        sequence.collection(),
        Location::Source(initializer_range(EXAMPLE))
    );
    let elements: Vec<Location> = element_ranges(EXAMPLE)
        .into_iter()
        .map(Location::Source)
        .collect();
    assert_eq!(sequence.elements(), elements.as_slice());
}

#[test]
fn test_mismatched_named_value_fails_parse() {
    let diagnostics = Arc::new(DiagnosticCollector::new());
    let mapper = example_mapper(case_insensitive());
    let mut data = example_data();
    data.named_arguments = vec![NamedArgument::new("Answer", ArgumentValue::I64(42))];
    let mut record = ExampleRecord::default();

    let parsed = {
        let mut recorder = mapper.recorder(&mut record).unwrap();
        CombinedParser::with_diagnostics(diagnostics.clone()).try_parse(
            &mut recorder,
            &data,
            &example_syntax(),
        )
    };

    assert!(!parsed);
    assert_eq!(record.answer, None);
    assert_eq!(
        diagnostics.diagnostics(),
        vec![ParseDiagnostic::ArgumentRejected {
            category: ArgumentCategory::Named,
            parameter: "Answer".into(),
        }]
    );
}

#[test]
fn test_unmapped_named_argument_is_skipped() {
    let diagnostics = Arc::new(DiagnosticCollector::new());
    let mapper = example_mapper(case_insensitive());
    let mut data = example_data();
    data.named_arguments
        .push(NamedArgument::new("Comment", ArgumentValue::String("x".into())));
    let mut syntax = example_syntax();
    syntax.arguments.push(AttributeArgumentSyntax::named(
        "Comment",
        ExpressionSyntax::literal(TextRange::new(70.into(), 73.into())),
    ));
    let mut record = ExampleRecord::default();

    let parsed = {
        let mut recorder = mapper.recorder(&mut record).unwrap();
        CombinedParser::with_diagnostics(diagnostics.clone()).try_parse(
            &mut recorder,
            &data,
            &syntax,
        )
    };

    assert!(parsed);
    assert!(diagnostics.is_empty());
    assert_eq!(record.answer, Some(42));
}

#[test]
fn test_ordinal_comparer_leaves_differently_cased_parameters_unmapped() {
    let mapper = example_mapper(MapperOptions::default());
    let mut record = ExampleRecord::default();

    let parsed = {
        let mut recorder = mapper.recorder(&mut record).unwrap();
        CombinedParser::new().try_parse(&mut recorder, &example_data(), &example_syntax())
    };

    assert!(parsed);
    assert_eq!(record.sequence, None);
    assert_eq!(record.name, None);
    assert_eq!(record.answer, Some(42));
}

// ============================================================================
// CASTS PASSED TO PARAMS
// ============================================================================

#[derive(Debug, Default)]
struct TagRecord {
    tags: Option<Option<Vec<Option<String>>>>,
    location: Option<Arc<CollectionLocation>>,
}

fn tag_mapper() -> CombinedMapper<TagRecord, impl Mappings<Combined<TagRecord>>> {
    CombinedMapper::new(
        |repository: &mut CombinedMappingRepository<TagRecord>| -> Result<(), RepositoryError> {
            repository
                .constructor_parameters
                .add_named_mapping_with("tags", |recorders| {
                    recorders.assign_collection(
                        pattern::nullable_array(pattern::nullable_string()),
                        |record: &mut TagRecord, tags, location| {
                            record.tags = Some(tags);
                            record.location = Some(location);
                        },
                    )
                })
        },
    )
}

#[test]
fn test_element_cast_is_one_params_element() {
    let source = "[Tags((string)null)]";
    let cast = range_of(source, "(string)null");
    let (data, syntax) = tags_attribute(
        vec![ArgumentValue::Null],
        vec![ExpressionSyntax::cast(
            ExpressionSyntax::null(range_of(source, "null")),
            cast,
        )],
        source.len() as u32,
    );
    let mapper = tag_mapper();
    let mut record = TagRecord::default();

    let parsed = {
        let mut recorder = mapper.recorder(&mut record).unwrap();
        CombinedParser::new().try_parse(&mut recorder, &data, &syntax)
    };

    assert!(parsed);
    let values = record.tags.unwrap().unwrap();
    let location = record.location.unwrap();
    assert_eq!(values, vec![None]);
    assert_eq!(location.elements().len(), values.len());
    assert_eq!(location.collection(), Location::None);
    assert_eq!(location.elements(), &[Location::Source(cast)]);
}

#[test]
fn test_array_cast_is_the_params_array() {
    let source = "[Tags((string[])null)]";
    let null = range_of(source, "null");
    let (mut data, syntax) = tags_attribute(
        vec![],
        vec![ExpressionSyntax::array_cast(
            ExpressionSyntax::null(null),
            range_of(source, "(string[])null"),
        )],
        source.len() as u32,
    );
    data.constructor_arguments = vec![ArgumentValue::Null];
    let mapper = tag_mapper();
    let mut record = TagRecord::default();

    let parsed = {
        let mut recorder = mapper.recorder(&mut record).unwrap();
        CombinedParser::new().try_parse(&mut recorder, &data, &syntax)
    };

    assert!(parsed);
    assert_eq!(record.tags, Some(None));
    let location = record.location.unwrap();
    assert_eq!(location.collection(), Location::Source(null));
    assert!(location.elements().is_empty());
}
