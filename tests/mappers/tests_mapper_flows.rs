//! `[Paint(Color.Green, Accent = null, Palette = new[] { Color.Red, Color.Green })]`
//! through semantic and syntactic mappers.

use attribute_parser::base::{
    ArgumentValue, AttributeArgumentSyntax, AttributeClass, AttributeConstructor, AttributeData,
    AttributeSyntax, EnumConstant, ExpressionKind, ExpressionSyntax, NamedArgument, Parameter,
    TextRange, TypeRef,
};
use attribute_parser::location::Location;
use attribute_parser::mappers::{MapperError, Mappings, SemanticMapper, SyntacticMapper};
use attribute_parser::parsing::{SemanticParser, SemanticPass, SyntacticParser, SyntacticPass};
use attribute_parser::pattern::{self, ArgumentEnum};
use attribute_parser::repositories::{
    RepositoryError, Semantic, SemanticMappingRepository, Syntactic, SyntacticMappingRepository,
};
use rstest::rstest;

const COLOR: &str = "Demo.Color";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
}

impl ArgumentEnum for Color {
    const TYPE_NAME: &'static str = COLOR;

    fn from_underlying(value: i64) -> Option<Self> {
        match value {
            0 => Some(Color::Red),
            1 => Some(Color::Green),
            _ => None,
        }
    }
}

fn color(value: i64) -> ArgumentValue {
    ArgumentValue::Enum(EnumConstant::new(COLOR, value))
}

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

fn paint_data(color_argument: ArgumentValue, named: Vec<NamedArgument>) -> AttributeData {
    AttributeData {
        attribute_class: Some(AttributeClass {
            name: TypeRef::new("Paint"),
            type_parameters: vec![],
            type_arguments: vec![],
        }),
        constructor: Some(AttributeConstructor {
            parameters: vec![Parameter::new("color", 0), Parameter::optional("opacity", 1)],
        }),
        constructor_arguments: vec![color_argument, ArgumentValue::F64(1.0)],
        named_arguments: named,
    }
}

#[derive(Debug, Default)]
struct Paint {
    color: Option<Color>,
    opacity: Option<f64>,
    accent: Option<Option<Color>>,
    palette: Option<Vec<Color>>,
}

fn paint_mapper() -> SemanticMapper<Paint, impl Mappings<Semantic<Paint>>> {
    SemanticMapper::new(
        |repository: &mut SemanticMappingRepository<Paint>| -> Result<(), RepositoryError> {
            repository
                .constructor_parameters
                .add_named_mapping_with("color", |recorders| {
                    recorders.assign(pattern::enumeration::<Color>(), |record: &mut Paint, c| {
                        record.color = Some(c)
                    })
                })?;
            repository
                .constructor_parameters
                .add_named_mapping_with("opacity", |recorders| {
                    recorders.assign(pattern::f64(), |record: &mut Paint, opacity| {
                        record.opacity = Some(opacity)
                    })
                })?;
            repository
                .named_parameters
                .add_named_mapping_with("Accent", |recorders| {
                    recorders.assign(
                        pattern::nullable(pattern::enumeration::<Color>()),
                        |record: &mut Paint, accent| record.accent = Some(accent),
                    )
                })?;
            repository
                .named_parameters
                .add_named_mapping_with("Palette", |recorders| {
                    recorders.assign(
                        pattern::array(pattern::enumeration::<Color>()),
                        |record: &mut Paint, palette| record.palette = Some(palette),
                    )
                })
        },
    )
}

fn parse_paint(data: &AttributeData) -> (bool, Paint) {
    let mapper = paint_mapper();
    let mut paint = Paint::default();
    let parsed = SemanticParser::new().try_parse(&mut mapper.recorder(&mut paint).unwrap(), data);
    (parsed, paint)
}

#[test]
fn test_enum_nullable_and_array_patterns() {
    let data = paint_data(
        color(1),
        vec![
            NamedArgument::new("Accent", ArgumentValue::Null),
            NamedArgument::new("Palette", ArgumentValue::Array(vec![color(0), color(1)])),
        ],
    );

    let (parsed, paint) = parse_paint(&data);

    assert!(parsed);
    assert_eq!(paint.color, Some(Color::Green));
    assert_eq!(paint.opacity, Some(1.0));
    assert_eq!(paint.accent, Some(None));
    assert_eq!(paint.palette, Some(vec![Color::Red, Color::Green]));
}

#[rstest]
#[case::other_enum_type(ArgumentValue::Enum(EnumConstant::new("Demo.Shade", 1)))]
#[case::undefined_value(color(7))]
#[case::underlying_integer(ArgumentValue::I64(1))]
#[case::integer_of_enum_width(ArgumentValue::I32(1))]
#[case::null(ArgumentValue::Null)]
fn test_enum_pattern_rejects(#[case] argument: ArgumentValue) {
    let (parsed, paint) = parse_paint(&paint_data(argument, vec![]));

    assert!(!parsed);
    assert_eq!(paint.color, None);
}

#[test]
fn test_palette_is_all_or_nothing() {
    let data = paint_data(
        color(0),
        vec![NamedArgument::new(
            "Palette",
            ArgumentValue::Array(vec![color(0), ArgumentValue::Null]),
        )],
    );

    let (parsed, paint) = parse_paint(&data);

    assert!(!parsed);
    assert_eq!(paint.palette, None);
}

// ============================================================================
// SYNTACTIC
// ============================================================================

#[derive(Debug, Default)]
struct PaintLocations {
    color: Option<Location>,
    opacity: Option<Location>,
}

fn paint_location_mapper() -> SyntacticMapper<PaintLocations, impl Mappings<Syntactic<PaintLocations>>>
{
    SyntacticMapper::new(
        |repository: &mut SyntacticMappingRepository<PaintLocations>| -> Result<(), RepositoryError> {
            repository
                .constructor_parameters
                .add_named_mapping_with("color", |recorders| {
                    recorders.assign_constructor_location(
                        |record: &mut PaintLocations, location| record.color = Some(location),
                    )
                })?;
            repository
                .constructor_parameters
                .add_named_mapping_with("opacity", |recorders| {
                    recorders.assign_constructor_location(
                        |record: &mut PaintLocations, location| record.opacity = Some(location),
                    )
                })
        },
    )
}

#[test]
fn test_omitted_optional_argument_has_no_location() {
    // [Paint(Color.Green)]
    let syntax = AttributeSyntax {
        type_arguments: vec![],
        arguments: vec![AttributeArgumentSyntax::positional(ExpressionSyntax::new(
            ExpressionKind::Other,
            range(7, 18),
        ))],
        range: range(0, 20),
    };
    let data = paint_data(color(1), vec![]);
    let mapper = paint_location_mapper();
    let mut locations = PaintLocations::default();

    assert!(SyntacticParser::new().try_parse(
        &mut mapper.recorder(&mut locations).unwrap(),
        &data,
        &syntax
    ));

    assert_eq!(locations.color, Some(Location::Source(range(7, 18))));
    assert_eq!(locations.opacity, Some(Location::NONE));
}

#[test]
fn test_failing_hook_surfaces_through_every_lookup() {
    let mapper = SemanticMapper::<Paint, _>::new(
        |repository: &mut SemanticMappingRepository<Paint>| -> Result<(), RepositoryError> {
            repository
                .named_parameters
                .add_named_mapping_with("Accent", |recorders| {
                    recorders.argument(|_: &mut Paint, _| true)
                })?;
            repository
                .named_parameters
                .add_named_mapping_with("Accent", |recorders| {
                    recorders.argument(|_: &mut Paint, _| true)
                })
        },
    );
    let mut paint = Paint::default();

    for _ in 0..2 {
        let error = mapper.recorder(&mut paint).map(|_| ()).unwrap_err();
        assert!(matches!(
            error,
            MapperError::Initialization(RepositoryError::DuplicateName(_))
        ));
        assert!(
            error
                .to_string()
                .starts_with("failed to initialize mappings")
        );
    }
}
