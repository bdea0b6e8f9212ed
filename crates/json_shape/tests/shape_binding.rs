use geometry::Rectangle;
use json_shape::{Error, Value, bind, parse, parse_value, stringify};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

fn init_logging() {
    let _log_init: Result<(), _> = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    age: u32,
    tags: Vec<String>,
    manager: Option<String>,
    score: f64,
}

/// Plain data with no methods of its own.
#[derive(Debug, PartialEq, Deserialize)]
struct Size {
    width: i64,
    height: i64,
}

#[test]
fn bound_shape_exposes_its_methods() -> Result<(), Error> {
    init_logging();
    let rect: Rectangle<i64> = parse(r#"{"width": 10, "height": 20}"#)?;
    assert_eq!(rect.width, 10);
    assert_eq!(rect.height, 20);
    assert_eq!(rect.area(), 200);
    Ok(())
}

#[test]
fn only_matching_fields_are_copied() -> Result<(), Error> {
    init_logging();
    let rect: Rectangle<i64> = parse(r#"{"height": 3, "colour": "red", "width": 4}"#)?;
    assert_eq!(rect, Rectangle::new(4, 3));
    Ok(())
}

#[test]
fn missing_field_fails_binding() {
    init_logging();
    let result = parse::<Rectangle<i64>>(r#"{"width": 10}"#);
    assert_eq!(result.map_err(|err| err.classify()), Err(Category::Data));
}

#[test]
fn malformed_text_fails_before_binding() {
    init_logging();
    let result = parse::<Rectangle<i64>>("{width: 10, height: 20}");
    assert_eq!(result.map_err(|err| err.classify()), Err(Category::Syntax));
}

#[test]
fn plain_values_round_trip() -> Result<(), Error> {
    init_logging();
    let profile = Profile {
        name: "Ada".to_owned(),
        age: 36,
        tags: vec!["math".to_owned(), "engines".to_owned()],
        manager: None,
        score: 9.5,
    };
    let text = stringify(&profile)?;
    assert_eq!(
        text,
        r#"{"name":"Ada","age":36,"tags":["math","engines"],"manager":null,"score":9.5}"#
    );
    let back: Profile = parse(&text)?;
    assert_eq!(back, profile);
    Ok(())
}

#[test]
fn rectangle_survives_a_round_trip_into_a_plain_shape() -> Result<(), Error> {
    init_logging();
    let text = stringify(&Rectangle::new(7i64, 6))?;
    let size: Size = parse(&text)?;
    assert_eq!(size, Size { width: 7, height: 6 });
    Ok(())
}

#[test]
fn generic_value_can_be_bound_later() -> Result<(), Error> {
    init_logging();
    let value = parse_value(r#"[{"width": 1, "height": 2}, {"width": 3, "height": 4}]"#)?;
    let first = value.get(0).cloned().unwrap_or(Value::Null);
    let rects: Vec<Rectangle<i64>> = bind(value)?;
    let areas: Vec<i64> = rects.iter().map(Rectangle::area).collect();
    assert_eq!(areas, [2, 12]);
    let single: Rectangle<i64> = bind(first)?;
    assert_eq!(single.perimeter(), 6);
    Ok(())
}
