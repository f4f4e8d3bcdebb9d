use console::Style;
use std::collections::HashMap;
use tagstyle::{
    attributed, attributed_with, strip_markup, Attributes, Error, ErrorKind, Options,
    StyledText, TagStyles, UnclosedTags, Unbalanced,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Attr {
    Font,
    Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Big,
    Green,
}

fn scenario_tags() -> TagStyles<Attr, Value> {
    HashMap::from([
        ("loud".to_string(), Attributes::from([(Attr::Font, Value::Big)])),
        ("green".to_string(), Attributes::from([(Attr::Color, Value::Green)])),
    ])
    .into()
}

fn terminal_styles() -> TagStyles<&'static str, Style> {
    TagStyles::new()
        .add("red", Attributes::new().with("fg", Style::new().red().force_styling(true)))
        .add("bold", Attributes::new().with("weight", Style::new().bold().force_styling(true)))
        .add("error", "red")
}

#[test]
fn test_nested_tags_scenario() {
    let styled = attributed(
        "Testing <loud>this <green>text</green></loud> thing.",
        &scenario_tags(),
    )
    .unwrap();

    let runs: Vec<_> = styled
        .iter()
        .map(|run| (run.text(), run.attributes().clone()))
        .collect();
    assert_eq!(
        runs,
        vec![
            ("Testing ", Attributes::new()),
            ("this ", Attributes::from([(Attr::Font, Value::Big)])),
            (
                "text",
                Attributes::from([(Attr::Font, Value::Big), (Attr::Color, Value::Green)])
            ),
            (" thing.", Attributes::new()),
        ]
    );
}

#[test]
fn test_entity_scenario() {
    let styled = attributed("A &amp; B", &scenario_tags()).unwrap();
    assert_eq!(styled.plain_text(), "A & B");
    assert!(styled.iter().all(|run| run.attributes().is_empty()));

    // Runs are not merged by default; coalescing gives the single run.
    let merged = attributed_with("A &amp; B", &scenario_tags(), &Options::new().coalesce(true))
        .unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.runs()[0].text(), "A & B");
}

#[test]
fn test_unterminated_tag_scenario() {
    assert_eq!(
        attributed("<b", &scenario_tags()).unwrap_err(),
        Error::UnterminatedTag { offset: 0 }
    );
}

#[test]
fn test_unclosed_tag_scenario() {
    let err = attributed("<b>unterminated", &scenario_tags()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnbalancedTags);

    let options = Options::new().unclosed_tags(UnclosedTags::Discard);
    let styled = attributed_with("<b>unterminated", &scenario_tags(), &options).unwrap();
    assert_eq!(styled.plain_text(), "unterminated");
}

#[test]
fn test_close_without_open_scenario() {
    assert!(matches!(
        attributed("</b>", &scenario_tags()),
        Err(Error::UnbalancedTags(Unbalanced::UnexpectedClose { .. }))
    ));
}

#[test]
fn test_overlapping_scenario() {
    assert!(matches!(
        attributed("<b><i>x</b></i>", &scenario_tags()),
        Err(Error::UnbalancedTags(Unbalanced::Mismatched { .. }))
    ));
}

#[test]
fn test_plain_text_scenario() {
    let styled = attributed("plain text", &scenario_tags()).unwrap();
    assert_eq!(styled.len(), 1);
    assert_eq!(styled.runs()[0].text(), "plain text");
    assert!(styled.runs()[0].attributes().is_empty());
}

#[test]
fn test_strip_markup_matches_plain_text() {
    let input = "<loud>3 &lt; 4</loud> &amp; <x>&nope;5 &gt; 2</x>";
    let styled = attributed(input, &scenario_tags()).unwrap();
    assert_eq!(strip_markup(input).unwrap(), styled.plain_text());
    assert_eq!(styled.to_string(), "3 < 4 & 5 > 2");
}

#[test]
fn test_terminal_styles_as_host_values() {
    let styled: StyledText<&str, Style> =
        attributed("[<error>failed</error>] <bold>3</bold> checks", &terminal_styles()).unwrap();

    // Render each run by applying every style it carries.
    let rendered: String = styled
        .iter()
        .map(|run| {
            run.attributes()
                .iter()
                .fold(run.text().to_string(), |text, (_, style)| {
                    style.apply_to(text).to_string()
                })
        })
        .collect();

    assert!(rendered.contains("\x1b[31m")); // Red
    assert!(rendered.contains("\x1b[1m")); // Bold
    assert!(rendered.contains("failed"));
    assert!(rendered.contains("checks"));
}

#[test]
fn test_invalid_registry_is_reported() {
    let tags = terminal_styles().add("warning", "yellow");
    let err = attributed("fine", &tags).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidStyles);
    assert!(err.to_string().contains("yellow"));
}
