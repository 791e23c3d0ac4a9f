use article_core::content::{process_article, ConfigError, ProcessorConfig};
use article_core::types::{Article, ArticleVersion};
use serde_json::Value;

#[test]
fn golden_processed_article_serialization() {
    let article = Article::new("Deployment Guide", "Steps to deploy.", "ops team");
    let processed = process_article(&article, 100);

    let json_str = serde_json::to_string(&processed).unwrap();

    // "title" -> "slug" -> "excerpt" -> "author"
    let title_pos = json_str.find("\"title\":").unwrap();
    let slug_pos = json_str.find("\"slug\":").unwrap();
    let excerpt_pos = json_str.find("\"excerpt\":").unwrap();
    let author_pos = json_str.find("\"author\":").unwrap();

    assert!(title_pos < slug_pos);
    assert!(slug_pos < excerpt_pos);
    assert!(excerpt_pos < author_pos);

    const EXPECTED_JSON: &str = r#"{"title":"Deployment guide","slug":"deployment-guide","excerpt":"Steps to deploy.","author":"Ops team"}"#;
    assert_eq!(json_str, EXPECTED_JSON);

    let _parsed: Value = serde_json::from_str(&json_str).unwrap();
}

#[test]
fn golden_article_roundtrip_from_host_json() {
    let json = r#"{"title":"SECOND POST","body":"Another post body here.","author":"JOHN SMITH"}"#;
    let article: Article = serde_json::from_str(json).unwrap();
    assert_eq!(article, Article::new("SECOND POST", "Another post body here.", "JOHN SMITH"));
}

#[test]
fn golden_version_format() {
    let version = ArticleVersion::from_content(b"");
    assert_eq!(
        version.as_str(),
        "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(version.to_string(), version.as_str());
    assert_eq!(serde_json::to_string(&version).unwrap(), format!("\"{}\"", version.as_str()));
}

#[test]
fn golden_config_json() {
    let json = serde_json::to_string(&ProcessorConfig::v0()).unwrap();
    assert_eq!(json, r#"{"excerpt_length":100,"suffix":"..."}"#);

    let partial = ProcessorConfig::from_json(r#"{"excerpt_length":40}"#).unwrap();
    assert_eq!(partial, ProcessorConfig::v0().with_excerpt_length(40));

    assert!(matches!(
        ProcessorConfig::from_json(r#"{"excerpt_length":1,"suffix":"..."}"#),
        Err(ConfigError::InvalidExcerptLength { .. })
    ));
    assert!(matches!(
        ProcessorConfig::from_json("not json"),
        Err(ConfigError::Parse(_))
    ));
}
