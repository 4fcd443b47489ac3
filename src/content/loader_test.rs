use super::*;

fn write_case_study(dir: &Path, slug: &str, client: &str, date: &str) {
    let source = format!(
        "---\nclient: {client}\nlogo: /images/clients/{slug}/logo.svg\nservice: App development\ndate: {date}\ntitle: {client} title\nsummary:\n  - {client} summary.\n---\n"
    );
    std::fs::write(dir.join(format!("{slug}.md")), source).unwrap();
}

fn record(client: &str, date: &str) -> CaseStudy {
    CaseStudy {
        client: client.into(),
        logo: "logo.svg".into(),
        service: "Design".into(),
        date: date.into(),
        title: "Title".into(),
        summary: Vec::new(),
        testimonial: None,
        href: None,
    }
}

fn clients(case_studies: &[CaseStudy]) -> Vec<&str> {
    case_studies.iter().map(|cs| cs.client.as_str()).collect()
}

// =============================================================================
// order_case_studies
// =============================================================================

#[test]
fn order_case_studies_newest_first() {
    let loaded = vec![
        ("a".to_owned(), record("Old", "2021-03-01")),
        ("b".to_owned(), record("New", "2023-06-01")),
        ("c".to_owned(), record("Mid", "2022-01-15")),
    ];
    let ordered = order_case_studies(loaded).unwrap();
    assert_eq!(clients(&ordered), vec!["New", "Mid", "Old"]);
}

#[test]
fn order_case_studies_breaks_date_ties_by_slug() {
    let loaded = vec![
        ("zeta".to_owned(), record("Zeta", "2023-01-01")),
        ("alpha".to_owned(), record("Alpha", "2023-01-01")),
    ];
    let ordered = order_case_studies(loaded).unwrap();
    assert_eq!(clients(&ordered), vec!["Alpha", "Zeta"]);
}

#[test]
fn order_case_studies_rejects_duplicate_client() {
    let loaded = vec![
        ("a".to_owned(), record("Google", "2023-01-01")),
        ("b".to_owned(), record("Google", "2022-01-01")),
    ];
    let err = order_case_studies(loaded).unwrap_err();
    assert!(matches!(err, ContentError::DuplicateClient(ref client) if client == "Google"));
}

#[test]
fn order_case_studies_rejects_invalid_date() {
    let loaded = vec![("a".to_owned(), record("Bloc", "last spring"))];
    let err = order_case_studies(loaded).unwrap_err();
    assert!(matches!(err, ContentError::InvalidDate(_)));
}

#[test]
fn order_case_studies_empty_is_ok() {
    assert!(order_case_studies(Vec::new()).unwrap().is_empty());
}

// =============================================================================
// FsCaseStudyLoader
// =============================================================================

#[tokio::test]
async fn loader_reads_markdown_files_in_date_order() {
    let dir = tempfile::tempdir().unwrap();
    write_case_study(dir.path(), "bloc", "Bloc", "2022-04-10");
    write_case_study(dir.path(), "riverpod", "Riverpod", "2023-08-20");

    let loader = FsCaseStudyLoader::new(dir.path());
    let case_studies = loader.load_case_studies().await.unwrap();

    assert_eq!(clients(&case_studies), vec!["Riverpod", "Bloc"]);
    assert_eq!(case_studies[0].href.as_deref(), Some("/work/riverpod"));
    assert_eq!(case_studies[1].summary, vec!["Bloc summary.".to_owned()]);
}

#[tokio::test]
async fn loader_ignores_other_files_and_directories() {
    let dir = tempfile::tempdir().unwrap();
    write_case_study(dir.path(), "etiya", "Etiya", "2023-01-01");
    std::fs::write(dir.path().join("notes.txt"), "not content").unwrap();
    std::fs::write(dir.path().join("logo.svg"), "<svg/>").unwrap();
    std::fs::create_dir(dir.path().join("drafts.md")).unwrap();

    let case_studies = FsCaseStudyLoader::new(dir.path()).load_case_studies().await.unwrap();
    assert_eq!(clients(&case_studies), vec!["Etiya"]);
}

#[tokio::test]
async fn loader_empty_directory_returns_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let case_studies = FsCaseStudyLoader::new(dir.path()).load_case_studies().await.unwrap();
    assert!(case_studies.is_empty());
}

#[tokio::test]
async fn loader_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = FsCaseStudyLoader::new(&missing).load_case_studies().await.unwrap_err();
    assert!(matches!(err, ContentError::Io { ref path, .. } if path == &missing));
}

#[tokio::test]
async fn loader_surfaces_frontmatter_errors() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.md"), "# no metadata here\n").unwrap();
    let err = FsCaseStudyLoader::new(dir.path()).load_case_studies().await.unwrap_err();
    assert!(matches!(err, ContentError::MissingFrontmatter { .. }));
}

#[tokio::test]
async fn loader_rejects_duplicate_clients_across_files() {
    let dir = tempfile::tempdir().unwrap();
    write_case_study(dir.path(), "stride-2022", "Stride", "2022-01-01");
    write_case_study(dir.path(), "stride-2023", "Stride", "2023-01-01");
    let err = FsCaseStudyLoader::new(dir.path()).load_case_studies().await.unwrap_err();
    assert!(matches!(err, ContentError::DuplicateClient(_)));
}

#[test]
fn loader_exposes_directory() {
    let loader = FsCaseStudyLoader::new("content/work");
    assert_eq!(loader.dir(), Path::new("content/work"));
}

#[tokio::test]
async fn loader_reads_bundled_content() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content/work");
    let case_studies = FsCaseStudyLoader::new(dir).load_case_studies().await.unwrap();
    assert_eq!(clients(&case_studies), vec!["Mail Smirk", "Bloc", "Stride"]);
    assert!(case_studies[0].testimonial.is_some());
}
