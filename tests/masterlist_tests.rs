//! Integration tests for master list loading and resume rendering

use resume_tailor::input::job::JobPosting;
use resume_tailor::input::masterlist::MasterList;
use resume_tailor::output::{html::render_html, markdown::render_markdown, render_json};
use resume_tailor::ranking::engine::TailoredContent;
use resume_tailor::ranking::selector::{ExperienceKind, RankedGroup};
use std::path::Path;

#[tokio::test]
async fn test_load_masterlist_fixture() {
    let path = Path::new("tests/fixtures/masterlist.json");
    let master = MasterList::from_file(path).await.unwrap();

    assert_eq!(master.about.name, "Jane Doe");
    assert_eq!(master.education.len(), 2);
    assert_eq!(master.experiences.len(), 2);

    // Bullets live under the "projects" key in the master list
    assert_eq!(master.experiences[0].bullets.len(), 3);
    assert_eq!(master.experiences[0].bullets[0].id, 1);
    assert_eq!(master.experiences[0].bullets[0].skills, vec![1, 3]);

    assert_eq!(master.skills.len(), 4);
    assert_eq!(master.subskills.len(), 4);
    assert_eq!(master.all_skills().len(), 8);

    assert_eq!(master.projects.len(), 2);
    assert_eq!(master.projects[0].skills_used, vec![1, 2]);
    assert_eq!(master.projects[0].sub_skills_used, vec![1, 4]);

    assert_eq!(master.awards.len(), 1);
}

#[tokio::test]
async fn test_load_masterlist_missing_file() {
    let result = MasterList::from_file(Path::new("tests/fixtures/nonexistent.json")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_masterlist_wrong_extension() {
    let result = MasterList::from_file(Path::new("tests/fixtures/masterlist.toml")).await;
    assert!(result.is_err());
}

async fn fixture_content() -> (MasterList, JobPosting, TailoredContent) {
    let master = MasterList::from_file(Path::new("tests/fixtures/masterlist.json"))
        .await
        .unwrap();
    let job = JobPosting::new("Research Engineer", "Initech", "a role");

    // Hand-picked selection standing in for a ranking pass
    let content = TailoredContent {
        groups: vec![RankedGroup {
            kind: ExperienceKind::Work,
            title: "Graduate Researcher".to_string(),
            bullets: vec![master.experiences[0].bullets[0].clone()],
            scores: vec![0.91],
        }],
        skills: vec![master.skills[0].clone(), master.subskills[0].clone()],
        projects: vec![master.projects[0].clone()],
    };

    (master, job, content)
}

#[tokio::test]
async fn test_render_markdown() {
    let (master, job, content) = fixture_content().await;
    let md = render_markdown(&master, &job, &content);

    assert!(md.starts_with("# Jane Doe\n## Research Engineer\n"));
    assert!(md.contains("## Relevant Skills\nPython | NumPy\n"));
    assert!(md.contains("### Northeastern University\n#### PhD in Physics\n"));
    assert!(md.contains("Minor: Computer Science\n"));
    assert!(md.contains("### Northeastern University, Graduate Researcher\n"));
    assert!(md.contains("- Developed automated analysis software"));
    assert!(md.contains("### [Spectroscope Rebuild](https://github.com/janedoe/spectroscope)\n"));
    assert!(md.contains("## Awards\n### Outstanding Graduate Researcher\n"));
    // Website link text shows the host only
    assert!(md.contains("[janedoe.dev](https://janedoe.dev/portfolio)"));

    // Unselected bullets stay off the resume
    assert!(!md.contains("Trained undergraduate students"));
}

#[tokio::test]
async fn test_render_html() {
    let (master, job, content) = fixture_content().await;
    let html = render_html(&master, &job, &content).unwrap();

    assert!(html.contains("<h1>Jane Doe</h1>"));
    assert!(html.contains("<h2>Research Engineer</h2>"));
    assert!(html.contains("Python | NumPy"));
    assert!(html.contains("<li>Developed automated analysis software"));
    assert!(html.contains("href='https://github.com/janedoe/spectroscope'"));
    assert!(html.contains("Outstanding Graduate Researcher"));
}

#[tokio::test]
async fn test_render_html_escapes_content() {
    let (master, job, mut content) = fixture_content().await;
    content.groups[0].bullets[0].description = "Improved <throughput> by 40% & more".to_string();

    let html = render_html(&master, &job, &content).unwrap();
    assert!(html.contains("Improved &lt;throughput&gt; by 40% &amp; more"));
    assert!(!html.contains("<throughput>"));
}

#[tokio::test]
async fn test_render_json_round_trips() {
    let (master, job, content) = fixture_content().await;
    let json = render_json(&master, &job, &content).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["about"]["name"], "Jane Doe");
    assert_eq!(value["job"]["title"], "Research Engineer");
    assert_eq!(value["job"]["company"], "Initech");
    // Work experience groups carry the numeric type tag
    assert_eq!(value["experiences"][0]["type"], 1);
    assert_eq!(value["experiences"][0]["bullets"].as_array().unwrap().len(), 1);
    assert_eq!(value["skills"].as_array().unwrap().len(), 2);
    assert_eq!(value["projects"].as_array().unwrap().len(), 1);
}
