//! HTML resume rendering with embedded styling

use crate::error::Result;
use crate::input::job::JobPosting;
use crate::input::masterlist::MasterList;
use crate::output::display_host;
use crate::ranking::engine::TailoredContent;
use askama::Template;

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ name }} - Resume</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.5;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 30px;
        }
        .about { text-align: center; margin-bottom: 20px; }
        .about h1 { margin-bottom: 0; }
        .about h2 { color: #555; font-weight: normal; margin-top: 5px; }
        .about h4 { margin: 2px 0; font-weight: normal; }
        h2 {
            color: #2c3e50;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 6px;
        }
        h3 { margin-bottom: 2px; }
        h4 { color: #555; margin: 2px 0; }
        .skills { text-align: center; }
        .education, .experience, .project, .award { margin-bottom: 15px; }
        .dates { color: #777; font-size: 0.9em; }
        ul { margin: 8px 0; }
        li { margin: 4px 0; }
        a { color: #007acc; text-decoration: none; }
    </style>
</head>
<body>
    <div class="about">
        <h1>{{ name }}</h1>
        <h2>{{ job_title }}</h2>
        <h4>{{ email }}</h4>
        <h4>{{ location }}</h4>
        {{ links_html | safe }}
    </div>

    {% if has_skills %}
    <hr />
    <h2>Relevant Skills</h2>
    <div class="skills">{{ skills_line }}</div>
    {% endif %}

    <h2>Education</h2>
    {{ education_html | safe }}

    <h2>Experience</h2>
    {{ experience_html | safe }}

    {% if has_projects %}
    <h2>Projects</h2>
    {{ projects_html | safe }}
    {% endif %}

    {% if has_awards %}
    <h2>Awards</h2>
    {{ awards_html | safe }}
    {% endif %}
</body>
</html>"#, ext = "html")]
struct ResumeTemplate {
    name: String,
    job_title: String,
    email: String,
    location: String,
    links_html: String,
    has_skills: bool,
    skills_line: String,
    education_html: String,
    experience_html: String,
    has_projects: bool,
    projects_html: String,
    has_awards: bool,
    awards_html: String,
}

/// Render the tailored resume as a standalone HTML document
pub fn render_html(master: &MasterList, job: &JobPosting, content: &TailoredContent) -> Result<String> {
    // Escaped by the template
    let skills_list: Vec<&str> = content.skills.iter().map(|sk| sk.skill.as_str()).collect();

    let template = ResumeTemplate {
        name: master.about.name.clone(),
        job_title: job.title.clone(),
        email: master.about.email.clone(),
        location: master.about.location.clone(),
        links_html: build_links(master),
        has_skills: !content.skills.is_empty(),
        skills_line: skills_list.join(" | "),
        education_html: build_education(master),
        experience_html: build_experience(master, content),
        has_projects: !content.projects.is_empty(),
        projects_html: build_projects(content),
        has_awards: !master.awards.is_empty(),
        awards_html: build_awards(master),
    };

    Ok(template.render()?)
}

fn build_links(master: &MasterList) -> String {
    let mut html = String::new();

    if !master.about.website.is_empty() {
        html.push_str(&format!(
            "<h4><a href='{}' target='_blank'>{}</a></h4>",
            escape_html(&master.about.website),
            escape_html(display_host(&master.about.website))
        ));
    }
    if !master.about.linkedin.is_empty() {
        html.push_str(&format!(
            "<h4><a href='{}' target='_blank'>LinkedIn</a></h4>",
            escape_html(&master.about.linkedin)
        ));
    }
    if !master.about.github.is_empty() {
        html.push_str(&format!(
            "<h4><a href='{}' target='_blank'>Github</a></h4>",
            escape_html(&master.about.github)
        ));
    }

    html
}

fn build_education(master: &MasterList) -> String {
    let mut html = String::new();

    for edu in &master.education {
        html.push_str("<div class='education'>");
        html.push_str(&format!("<h3>{}</h3>", escape_html(&edu.school)));
        html.push_str(&format!("<h4>{}</h4>", escape_html(&edu.degree)));

        if !edu.minor.is_empty() {
            html.push_str(&format!("<div>Minor: {}</div>", escape_html(&edu.minor)));
        }

        html.push_str(&format!(
            "<div class='dates'>{} - {}</div>",
            escape_html(&edu.start_date),
            escape_html(&edu.end_date)
        ));

        if !edu.thesis.is_empty() {
            html.push_str(&format!(
                "<div style='font-style: italic;'>Thesis: {}</div>",
                escape_html(&edu.thesis)
            ));
        }

        html.push_str("</div>");
    }

    html
}

fn build_experience(master: &MasterList, content: &TailoredContent) -> String {
    let mut html = String::new();

    for group in &content.groups {
        let experience = master
            .experiences
            .iter()
            .find(|exp| exp.jobtitle == group.title);

        html.push_str("<div class='experience'>");
        match experience {
            Some(exp) if !exp.company.is_empty() => {
                html.push_str(&format!(
                    "<h3>{}, {}</h3>",
                    escape_html(&exp.company),
                    escape_html(&exp.jobtitle)
                ));
                html.push_str(&format!(
                    "<div class='dates'>{} - {}</div>",
                    escape_html(&exp.start),
                    escape_html(&exp.end)
                ));
            }
            Some(exp) => {
                html.push_str(&format!("<h3>{}</h3>", escape_html(&exp.jobtitle)));
                html.push_str(&format!(
                    "<div class='dates'>{} - {}</div>",
                    escape_html(&exp.start),
                    escape_html(&exp.end)
                ));
            }
            None => {
                html.push_str(&format!("<h3>{}</h3>", escape_html(&group.title)));
            }
        }

        html.push_str("<ul>");
        for bullet in &group.bullets {
            html.push_str(&format!("<li>{}</li>", escape_html(&bullet.description)));
        }
        html.push_str("</ul></div>");
    }

    html
}

fn build_projects(content: &TailoredContent) -> String {
    let mut html = String::new();

    for proj in &content.projects {
        html.push_str("<div class='project'>");
        if !proj.link.is_empty() {
            html.push_str(&format!(
                "<h3><a href='{}' target='_blank'>{}</a></h3>",
                escape_html(&proj.link),
                escape_html(&proj.title)
            ));
        } else {
            html.push_str(&format!("<h3>{}</h3>", escape_html(&proj.title)));
        }
        html.push_str(&format!("<div>{}</div>", escape_html(&proj.description)));
        html.push_str("</div>");
    }

    html
}

fn build_awards(master: &MasterList) -> String {
    let mut html = String::new();

    for award in &master.awards {
        html.push_str("<div class='award'>");
        if !award.link.is_empty() {
            html.push_str(&format!(
                "<h3><a href='{}' target='_blank'>{}</a></h3>",
                escape_html(&award.link),
                escape_html(&award.award)
            ));
        } else {
            html.push_str(&format!("<h3>{}</h3>", escape_html(&award.award)));
        }
        html.push_str(&format!("<h4>{}</h4>", escape_html(&award.organization)));
        html.push_str(&format!("<div>{}</div>", escape_html(&award.description)));
        html.push_str("</div>");
    }

    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#39;")
        .replace('"', "&quot;")
}
