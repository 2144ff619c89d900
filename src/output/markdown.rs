//! Markdown resume rendering

use crate::input::job::JobPosting;
use crate::input::masterlist::MasterList;
use crate::output::display_host;
use crate::ranking::engine::TailoredContent;

/// Render the tailored resume as Markdown.
///
/// Section order: header, relevant skills, education, experience,
/// projects, awards.
pub fn render_markdown(master: &MasterList, job: &JobPosting, content: &TailoredContent) -> String {
    let mut md = String::new();

    // Header: name, target job title, contact links
    md.push_str(&format!("# {}\n", master.about.name));
    md.push_str(&format!("## {}\n", job.title));
    md.push_str(&format!("#### {}\n", master.about.email));
    md.push_str(&format!("#### {}\n", master.about.location));

    if !master.about.website.is_empty() {
        md.push_str(&format!(
            "#### [{}]({})\n",
            display_host(&master.about.website),
            master.about.website
        ));
    }
    if !master.about.linkedin.is_empty() {
        md.push_str(&format!("#### [LinkedIn]({})\n", master.about.linkedin));
    }
    if !master.about.github.is_empty() {
        md.push_str(&format!("#### [Github]({})\n", master.about.github));
    }

    if !content.skills.is_empty() {
        let skills_list: Vec<&str> = content.skills.iter().map(|sk| sk.skill.as_str()).collect();
        md.push_str("---\n");
        md.push_str("## Relevant Skills\n");
        md.push_str(&format!("{}\n", skills_list.join(" | ")));
    }

    md.push_str("## Education\n");
    for edu in &master.education {
        md.push_str(&format!("### {}\n", edu.school));
        md.push_str(&format!("#### {}\n", edu.degree));

        if !edu.minor.is_empty() {
            md.push_str(&format!("Minor: {}\n", edu.minor));
        }

        md.push_str(&format!("{} - {}\n", edu.start_date, edu.end_date));

        if !edu.thesis.is_empty() {
            md.push_str(&format!("Thesis: *{}*\n", edu.thesis));
        }
    }

    md.push_str("## Experience\n");
    for group in &content.groups {
        // Experiences dropped by the selector stay off the resume, so
        // match groups back to the master list by title
        let experience = master
            .experiences
            .iter()
            .find(|exp| exp.jobtitle == group.title);

        match experience {
            Some(exp) if !exp.company.is_empty() => {
                md.push_str(&format!("### {}, {}\n", exp.company, exp.jobtitle));
                md.push_str(&format!("#### {} - {}\n", exp.start, exp.end));
            }
            Some(exp) => {
                md.push_str(&format!("### {}\n", exp.jobtitle));
                md.push_str(&format!("#### {} - {}\n", exp.start, exp.end));
            }
            None => {
                md.push_str(&format!("### {}\n", group.title));
            }
        }

        for bullet in &group.bullets {
            md.push_str(&format!("- {}\n", bullet.description));
        }
    }

    if !content.projects.is_empty() {
        md.push_str("## Projects\n");
        for proj in &content.projects {
            if !proj.link.is_empty() {
                md.push_str(&format!("### [{}]({})\n", proj.title, proj.link));
            } else {
                md.push_str(&format!("### {}\n", proj.title));
            }
            md.push_str(&format!("{}\n", proj.description));
        }
    }

    if !master.awards.is_empty() {
        md.push_str("## Awards\n");
        for award in &master.awards {
            if !award.link.is_empty() {
                md.push_str(&format!("### [{}]({})\n", award.award, award.link));
            } else {
                md.push_str(&format!("### {}\n", award.award));
            }
            md.push_str(&format!("#### {}\n", award.organization));
            md.push_str(&format!("{}\n", award.description));
        }
    }

    md
}
