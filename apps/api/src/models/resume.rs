//! Resume record — the structured document the browser editor mutates and
//! persists. The API never stores it; it arrives in full with each request,
//! so the field names below must round-trip the editor's JSON unchanged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub personal_website: String,
    pub show_on_resume: bool,
    pub country: String,
    pub country_show_on_resume: bool,
    pub state: String,
    pub state_show_on_resume: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Opaque editor-assigned id, not interpreted here.
    pub id: String,
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: String,
    pub project_url: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_year: String,
    pub minor: String,
    pub gpa: String,
    pub additional_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub certificate_name: String,
    pub issuing_organization: String,
    pub issue_year: String,
    pub relevance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub contact: Contact,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub skills: String,
    pub summary: String,
}

impl Resume {
    /// Flattens the resume into the free text the keyword matcher sees:
    /// summary, then every experience description, then the skills line.
    /// Projects, education and certifications are deliberately excluded —
    /// the match reflects what the editor's analyzer has always counted.
    pub fn keyword_text(&self) -> String {
        let descriptions: Vec<&str> = self
            .experience
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        format!("{} {} {}", self.summary, descriptions.join(" "), self.skills)
    }

    /// The starter record a fresh editor session is seeded with.
    pub fn sample() -> Self {
        Resume {
            contact: Contact {
                full_name: "Charles Bloomberg".to_string(),
                email: "charlesbloomberg@wisc.edu".to_string(),
                phone: "(621) 799-5548".to_string(),
                linkedin_url: "https://linkedin.com/in/cbloomberg".to_string(),
                personal_website: "https://www.charlesbloomberg.com".to_string(),
                show_on_resume: true,
                country: String::new(),
                country_show_on_resume: true,
                state: String::new(),
                state_show_on_resume: true,
            },
            experience: vec![Experience {
                id: "exp1".to_string(),
                role: "Marketing Analyst".to_string(),
                company: "Google".to_string(),
                start_date: "November 2025".to_string(),
                end_date: "November 2025".to_string(),
                location: "New York, NY".to_string(),
                description: "• Organised and implemented Google Analytics data tracking \
                              campaigns to maximize the effectiveness of email remarketing \
                              initiatives that were deployed using Salesforce's marketing \
                              cloud software."
                    .to_string(),
            }],
            projects: vec![Project {
                id: "proj1".to_string(),
                title: "Volunteer".to_string(),
                organization: "Habitat for Humanity".to_string(),
                start_date: "November 2025".to_string(),
                end_date: "November 2025".to_string(),
                project_url: "https://www.rezi.ai/".to_string(),
                description: "• Volunteered to help renovate a house and managed a team of 6."
                    .to_string(),
            }],
            education: vec![Education {
                id: "edu1".to_string(),
                degree: "Bachelor of Science in Economics".to_string(),
                institution: "University of Wisconsin, Madison".to_string(),
                location: "Madison, WI".to_string(),
                graduation_year: "2025".to_string(),
                minor: "Mathematics".to_string(),
                gpa: "3.82".to_string(),
                additional_info: "• Awarded full-scholarship for 4 years due to grades."
                    .to_string(),
            }],
            certifications: vec![Certification {
                id: "cert1".to_string(),
                certificate_name: "Project Management Professional (PMP)".to_string(),
                issuing_organization: "Project Management Institute".to_string(),
                issue_year: "2025".to_string(),
                relevance: "• Certified in a standardized and evolving set of project \
                            management principles."
                    .to_string(),
            }],
            skills: "Front End: HTML, CSS, Javascript".to_string(),
            summary: "Results-driven professional with a proven track record of success in \
                      managing complex projects and driving business growth. Adept at \
                      leveraging data analytics and market research to develop and execute \
                      strategic plans. Seeking to apply my expertise in a challenging new role."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::extract::extract_keywords;

    #[test]
    fn test_keyword_text_covers_summary_experience_and_skills() {
        let resume = Resume {
            summary: "Rust engineer".to_string(),
            skills: "Kubernetes".to_string(),
            experience: vec![Experience {
                description: "Built Kafka pipelines".to_string(),
                ..Experience::default()
            }],
            projects: vec![Project {
                description: "Terraform homelab".to_string(),
                ..Project::default()
            }],
            ..Resume::default()
        };

        let keywords = extract_keywords(&resume.keyword_text());
        assert!(keywords.contains("rust"));
        assert!(keywords.contains("kafka"));
        assert!(keywords.contains("kubernetes"));
        // Project descriptions are not part of the keyword text.
        assert!(!keywords.contains("terraform"));
    }

    #[test]
    fn test_empty_resume_keyword_text_extracts_nothing() {
        assert!(extract_keywords(&Resume::default().keyword_text()).is_empty());
    }

    #[test]
    fn test_round_trips_editor_json_shape() {
        let json = r#"{
            "contact": {
                "full_name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "",
                "linkedin_url": "",
                "personal_website": "",
                "show_on_resume": true,
                "country": "UK",
                "country_show_on_resume": true,
                "state": "",
                "state_show_on_resume": false
            },
            "experience": [{
                "id": "exp1",
                "role": "Analyst",
                "company": "Analytical Engines Ltd",
                "start_date": "1842",
                "end_date": "1843",
                "location": "London",
                "description": "Wrote the first published program."
            }],
            "projects": [],
            "education": [],
            "certifications": [],
            "skills": "Mathematics",
            "summary": "Pioneer of computing."
        }"#;

        let resume: Resume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.contact.full_name, "Ada Lovelace");
        assert_eq!(resume.experience.len(), 1);

        let back = serde_json::to_value(&resume).unwrap();
        assert_eq!(back["contact"]["full_name"], "Ada Lovelace");
        assert_eq!(back["experience"][0]["start_date"], "1842");
        assert_eq!(back["skills"], "Mathematics");
    }

    #[test]
    fn test_sample_resume_keywords() {
        let keywords = extract_keywords(&Resume::sample().keyword_text());
        // From the experience description and skills line.
        assert!(keywords.contains("analytics"));
        assert!(keywords.contains("marketing"));
        assert!(keywords.contains("javascript"));
        // Education text is excluded from keyword matching.
        assert!(!keywords.contains("economics"));
    }
}
