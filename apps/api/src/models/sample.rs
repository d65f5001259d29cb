//! Built-in sample document used for template previews.

use crate::models::resume::{
    CustomSection, CustomSectionItem, Education, Entry, Experience, Language, Link, PersonalInfo,
    Project, Resume, Skill,
};
use crate::models::rich_text::RichText;

pub fn sample_resume() -> Resume {
    Resume {
        personal: PersonalInfo {
            full_name: "Jordan Rivera".into(),
            job_title: "Senior Backend Engineer".into(),
            email: "jordan.rivera@example.com".into(),
            phone: "(555) 010-2288".into(),
            location: "Portland, OR".into(),
            website: Some("https://jordanrivera.dev".into()),
            summary: RichText::from(
                "Backend engineer with nine years of experience building payment and \
                 logistics platforms. Comfortable owning services from design review to \
                 on-call, and mentoring engineers new to distributed systems.",
            ),
        },
        experience: vec![
            Entry::new(
                "exp1".into(),
                Experience {
                    company: "Northwind Freight".into(),
                    position: "Senior Backend Engineer".into(),
                    start_date: "2021-03".into(),
                    end_date: String::new(),
                    current: true,
                    description: RichText::from(
                        "• Led the rewrite of the shipment tracking pipeline, cutting ingest lag from 9 minutes to 40 seconds\
                         \n• Designed the carrier integration SDK now used by 14 partner teams\
                         \n• Mentored four engineers through their first on-call rotation",
                    ),
                },
            ),
            Entry::new(
                "exp2".into(),
                Experience {
                    company: "Ledgerly".into(),
                    position: "Software Engineer".into(),
                    start_date: "2016-07".into(),
                    end_date: "2021-02".into(),
                    current: false,
                    description: RichText::from(
                        "• Built the reconciliation service processing 2M transactions per day\
                         \n• Reduced settlement failures by 35% with idempotent retry handling",
                    ),
                },
            ),
        ],
        education: vec![Entry::new(
            "edu1".into(),
            Education {
                institution: "Oregon State University".into(),
                degree: "Bachelor of Science".into(),
                field: "Computer Science".into(),
                start_date: "2012-09".into(),
                end_date: "2016-06".into(),
                description: RichText::from("Minor in Mathematics"),
            },
        )],
        skills: vec![
            skill("s1", "Rust", 5),
            skill("s2", "PostgreSQL", 5),
            skill("s3", "Kafka", 4),
            skill("s4", "Kubernetes", 4),
            skill("s5", "TypeScript", 3),
        ],
        projects: vec![Entry::new(
            "proj1".into(),
            Project {
                title: "Open-source rate limiter".into(),
                description: RichText::from(
                    "Token-bucket rate limiting middleware with Redis and in-process backends",
                ),
                start_date: "2022-01".into(),
                end_date: "2022-08".into(),
            },
        )],
        languages: vec![
            Entry::new(
                "lang1".into(),
                Language {
                    name: "English".into(),
                    level: "native".into(),
                },
            ),
            Entry::new(
                "lang2".into(),
                Language {
                    name: "Spanish".into(),
                    level: "fluent".into(),
                },
            ),
        ],
        links: vec![
            Entry::new(
                "link1".into(),
                Link {
                    label: "GitHub".into(),
                    url: "https://github.com/jrivera".into(),
                },
            ),
            Entry::new(
                "link2".into(),
                Link {
                    label: "LinkedIn".into(),
                    url: "https://linkedin.com/in/jrivera".into(),
                },
            ),
        ],
        custom_sections: vec![Entry::new(
            "cs1".into(),
            CustomSection {
                title: "Talks".into(),
                items: vec![Entry::new(
                    "cs1-1".into(),
                    CustomSectionItem {
                        title: "Backpressure in practice".into(),
                        location: Some("RustConf".into()),
                        start_date: Some("2023-09".into()),
                        end_date: None,
                        description: None,
                    },
                )],
            },
        )],
        selected_template: "professional".into(),
        ..Resume::default()
    }
}

fn skill(id: &str, name: &str, level: u8) -> Entry<Skill> {
    Entry::new(
        id.into(),
        Skill {
            name: name.into(),
            level,
        },
    )
}
