//! Professional: one-line name header, ruled sections, grouped skills and
//! bulleted experience.

use crate::layout::FontFamily;
use crate::models::resume::{PersonalInfo, Skill};
use crate::models::{Entry, Resume, SectionKind};
use crate::templates::{sections, Block, TemplateRenderer};

pub struct Professional;

const SECTIONS: &[SectionKind] = &[
    SectionKind::Links,
    SectionKind::Summary,
    SectionKind::Skills,
    SectionKind::Experience,
    SectionKind::Education,
];

const BULLET: char = '•';

impl TemplateRenderer for Professional {
    fn id(&self) -> &'static str {
        "professional"
    }

    fn font(&self) -> FontFamily {
        FontFamily::Inter
    }

    fn sections(&self) -> &'static [SectionKind] {
        SECTIONS
    }

    fn heading(&self, kind: SectionKind) -> Option<&'static str> {
        match kind {
            SectionKind::Links => Some("SOCIAL LINKS"),
            SectionKind::Summary => Some("SUMMARY"),
            SectionKind::Skills => Some("SKILLS"),
            SectionKind::Experience => Some("WORK EXPERIENCE"),
            SectionKind::Education => Some("EDUCATION"),
            _ => None,
        }
    }

    fn header(&self, personal: &PersonalInfo) -> Vec<Block> {
        let name = [personal.full_name.trim(), personal.job_title.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        let mut contacts = Vec::new();
        for (label, value) in [
            ("", personal.location.trim()),
            ("Phone: ", personal.phone.trim()),
            ("Email: ", personal.email.trim()),
        ] {
            if value.is_empty() {
                continue;
            }
            // The first item is shown bare.
            if contacts.is_empty() {
                contacts.push(value.to_string());
            } else {
                contacts.push(format!("{label}{value}"));
            }
        }

        if name.is_empty() && contacts.is_empty() {
            return Vec::new();
        }
        vec![
            Block::Header {
                name,
                title: String::new(),
                contacts,
                separator: " || ".to_string(),
            },
            Block::Divider,
        ]
    }

    fn section(&self, kind: SectionKind, resume: &Resume) -> Vec<Block> {
        let mut blocks = match kind {
            SectionKind::Skills => skills(&resume.skills),
            SectionKind::Experience => experience(resume),
            _ => sections::standard(kind, resume, self.heading(kind)),
        };
        if kind != SectionKind::Education {
            blocks.push(Block::Divider);
        }
        blocks
    }
}

/// Skills grouped as Frontend (level 5), Backend (level 4) and Other Skills
/// when any skill is level 4 or above; a single list otherwise.
fn skills(skills: &[Entry<Skill>]) -> Vec<Block> {
    let mut blocks = vec![Block::Heading {
        text: "SKILLS".to_string(),
    }];
    let names = |pred: &dyn Fn(u8) -> bool| -> Vec<String> {
        skills
            .iter()
            .filter(|s| pred(s.fields.level))
            .map(|s| s.fields.name.clone())
            .collect()
    };

    if !skills.iter().any(|s| s.fields.level >= 4) {
        blocks.push(Block::Inline {
            items: names(&|_| true),
        });
        return blocks;
    }

    for (group, members) in [
        ("Frontend", names(&|l| l == 5)),
        ("Backend", names(&|l| l == 4)),
        ("Other Skills", names(&|l| l < 4)),
    ] {
        if members.is_empty() {
            continue;
        }
        blocks.push(Block::Entry {
            title: group.to_string(),
            subtitle: None,
            dates: None,
            detail: None,
        });
        blocks.push(Block::Inline { items: members });
    }
    blocks
}

fn experience(resume: &Resume) -> Vec<Block> {
    let mut blocks = vec![Block::Heading {
        text: "WORK EXPERIENCE".to_string(),
    }];
    for exp in &resume.experience {
        let exp = &exp.fields;
        let title = [exp.position.trim(), exp.company.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        blocks.push(Block::Entry {
            title,
            subtitle: None,
            dates: sections::date_range(&exp.start_date, &exp.end_date, exp.current)
                .map(|d| d.replacen(" - ", " — ", 1)),
            detail: None,
        });

        let plain = exp.description.plain_text();
        if plain.contains(BULLET) {
            blocks.push(Block::Bullets {
                items: plain
                    .split(BULLET)
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect(),
            });
        } else {
            blocks.extend(sections::text(&exp.description));
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Experience;
    use crate::models::sample::sample_resume;
    use crate::models::{EntityId, RichText};
    use crate::templates::render_with;

    fn skill(name: &str, level: u8) -> Entry<Skill> {
        Entry::new(
            EntityId::from(name),
            Skill {
                name: name.into(),
                level,
            },
        )
    }

    #[test]
    fn test_skills_grouped_by_level() {
        let blocks = skills(&[
            skill("React", 5),
            skill("Go", 4),
            skill("Bash", 2),
            skill("Vue", 5),
        ]);
        assert_eq!(
            blocks[1..],
            [
                Block::Entry {
                    title: "Frontend".into(),
                    subtitle: None,
                    dates: None,
                    detail: None
                },
                Block::Inline {
                    items: vec!["React".into(), "Vue".into()]
                },
                Block::Entry {
                    title: "Backend".into(),
                    subtitle: None,
                    dates: None,
                    detail: None
                },
                Block::Inline {
                    items: vec!["Go".into()]
                },
                Block::Entry {
                    title: "Other Skills".into(),
                    subtitle: None,
                    dates: None,
                    detail: None
                },
                Block::Inline {
                    items: vec!["Bash".into()]
                },
            ]
        );
    }

    #[test]
    fn test_low_level_skills_are_a_single_list() {
        let blocks = skills(&[skill("Excel", 3), skill("SQL", 2)]);
        assert_eq!(
            blocks[1..],
            [Block::Inline {
                items: vec!["Excel".into(), "SQL".into()]
            }]
        );
    }

    #[test]
    fn test_bulleted_description_becomes_list() {
        let rendered = render_with(&sample_resume(), "professional");
        let bullets = rendered
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Bullets { items } => Some(items.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(bullets.len(), 3);
        assert!(bullets[0].starts_with("Led the rewrite"));
    }

    #[test]
    fn test_bare_angle_bracket_keeps_later_bullets() {
        let resume = Resume {
            experience: vec![Entry::new(
                EntityId::from("e1"),
                Experience {
                    company: "Acme".into(),
                    position: "SRE".into(),
                    description: RichText::from(
                        "Cut p99 latency to <50ms • Led a team of 4 • Shipped v2",
                    ),
                    ..Default::default()
                },
            )],
            ..Resume::default()
        };
        let blocks = experience(&resume);
        assert_eq!(
            blocks.last(),
            Some(&Block::Bullets {
                items: vec![
                    "Cut p99 latency to <50ms".into(),
                    "Led a team of 4".into(),
                    "Shipped v2".into(),
                ]
            })
        );
    }

    #[test]
    fn test_header_joins_name_and_title() {
        let rendered = render_with(&sample_resume(), "professional");
        match &rendered.blocks[0] {
            Block::Header {
                name,
                contacts,
                separator,
                ..
            } => {
                assert_eq!(name, "Jordan Rivera, Senior Backend Engineer");
                assert_eq!(contacts[0], "Portland, OR");
                assert_eq!(contacts[1], "Phone: (555) 010-2288");
                assert_eq!(contacts[2], "Email: jordan.rivera@example.com");
                assert_eq!(separator, " || ");
            }
            other => panic!("expected header, got {other:?}"),
        }
        assert_eq!(rendered.blocks[1], Block::Divider);
    }

    #[test]
    fn test_last_section_has_no_trailing_divider() {
        let rendered = render_with(&sample_resume(), "professional");
        assert_ne!(rendered.blocks.last(), Some(&Block::Divider));
    }
}
