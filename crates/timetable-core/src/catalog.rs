//! Course catalog for the term being planned.
//!
//! A [`Catalog`] bundles the offerings a student can add and the schedule
//! templates offered as one-click suggestions. [`Catalog::demo`] carries the
//! built-in demo term; [`Catalog::load`] reads the same shape from a JSON
//! file.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ScheduleError},
    models::{
        ClockTime, CourseGroup, CourseOffering, Day, Meeting, ScheduleTemplate, TemplateCourse,
    },
};

/// Offerings and templates for one planning term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Label of the term being planned, e.g. "I-2025"
    pub term: String,
    pub offerings: Vec<CourseOffering>,
    #[serde(default)]
    pub templates: Vec<ScheduleTemplate>,
}

impl Catalog {
    /// Parses and validates a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ScheduleError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks that course codes, group IDs within a course, template IDs and
    /// course codes within a template are unique.
    pub fn validate(&self) -> Result<()> {
        let mut codes = HashSet::new();
        for offering in &self.offerings {
            if !codes.insert(offering.code.as_str()) {
                return Err(ScheduleError::invalid_input("offerings")
                    .with_reason(format!("duplicate course code {}", offering.code)));
            }
            let mut groups = HashSet::new();
            for group in &offering.groups {
                if !groups.insert(group.id) {
                    return Err(ScheduleError::invalid_input("groups").with_reason(format!(
                        "course {} lists group {} twice",
                        offering.code, group.id
                    )));
                }
            }
        }

        let mut templates = HashSet::new();
        for template in &self.templates {
            if !templates.insert(template.id.as_str()) {
                return Err(ScheduleError::invalid_input("templates")
                    .with_reason(format!("duplicate template id {}", template.id)));
            }
            let mut placed = HashSet::new();
            for course in &template.courses {
                if !placed.insert(course.code.as_str()) {
                    return Err(ScheduleError::invalid_input("courses").with_reason(format!(
                        "template {} places course {} twice",
                        template.id, course.code
                    )));
                }
            }
        }
        Ok(())
    }

    /// Offerings whose code or name contains `query`, ignoring case. An
    /// empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&CourseOffering> {
        self.offerings.iter().filter(|o| o.matches(query)).collect()
    }

    pub fn offering(&self, code: &str) -> Option<&CourseOffering> {
        self.offerings
            .iter()
            .find(|o| o.code.eq_ignore_ascii_case(code))
    }

    pub fn template(&self, id: &str) -> Option<&ScheduleTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// The built-in demo term: four eighth-semester courses and three
    /// templates.
    pub fn demo() -> Self {
        let ai = course("IC6200", "Inteligencia artificial", "Steven Pacheco Portuguez");
        let networks = course("IC7602", "Redes", "Gerardo Nereo Campos Araya");
        let project = course(
            "IC7841",
            "Proyecto de ingeniería de software",
            "Dra. Alicia Salazar Hernandez",
        );
        let entrepreneurs = course(
            "AE4208",
            "Desarrollo de emprendedores",
            "Ronald Leandro Elizondo",
        );

        let offerings = vec![
            CourseOffering {
                depends_on: vec!["IC6400".to_string()],
                groups: vec![
                    group(1, slot(Day::Monday, (9, 30), (9, 50)), "B3-2"),
                    group(2, slot(Day::Tuesday, (10, 30), (11, 50)), "B3-4"),
                ],
                ..offering(&ai)
            },
            CourseOffering {
                depends_on: vec!["IC6600".to_string()],
                groups: vec![
                    group(1, slot(Day::Monday, (13, 0), (14, 50)), "B5-1"),
                    group(2, slot(Day::Tuesday, (15, 0), (16, 50)), "B5-3"),
                ],
                ..offering(&networks)
            },
            CourseOffering {
                depends_on: vec!["IC8071".to_string()],
                groups: vec![group(1, slot(Day::Wednesday, (10, 30), (11, 50)), "B4-2")],
                ..offering(&project)
            },
            CourseOffering {
                groups: vec![
                    group(1, slot(Day::Thursday, (13, 0), (16, 50)), "B2-1"),
                    group(2, slot(Day::Friday, (9, 30), (11, 50)), "B2-3"),
                ],
                ..offering(&entrepreneurs)
            },
        ];

        let templates = vec![
            ScheduleTemplate {
                id: "balanced".to_string(),
                name: "Balanced".to_string(),
                description: "Classes spread evenly across the week with time left for study."
                    .to_string(),
                courses: vec![
                    ai.at(slot(Day::Monday, (9, 30), (9, 50))),
                    networks.at(slot(Day::Monday, (13, 0), (14, 50))),
                    project.at(slot(Day::Wednesday, (10, 30), (11, 50))),
                    entrepreneurs.at(slot(Day::Thursday, (13, 0), (16, 50))),
                ],
            },
            ScheduleTemplate {
                id: "compact".to_string(),
                name: "Compact".to_string(),
                description: "Classes packed into fewer days to free up whole days.".to_string(),
                courses: vec![
                    ai.at(slot(Day::Tuesday, (10, 30), (11, 50))),
                    networks.at(slot(Day::Tuesday, (15, 0), (16, 50))),
                    project.at(slot(Day::Wednesday, (10, 30), (11, 50))),
                    entrepreneurs.at(slot(Day::Friday, (9, 30), (11, 50))),
                ],
            },
            ScheduleTemplate {
                id: "morning".to_string(),
                name: "Mornings".to_string(),
                description: "Classes concentrated in the mornings to keep afternoons free."
                    .to_string(),
                courses: vec![
                    ai.at(slot(Day::Monday, (9, 30), (9, 50))),
                    networks.at(slot(Day::Tuesday, (9, 30), (9, 50))),
                    project.at(slot(Day::Wednesday, (10, 30), (11, 50))),
                    entrepreneurs.at(slot(Day::Friday, (9, 30), (11, 50))),
                ],
            },
        ];

        Self {
            term: "I-2025".to_string(),
            offerings,
            templates,
        }
    }
}

/// Code, name and professor shared by a demo offering and its template
/// placements.
struct DemoCourse {
    code: &'static str,
    name: &'static str,
    professor: &'static str,
}

fn course(code: &'static str, name: &'static str, professor: &'static str) -> DemoCourse {
    DemoCourse {
        code,
        name,
        professor,
    }
}

impl DemoCourse {
    fn at(&self, meeting: Meeting) -> TemplateCourse {
        TemplateCourse {
            code: self.code.to_string(),
            name: self.name.to_string(),
            professor: self.professor.to_string(),
            meeting,
            location: None,
        }
    }
}

fn offering(course: &DemoCourse) -> CourseOffering {
    CourseOffering {
        code: course.code.to_string(),
        name: course.name.to_string(),
        professor: course.professor.to_string(),
        credits: None,
        groups: Vec::new(),
        depends_on: Vec::new(),
    }
}

fn group(id: u32, meeting: Meeting, location: &str) -> CourseGroup {
    CourseGroup {
        id,
        name: format!("Group {id:02}"),
        meeting,
        location: Some(location.to_string()),
    }
}

// Demo slots are literals known to be well formed, so they bypass the
// validating constructors.
fn slot(day: Day, (sh, sm): (i8, i8), (eh, em): (i8, i8)) -> Meeting {
    Meeting {
        day,
        start_time: ClockTime::from_civil(jiff::civil::time(sh, sm, 0, 0)),
        end_time: ClockTime::from_civil(jiff::civil::time(eh, em, 0, 0)),
    }
}
