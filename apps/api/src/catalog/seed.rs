//! Built-in industries and courses used when no catalog file is configured.

use crate::catalog::Catalog;
use crate::models::catalog::{Course, Industry};

pub fn builtin_catalog() -> Catalog {
    Catalog {
        industries: builtin_industries(),
        courses: builtin_courses(),
    }
}

fn builtin_industries() -> Vec<Industry> {
    vec![
        Industry::new(
            "Software Developer",
            &[
                "JavaScript",
                "TypeScript",
                "React",
                "Node.js",
                "Git",
                "Problem Solving",
                "Data Structures",
                "Algorithms",
                "API Design",
                "Testing",
            ],
        ),
        Industry::new(
            "Data Scientist",
            &[
                "Python",
                "R",
                "Statistics",
                "Machine Learning",
                "SQL",
                "Data Visualization",
                "Big Data",
                "Data Cleaning",
                "Jupyter Notebooks",
                "Experimental Design",
            ],
        ),
        Industry::new(
            "UX Designer",
            &[
                "User Research",
                "Wireframing",
                "Prototyping",
                "Figma",
                "Adobe XD",
                "Usability Testing",
                "Information Architecture",
                "Design Thinking",
                "Accessibility",
                "Visual Design",
            ],
        ),
        Industry::new(
            "Product Manager",
            &[
                "Product Strategy",
                "User Stories",
                "Roadmapping",
                "Agile Methodologies",
                "Market Research",
                "Stakeholder Management",
                "Data Analysis",
                "Prioritization",
                "Communication",
                "Leadership",
            ],
        ),
        Industry::new(
            "Digital Marketing Specialist",
            &[
                "SEO",
                "SEM",
                "Social Media Marketing",
                "Content Marketing",
                "Email Marketing",
                "Analytics",
                "A/B Testing",
                "Campaign Management",
                "CRM",
                "Copywriting",
            ],
        ),
    ]
}

fn builtin_courses() -> Vec<Course> {
    vec![
        Course::new(
            "CS101",
            "Introduction to Computer Science",
            &["Programming Fundamentals", "Problem Solving", "Algorithms", "Data Structures"],
        ),
        Course::new(
            "CS201",
            "Web Development",
            &["HTML", "CSS", "JavaScript", "React", "Node.js"],
        ),
        Course::new(
            "CS301",
            "Database Systems",
            &["SQL", "Database Design", "Data Modeling", "NoSQL"],
        ),
        Course::new(
            "DS101",
            "Introduction to Data Science",
            &["Python", "Statistics", "Data Visualization", "Data Cleaning"],
        ),
        Course::new(
            "DS201",
            "Machine Learning",
            &["Machine Learning", "Python", "Supervised Learning", "Unsupervised Learning"],
        ),
        Course::new(
            "UX101",
            "User Experience Design",
            &["User Research", "Wireframing", "Prototyping", "Usability Testing"],
        ),
        Course::new(
            "PM101",
            "Product Management Fundamentals",
            &["Product Strategy", "User Stories", "Roadmapping", "Agile Methodologies"],
        ),
        Course::new(
            "MK101",
            "Digital Marketing Fundamentals",
            &["SEO", "SEM", "Social Media Marketing", "Content Marketing"],
        ),
    ]
}
