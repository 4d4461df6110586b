use std::sync::LazyLock;

use crate::job_market::{JobPosting, RoleMarket};

#[allow(clippy::too_many_arguments)]
const fn posting(
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    posted: &'static str,
    skills: &'static [&'static str],
    description: &'static str,
) -> JobPosting {
    JobPosting {
        id,
        title,
        company,
        location,
        employment_type: "Full-time",
        salary,
        posted,
        skills,
        description,
        url: "#",
    }
}

pub static ROLE_MARKETS: LazyLock<Vec<(&'static str, RoleMarket)>> = LazyLock::new(|| {
    vec![
        (
            "Software Developer",
            RoleMarket {
                total_jobs: 1245,
                growth_rate: "+15%",
                avg_salary: "£45,000",
                top_locations: &["London", "Manchester", "Edinburgh", "Remote"],
                trending: true,
                jobs: vec![
                    posting(
                        "sd1",
                        "Junior Software Developer",
                        "TechStart UK",
                        "Manchester",
                        "£28,000 - £35,000",
                        "2 days ago",
                        &["JavaScript", "React", "Node.js", "Git"],
                        "Exciting opportunity for a junior developer to join our growing team...",
                    ),
                    posting(
                        "sd2",
                        "Software Engineer",
                        "Global Solutions Ltd",
                        "London",
                        "£45,000 - £60,000",
                        "1 week ago",
                        &["TypeScript", "React", "AWS", "CI/CD"],
                        "Looking for an experienced software engineer to help build our next-generation platform...",
                    ),
                    posting(
                        "sd3",
                        "Graduate Software Developer",
                        "Lancaster Digital",
                        "Lancaster",
                        "£25,000 - £30,000",
                        "3 days ago",
                        &["JavaScript", "HTML/CSS", "Git", "Problem Solving"],
                        "Great opportunity for recent graduates to start their career in software development...",
                    ),
                ],
            },
        ),
        (
            "Data Scientist",
            RoleMarket {
                total_jobs: 856,
                growth_rate: "+22%",
                avg_salary: "£52,000",
                top_locations: &["London", "Cambridge", "Manchester", "Remote"],
                trending: true,
                jobs: vec![
                    posting(
                        "ds1",
                        "Junior Data Scientist",
                        "DataInsight",
                        "Cambridge",
                        "£35,000 - £42,000",
                        "1 week ago",
                        &["Python", "SQL", "Statistics", "Machine Learning"],
                        "Join our data science team and help extract insights from complex datasets...",
                    ),
                    posting(
                        "ds2",
                        "Data Scientist",
                        "FinTech Innovations",
                        "London",
                        "£50,000 - £65,000",
                        "3 days ago",
                        &["Python", "R", "Machine Learning", "Deep Learning", "SQL"],
                        "Looking for a data scientist to develop predictive models for financial services...",
                    ),
                    posting(
                        "ds3",
                        "Graduate Data Scientist",
                        "Research Analytics",
                        "Manchester",
                        "£28,000 - £32,000",
                        "5 days ago",
                        &["Python", "Statistics", "Data Visualization", "SQL"],
                        "Excellent opportunity for graduates with strong analytical skills...",
                    ),
                ],
            },
        ),
        (
            "Frontend Developer",
            RoleMarket {
                total_jobs: 978,
                growth_rate: "+12%",
                avg_salary: "£42,000",
                top_locations: &["London", "Manchester", "Bristol", "Remote"],
                trending: false,
                jobs: vec![
                    posting(
                        "fd1",
                        "Frontend Developer",
                        "WebSolutions",
                        "Bristol",
                        "£35,000 - £45,000",
                        "1 week ago",
                        &["React", "JavaScript", "HTML/CSS", "Responsive Design"],
                        "Join our creative team building beautiful and responsive web interfaces...",
                    ),
                    posting(
                        "fd2",
                        "UI Developer",
                        "Creative Digital",
                        "London",
                        "£40,000 - £50,000",
                        "2 days ago",
                        &["JavaScript", "React", "CSS", "UI/UX"],
                        "Looking for a talented UI developer to create engaging user experiences...",
                    ),
                    posting(
                        "fd3",
                        "Junior Frontend Developer",
                        "Tech Innovations",
                        "Manchester",
                        "£25,000 - £32,000",
                        "3 days ago",
                        &["HTML", "CSS", "JavaScript", "React"],
                        "Great opportunity for a junior developer to grow their frontend skills...",
                    ),
                ],
            },
        ),
        (
            "Cybersecurity Analyst",
            RoleMarket {
                total_jobs: 645,
                growth_rate: "+25%",
                avg_salary: "£48,000",
                top_locations: &["London", "Edinburgh", "Manchester", "Remote"],
                trending: true,
                jobs: vec![
                    posting(
                        "ca1",
                        "Cybersecurity Analyst",
                        "SecureNet",
                        "London",
                        "£45,000 - £55,000",
                        "3 days ago",
                        &["Network Security", "Threat Analysis", "Security Tools", "Incident Response"],
                        "Join our security team to protect critical infrastructure and data...",
                    ),
                    posting(
                        "ca2",
                        "Information Security Specialist",
                        "FinSecure",
                        "Edinburgh",
                        "£50,000 - £65,000",
                        "1 week ago",
                        &["Security Auditing", "Penetration Testing", "Risk Assessment", "Compliance"],
                        "Looking for a security specialist to strengthen our financial systems...",
                    ),
                    posting(
                        "ca3",
                        "Junior Security Analyst",
                        "Cyber Defense Ltd",
                        "Manchester",
                        "£30,000 - £38,000",
                        "5 days ago",
                        &["Network Security", "Security Monitoring", "Incident Response", "Security Tools"],
                        "Great opportunity for someone starting their career in cybersecurity...",
                    ),
                ],
            },
        ),
        (
            "UX Designer",
            RoleMarket {
                total_jobs: 532,
                growth_rate: "+10%",
                avg_salary: "£40,000",
                top_locations: &["London", "Manchester", "Bristol", "Remote"],
                trending: false,
                jobs: vec![
                    posting(
                        "ux1",
                        "UX Designer",
                        "Design Innovation",
                        "London",
                        "£38,000 - £48,000",
                        "1 week ago",
                        &["User Research", "Wireframing", "Prototyping", "Usability Testing"],
                        "Join our design team to create exceptional user experiences...",
                    ),
                    posting(
                        "ux2",
                        "UI/UX Designer",
                        "Creative Solutions",
                        "Bristol",
                        "£35,000 - £45,000",
                        "3 days ago",
                        &["UI Design", "UX Research", "Figma", "Adobe XD"],
                        "Looking for a talented designer to create beautiful and functional interfaces...",
                    ),
                    posting(
                        "ux3",
                        "Junior UX Designer",
                        "Digital Experiences",
                        "Manchester",
                        "£25,000 - £32,000",
                        "2 days ago",
                        &["Wireframing", "User Research", "Prototyping", "Design Thinking"],
                        "Great opportunity for someone starting their career in UX design...",
                    ),
                ],
            },
        ),
    ]
});

pub static DEFAULT_MARKET: LazyLock<RoleMarket> = LazyLock::new(|| RoleMarket {
    total_jobs: 250,
    growth_rate: "+5%",
    avg_salary: "£35,000",
    top_locations: &["London", "Manchester", "Remote"],
    trending: false,
    jobs: vec![JobPosting {
        id: "default1",
        title: "Entry Level Position",
        company: "Various Companies",
        location: "Multiple Locations",
        employment_type: "Full-time",
        salary: "Competitive",
        posted: "Recently",
        skills: &["Relevant Skills"],
        description: "Various opportunities available in this field...",
        url: "#",
    }],
});
