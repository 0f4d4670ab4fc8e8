//! Raw knowledge-base content.
//!
//! Careers, courses, and industry trends as declarative tables. The tables
//! are turned into validated lookup maps by [`super::KnowledgeBase`]; nothing
//! reads them directly.

use super::{CareerRecord, CourseRecord};

/// Career entries as `(normalized key, record)` pairs.
pub(super) fn career_entries() -> Vec<(&'static str, CareerRecord)> {
    vec![
        (
            "software_developer",
            CareerRecord {
                category: "technology".into(),
                description: "Design, develop, and maintain software applications using programming languages like Python, Java, JavaScript, and C++.".into(),
                skills_required: vec![
                    "Programming".into(),
                    "Problem-solving".into(),
                    "Debugging".into(),
                    "Software architecture".into(),
                    "Version control".into(),
                ],
                salary_range: "$65,000 - $150,000+ annually".into(),
                education: "Bachelor's in Computer Science, Software Engineering, or related field. Coding bootcamps also acceptable.".into(),
                job_outlook: "Excellent - 22% growth expected (2020-2030), much faster than average".into(),
                work_environment: "Office, remote work common, collaborative team environment".into(),
                related_careers: vec![
                    "Web Developer".into(),
                    "Mobile App Developer".into(),
                    "DevOps Engineer".into(),
                    "Software Architect".into(),
                ],
            },
        ),
        (
            "data_scientist",
            CareerRecord {
                category: "technology".into(),
                description: "Analyze complex data to help organizations make informed business decisions using statistical analysis and machine learning.".into(),
                skills_required: vec![
                    "Python/R".into(),
                    "Statistics".into(),
                    "Machine Learning".into(),
                    "Data visualization".into(),
                    "SQL".into(),
                    "Domain expertise".into(),
                ],
                salary_range: "$95,000 - $165,000+ annually".into(),
                education: "Bachelor's in Mathematics, Statistics, Computer Science, or related field. Master's preferred.".into(),
                job_outlook: "Excellent - 22% growth expected (2020-2030)".into(),
                work_environment: "Office or remote, cross-functional teams, research-oriented".into(),
                related_careers: vec![
                    "Data Analyst".into(),
                    "Machine Learning Engineer".into(),
                    "Business Intelligence Analyst".into(),
                ],
            },
        ),
        (
            "cybersecurity_analyst",
            CareerRecord {
                category: "technology".into(),
                description: "Protect computer networks and systems from cyber threats, monitor security breaches, and implement security measures.".into(),
                skills_required: vec![
                    "Network security".into(),
                    "Risk assessment".into(),
                    "Incident response".into(),
                    "Security tools".into(),
                    "Compliance".into(),
                ],
                salary_range: "$70,000 - $140,000+ annually".into(),
                education: "Bachelor's in Cybersecurity, Computer Science, or related field. Security certifications valuable.".into(),
                job_outlook: "Excellent - 33% growth expected (2020-2030), much faster than average".into(),
                work_environment: "Office, some remote work, 24/7 monitoring possible".into(),
                related_careers: vec![
                    "Information Security Manager".into(),
                    "Penetration Tester".into(),
                    "Security Consultant".into(),
                ],
            },
        ),
        (
            "registered_nurse",
            CareerRecord {
                category: "healthcare".into(),
                description: "Provide patient care, administer medications, educate patients and families, and collaborate with healthcare teams.".into(),
                skills_required: vec![
                    "Patient care".into(),
                    "Medical knowledge".into(),
                    "Communication".into(),
                    "Critical thinking".into(),
                    "Compassion".into(),
                ],
                salary_range: "$60,000 - $90,000+ annually".into(),
                education: "Associate's or Bachelor's degree in Nursing, pass NCLEX-RN exam".into(),
                job_outlook: "Excellent - 9% growth expected (2020-2030), faster than average".into(),
                work_environment: "Hospitals, clinics, nursing homes, various shift patterns".into(),
                related_careers: vec![
                    "Nurse Practitioner".into(),
                    "Nursing Manager".into(),
                    "Clinical Nurse Specialist".into(),
                ],
            },
        ),
        (
            "physical_therapist",
            CareerRecord {
                category: "healthcare".into(),
                description: "Help patients recover from injuries, manage pain, and improve mobility through therapeutic exercises and treatments.".into(),
                skills_required: vec![
                    "Anatomy knowledge".into(),
                    "Manual therapy".into(),
                    "Patient assessment".into(),
                    "Treatment planning".into(),
                    "Communication".into(),
                ],
                salary_range: "$75,000 - $95,000+ annually".into(),
                education: "Doctor of Physical Therapy (DPT) degree, state licensure required".into(),
                job_outlook: "Excellent - 21% growth expected (2020-2030), much faster than average".into(),
                work_environment: "Hospitals, clinics, rehabilitation centers, sports facilities".into(),
                related_careers: vec![
                    "Occupational Therapist".into(),
                    "Sports Medicine Specialist".into(),
                    "Rehabilitation Counselor".into(),
                ],
            },
        ),
        (
            "marketing_manager",
            CareerRecord {
                category: "business".into(),
                description: "Develop marketing strategies, manage campaigns, analyze market trends, and oversee marketing teams to promote products or services.".into(),
                skills_required: vec![
                    "Strategic thinking".into(),
                    "Digital marketing".into(),
                    "Analytics".into(),
                    "Leadership".into(),
                    "Communication".into(),
                    "Creativity".into(),
                ],
                salary_range: "$65,000 - $120,000+ annually".into(),
                education: "Bachelor's in Marketing, Business, Communications, or related field".into(),
                job_outlook: "Good - 10% growth expected (2020-2030), faster than average".into(),
                work_environment: "Office, some remote work, collaborative environment".into(),
                related_careers: vec![
                    "Digital Marketing Specialist".into(),
                    "Brand Manager".into(),
                    "Market Research Analyst".into(),
                ],
            },
        ),
        (
            "financial_analyst",
            CareerRecord {
                category: "business".into(),
                description: "Evaluate investment opportunities, analyze financial data, and provide recommendations for business and investment decisions.".into(),
                skills_required: vec![
                    "Financial modeling".into(),
                    "Excel".into(),
                    "Analytical thinking".into(),
                    "Research".into(),
                    "Presentation skills".into(),
                ],
                salary_range: "$60,000 - $95,000+ annually".into(),
                education: "Bachelor's in Finance, Economics, Accounting, or related field".into(),
                job_outlook: "Good - 6% growth expected (2020-2030), about as fast as average".into(),
                work_environment: "Office environment, banks, investment firms, corporations".into(),
                related_careers: vec![
                    "Investment Banker".into(),
                    "Portfolio Manager".into(),
                    "Risk Analyst".into(),
                ],
            },
        ),
        (
            "elementary_teacher",
            CareerRecord {
                category: "education".into(),
                description: "Teach basic academic subjects to elementary school students, develop lesson plans, and assess student progress.".into(),
                skills_required: vec![
                    "Teaching methods".into(),
                    "Classroom management".into(),
                    "Subject knowledge".into(),
                    "Patience".into(),
                    "Communication".into(),
                ],
                salary_range: "$45,000 - $70,000+ annually (varies by state)".into(),
                education: "Bachelor's degree in Education or subject area, teaching license required".into(),
                job_outlook: "Average - 7% growth expected (2020-2030)".into(),
                work_environment: "Elementary schools, classroom setting, summers typically off".into(),
                related_careers: vec![
                    "Special Education Teacher".into(),
                    "School Counselor".into(),
                    "Principal".into(),
                ],
            },
        ),
        (
            "graphic_designer",
            CareerRecord {
                category: "creative".into(),
                description: "Create visual concepts and designs for print, digital media, advertising, and branding using design software.".into(),
                skills_required: vec![
                    "Adobe Creative Suite".into(),
                    "Typography".into(),
                    "Color theory".into(),
                    "Layout design".into(),
                    "Creativity".into(),
                    "Client communication".into(),
                ],
                salary_range: "$40,000 - $75,000+ annually".into(),
                education: "Bachelor's in Graphic Design, Art, or related field. Portfolio essential.".into(),
                job_outlook: "Average - 3% growth expected (2020-2030)".into(),
                work_environment: "Design studios, advertising agencies, in-house corporate teams, freelance".into(),
                related_careers: vec![
                    "UI/UX Designer".into(),
                    "Art Director".into(),
                    "Web Designer".into(),
                ],
            },
        ),
        (
            "content_writer",
            CareerRecord {
                category: "creative".into(),
                description: "Create written content for websites, blogs, marketing materials, and social media to engage audiences and drive business goals.".into(),
                skills_required: vec![
                    "Writing".into(),
                    "Research".into(),
                    "SEO".into(),
                    "Content strategy".into(),
                    "Editing".into(),
                    "Adaptability".into(),
                ],
                salary_range: "$35,000 - $65,000+ annually".into(),
                education: "Bachelor's in English, Journalism, Communications, or related field".into(),
                job_outlook: "Good - 9% growth expected (2020-2030)".into(),
                work_environment: "Office, remote work common, marketing agencies, media companies".into(),
                related_careers: vec![
                    "Technical Writer".into(),
                    "Social Media Manager".into(),
                    "Marketing Specialist".into(),
                ],
            },
        ),
    ]
}

/// Course entries as `(normalized key, record)` pairs.
pub(super) fn course_entries() -> Vec<(&'static str, CourseRecord)> {
    vec![
        (
            "computer_science",
            CourseRecord {
                description: "Study of computational systems, programming, algorithms, and computer system design.".into(),
                duration: "4 years (Bachelor's)".into(),
                core_subjects: vec![
                    "Programming".into(),
                    "Data Structures".into(),
                    "Algorithms".into(),
                    "Computer Architecture".into(),
                    "Software Engineering".into(),
                    "Database Systems".into(),
                ],
                career_paths: vec![
                    "Software Developer".into(),
                    "Data Scientist".into(),
                    "Systems Analyst".into(),
                    "Cybersecurity Analyst".into(),
                ],
                admission_requirements: "Strong math background, SAT/ACT scores, high school diploma".into(),
                skills_gained: vec![
                    "Problem-solving".into(),
                    "Logical thinking".into(),
                    "Programming proficiency".into(),
                    "System design".into(),
                ],
            },
        ),
        (
            "business_administration",
            CourseRecord {
                description: "Comprehensive study of business operations, management principles, and organizational behavior.".into(),
                duration: "4 years (Bachelor's)".into(),
                core_subjects: vec![
                    "Management".into(),
                    "Marketing".into(),
                    "Finance".into(),
                    "Operations".into(),
                    "Strategy".into(),
                    "Leadership".into(),
                ],
                career_paths: vec![
                    "Business Manager".into(),
                    "Marketing Executive".into(),
                    "Operations Manager".into(),
                    "Consultant".into(),
                ],
                admission_requirements: "High school diploma, SAT/ACT scores, essay".into(),
                skills_gained: vec![
                    "Leadership".into(),
                    "Strategic thinking".into(),
                    "Communication".into(),
                    "Project management".into(),
                ],
            },
        ),
        (
            "nursing",
            CourseRecord {
                description: "Healthcare education focusing on patient care, medical knowledge, and clinical skills.".into(),
                duration: "2-4 years (Associate's to Bachelor's)".into(),
                core_subjects: vec![
                    "Anatomy".into(),
                    "Physiology".into(),
                    "Pharmacology".into(),
                    "Medical-Surgical Nursing".into(),
                    "Pediatric Care".into(),
                ],
                career_paths: vec![
                    "Registered Nurse".into(),
                    "Nurse Practitioner".into(),
                    "Clinical Nurse Specialist".into(),
                ],
                admission_requirements: "High school diploma, prerequisite science courses, entrance exam".into(),
                skills_gained: vec![
                    "Patient care".into(),
                    "Medical knowledge".into(),
                    "Critical thinking".into(),
                    "Compassion".into(),
                ],
            },
        ),
        (
            "marketing",
            CourseRecord {
                description: "Study of market analysis, consumer behavior, brand management, and promotional strategies.".into(),
                duration: "4 years (Bachelor's)".into(),
                core_subjects: vec![
                    "Consumer Behavior".into(),
                    "Digital Marketing".into(),
                    "Brand Management".into(),
                    "Market Research".into(),
                    "Advertising".into(),
                ],
                career_paths: vec![
                    "Marketing Manager".into(),
                    "Digital Marketing Specialist".into(),
                    "Brand Manager".into(),
                    "Market Research Analyst".into(),
                ],
                admission_requirements: "High school diploma, SAT/ACT scores".into(),
                skills_gained: vec![
                    "Creative thinking".into(),
                    "Data analysis".into(),
                    "Communication".into(),
                    "Strategic planning".into(),
                ],
            },
        ),
    ]
}

/// Industry trend bullets keyed by industry.
pub(super) fn trend_entries() -> Vec<(&'static str, Vec<String>)> {
    vec![
        (
            "technology",
            vec![
                "Artificial Intelligence and Machine Learning adoption increasing across industries".into(),
                "Remote work and digital collaboration tools becoming standard".into(),
                "Cybersecurity threats driving demand for security professionals".into(),
                "Cloud computing and DevOps practices expanding rapidly".into(),
                "Mobile-first development and responsive design essential".into(),
            ],
        ),
        (
            "healthcare",
            vec![
                "Telemedicine and remote patient monitoring growing".into(),
                "Aging population increasing demand for healthcare services".into(),
                "Electronic health records and healthcare technology integration".into(),
                "Preventive care and wellness programs emphasis".into(),
                "Personalized medicine and genomics advancing".into(),
            ],
        ),
        (
            "business",
            vec![
                "Digital transformation accelerating in all sectors".into(),
                "Sustainability and ESG (Environmental, Social, Governance) focus".into(),
                "Data-driven decision making becoming crucial".into(),
                "E-commerce and omnichannel retail strategies".into(),
                "Remote and hybrid work models restructuring operations".into(),
            ],
        ),
        (
            "education",
            vec![
                "Online and hybrid learning models expanding".into(),
                "Educational technology integration in classrooms".into(),
                "Personalized learning and adaptive platforms".into(),
                "STEM education emphasis growing".into(),
                "Lifelong learning and professional development importance".into(),
            ],
        ),
    ]
}
