//! Prompts sent to the extraction service and the language model.
//!
//! Extraction prompts describe what to pull from the target pages; synthesis
//! prompts embed validated records and fix the report layout.

/// Instruction for extracting job postings from the search result pages.
pub const EXTRACT_JOBS_PROMPT: &str = r#"Extract job postings by region, role, job title and experience from these job sites.

Look for jobs that match these criteria:
- Job Title: Should be related to {job_title}
- Location: {location} (include remote jobs if available)
- Experience: Around {experience_years} years
- Skills: Should match at least some of these skills: {skills}
- Job Type: Full-time, Part-time, Contract, Temporary, Internship

For each job posting, extract:
- region: The broader region or area where the job is located
- role: The specific role or function
- job_title: The exact title of the job
- experience: The experience requirement in years or levels
- job_link: The link to the job posting

IMPORTANT: Return data for at least 3 different job opportunities. MAXIMUM 10."#;

/// Instruction for extracting salary and demand data for an industry.
pub const EXTRACT_TRENDS_PROMPT: &str = r#"Extract industry trends data for the {category} industry.

For each industry trend, extract:
- industry: The specific industry or sub-category
- avg_salary: The average salary in this industry (as a number)
- growth_rate: The growth rate of this industry (as a number)
- demand_level: The demand level (e.g., "High", "Medium", "Low")
- top_skills: A list of top skills in demand for this industry

IMPORTANT:
- Extract data for at least 3-5 different roles or sub-categories within this industry
- Include salary trends, growth rate, and demand level
- Identify top skills in demand for this industry"#;

/// System message for every synthesis call.
pub const CAREER_EXPERT_SYSTEM: &str = "You are a career expert. You help find and analyze job \
opportunities based on user preferences. Format your answers in markdown.";

/// Job analysis. `{sections}` is filled from [`JOB_REPORT`].
pub const ANALYZE_JOBS_PROMPT: &str = r#"As a career expert, analyze these job opportunities:

Jobs found, in JSON format:
{records}

**IMPORTANT INSTRUCTIONS:**
1. ONLY analyze jobs from the above JSON data that match the user's requirements:
   - Job Title: Related to {job_title}
   - Location/Region: Near {location}
   - Experience: Around {experience_years} years
   - Skills: {skills}
   - Job Type: Full-time, Part-time, Contract, Temporary, Internship
2. DO NOT CREATE new job listings. Every job you mention must appear in the JSON data above.
3. From the matching jobs, select the 5-6 jobs that best match the user's skills and experience.

Please provide your analysis in this format:

{sections}

Format your response in a clear, structured way using the above sections."#;

/// Industry trend analysis. `{sections}` is filled from [`TREND_REPORT`].
pub const ANALYZE_TRENDS_PROMPT: &str = r#"As a career expert, analyze these industry trends for {category}:

{records}

Only use figures that appear in the data above. Do not invent salaries, growth rates or skills.

Please provide:
1. A bullet-point summary of the salary and demand trends
2. The top skills in demand for this industry
3. Career growth opportunities: roles with the highest growth potential, emerging specializations, skills with increasing demand
4. Specific advice for job seekers based on these trends

Format the response as follows:

{sections}"#;

/// One required section of a synthesized report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSection {
    pub heading: &'static str,
    pub guidance: &'static [&'static str],
}

/// Ordered sections the model must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTemplate {
    pub sections: &'static [ReportSection],
}

impl ReportTemplate {
    /// Render as heading lines followed by bullet guidance.
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|section| {
                let mut block = section.heading.to_string();
                for line in section.guidance {
                    block.push_str("\n• ");
                    block.push_str(line);
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn headings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|s| s.heading)
    }
}

pub const JOB_REPORT: ReportTemplate = ReportTemplate {
    sections: &[
        ReportSection {
            heading: "💼 SELECTED JOB OPPORTUNITIES",
            guidance: &[
                "List only the 5-6 best matching jobs",
                "For each job include: job title and role, region/location, experience required, pros and cons, job link",
            ],
        },
        ReportSection {
            heading: "🔍 SKILLS MATCH ANALYSIS",
            guidance: &[
                "Compare the selected jobs on skills match with the user's profile",
                "Experience requirements",
                "Growth potential",
            ],
        },
        ReportSection {
            heading: "💡 RECOMMENDATIONS",
            guidance: &[
                "Top 3 jobs from the selection with reasoning",
                "Career growth potential",
                "Points to consider before applying",
            ],
        },
        ReportSection {
            heading: "📝 APPLICATION TIPS",
            guidance: &[
                "Job-specific application strategies",
                "Resume customization tips for these roles",
            ],
        },
    ],
};

pub const TREND_REPORT: ReportTemplate = ReportTemplate {
    sections: &[
        ReportSection {
            heading: "📊 INDUSTRY TRENDS SUMMARY",
            guidance: &["Bullet points for salary and demand trends"],
        },
        ReportSection {
            heading: "🔥 TOP SKILLS IN DEMAND",
            guidance: &["Bullet points for the most sought-after skills"],
        },
        ReportSection {
            heading: "📈 CAREER GROWTH OPPORTUNITIES",
            guidance: &["Bullet points with growth insights"],
        },
        ReportSection {
            heading: "🎯 RECOMMENDATIONS FOR JOB SEEKERS",
            guidance: &["Bullet points with specific advice"],
        },
    ],
};

pub fn format_extract_jobs_prompt(
    job_title: &str,
    location: &str,
    experience_years: f32,
    skills: &str,
) -> String {
    EXTRACT_JOBS_PROMPT
        .replace("{experience_years}", &experience_years.to_string())
        .replace("{skills}", skills)
        .replace("{location}", location)
        .replace("{job_title}", job_title)
}

pub fn format_extract_trends_prompt(category: &str) -> String {
    EXTRACT_TRENDS_PROMPT.replace("{category}", category)
}

pub fn format_analyze_jobs_prompt(
    records: &str,
    job_title: &str,
    location: &str,
    experience_years: f32,
    skills: &str,
) -> String {
    // Records go in last so text inside them is never treated as a placeholder.
    ANALYZE_JOBS_PROMPT
        .replace("{sections}", &JOB_REPORT.render())
        .replace("{experience_years}", &experience_years.to_string())
        .replace("{skills}", skills)
        .replace("{location}", location)
        .replace("{job_title}", job_title)
        .replace("{records}", records)
}

pub fn format_analyze_trends_prompt(records: &str, category: &str) -> String {
    ANALYZE_TRENDS_PROMPT
        .replace("{sections}", &TREND_REPORT.render())
        .replace("{category}", category)
        .replace("{records}", records)
}
