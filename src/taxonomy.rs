//! Skill taxonomy and industry knowledge tables
//!
//! The taxonomy is the only shared state in the engine. It is constructed
//! once at process start with [`SkillTaxonomy::builtin`] and handed to every
//! component behind an `Arc`; nothing mutates it afterwards. Reloading means
//! building a new snapshot and swapping the `Arc`, never editing in place.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryLocale {
    English,
    Indonesian,
}

/// One named skill category. Order inside `skills` is meaningful: extraction
/// output preserves first-seen order across categories.
#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub name: &'static str,
    pub locale: CategoryLocale,
    pub skills: &'static [&'static str],
}

/// Weighted keyword profile for one candidate industry.
#[derive(Debug, Clone)]
pub struct IndustryProfile {
    pub name: &'static str,
    pub weight: f64,
    pub keywords: &'static [&'static str],
}

/// Essential/preferred skill expectations for industries we can benchmark.
#[derive(Debug, Clone)]
pub struct BenchmarkSpec {
    pub industry: &'static str,
    pub essential: &'static [&'static str],
    pub preferred: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
    industries: Vec<IndustryProfile>,
    benchmarks: Vec<BenchmarkSpec>,
    indonesian_indicators: &'static [&'static str],
    high_demand_skills: &'static [&'static str],
    emerging_skills: &'static [&'static str],
    salary_growth_skills: &'static [&'static str],
    action_verbs: &'static [&'static str],
}

impl SkillTaxonomy {
    /// Build the default taxonomy. Cheap enough to call once at startup;
    /// callers share the result, typically via `Arc<SkillTaxonomy>`.
    pub fn builtin() -> Self {
        Self {
            categories: builtin_categories(),
            industries: builtin_industries(),
            benchmarks: builtin_benchmarks(),
            indonesian_indicators: INDONESIAN_INDICATORS,
            high_demand_skills: HIGH_DEMAND_SKILLS,
            emerging_skills: EMERGING_SKILLS,
            salary_growth_skills: SALARY_GROWTH_SKILLS,
            action_verbs: ACTION_VERBS,
        }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Categories in scan order for a detected language: Indonesian resumes
    /// scan locale categories first so locale skills surface earlier, mixed
    /// text scans everything in declaration order, English skips locale
    /// categories entirely.
    pub fn categories_for(&self, locale_first: bool, include_locale: bool) -> Vec<&SkillCategory> {
        if locale_first {
            let mut ordered: Vec<&SkillCategory> = self
                .categories
                .iter()
                .filter(|c| c.locale == CategoryLocale::Indonesian)
                .collect();
            ordered.extend(
                self.categories
                    .iter()
                    .filter(|c| c.locale == CategoryLocale::English),
            );
            ordered
        } else if include_locale {
            self.categories.iter().collect()
        } else {
            self.categories
                .iter()
                .filter(|c| c.locale == CategoryLocale::English)
                .collect()
        }
    }

    pub fn industries(&self) -> &[IndustryProfile] {
        &self.industries
    }

    pub fn benchmark_for(&self, industry: &str) -> Option<&BenchmarkSpec> {
        self.benchmarks.iter().find(|b| b.industry == industry)
    }

    pub fn indonesian_indicators(&self) -> &[&'static str] {
        self.indonesian_indicators
    }

    pub fn high_demand_skills(&self) -> &[&'static str] {
        self.high_demand_skills
    }

    pub fn emerging_skills(&self) -> &[&'static str] {
        self.emerging_skills
    }

    pub fn salary_growth_skills(&self) -> &[&'static str] {
        self.salary_growth_skills
    }

    pub fn action_verbs(&self) -> &[&'static str] {
        self.action_verbs
    }

    /// Names of categories that contain at least one of the given skills.
    /// Matching is containment in either direction, mirroring how extraction
    /// canonicalizes compound skill names.
    pub fn categories_represented(&self, skills: &[String]) -> Vec<&'static str> {
        let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        self.categories
            .iter()
            .filter(|category| {
                category.skills.iter().any(|keyword| {
                    let keyword = keyword.to_lowercase();
                    skills_lower
                        .iter()
                        .any(|skill| skill.contains(&keyword) || keyword.contains(skill.as_str()))
                })
            })
            .map(|c| c.name)
            .collect()
    }

    /// Distinct industry keywords present in the text, across all industries.
    /// Used for the keyword-density factor of the ATS score.
    pub fn industry_keywords_in(&self, text_lower: &str) -> Vec<&'static str> {
        let mut found = Vec::new();
        for industry in &self.industries {
            for keyword in industry.keywords {
                if text_lower.contains(keyword) && !found.contains(keyword) {
                    found.push(*keyword);
                }
            }
        }
        found
    }
}

const INDONESIAN_INDICATORS: &[&str] = &[
    "yang", "dan", "di", "ke", "dari", "untuk", "dengan", "adalah", "akan", "pada",
    "oleh", "atau", "dalam", "kami", "kita", "mereka", "dia", "ia", "nya", "ini", "itu",
    "dapat", "bisa", "harus", "sebagai", "juga", "sudah", "telah", "tidak", "ya",
    "pendidikan", "pengalaman", "keahlian", "kemampuan", "manajemen", "proyek",
    "pengembangan", "pelayanan", "pelanggan", "perusahaan", "organisasi",
];

const HIGH_DEMAND_SKILLS: &[&str] = &[
    "python", "cloud computing", "data science", "machine learning",
    "cybersecurity", "devops", "react", "sql",
];

const EMERGING_SKILLS: &[&str] = &[
    "kubernetes", "docker", "serverless", "edge computing", "blockchain",
];

const SALARY_GROWTH_SKILLS: &[&str] = &[
    "machine learning", "cloud architecture", "cybersecurity",
    "devops", "data engineering", "product management",
];

const ACTION_VERBS: &[&str] = &[
    "managed", "developed", "implemented", "led", "created", "designed", "analyzed",
    "improved", "increased", "reduced", "optimized", "coordinated", "delivered",
];

fn builtin_categories() -> Vec<SkillCategory> {
    use CategoryLocale::{English, Indonesian};

    vec![
        SkillCategory {
            name: "programming",
            locale: English,
            skills: &[
                "python", "java", "javascript", "typescript", "c++", "c#", "php", "ruby", "go",
                "rust", "swift", "kotlin", "scala", "matlab", "sql", "html", "css",
                "react", "angular", "vue", "node.js", "express", "django", "flask", "spring",
                "laravel", "react native", "flutter", "next.js", "svelte",
                "graphql", "rest api", "microservices", "devops", "ci/cd",
                "test-driven development", "tdd", "agile", "scrum", "kanban",
                "clean code", "refactoring", "design patterns",
            ],
        },
        SkillCategory {
            name: "data_science",
            locale: English,
            skills: &[
                "machine learning", "deep learning", "neural networks", "artificial intelligence",
                "data analysis", "statistics", "predictive modeling", "data mining",
                "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "keras",
                "tableau", "power bi", "excel", "data visualization", "matplotlib",
                "jupyter", "hadoop", "spark", "big data", "data warehouse", "etl",
                "data pipeline", "business intelligence",
            ],
        },
        SkillCategory {
            name: "cybersecurity",
            locale: English,
            skills: &[
                "cybersecurity", "information security", "network security",
                "penetration testing", "ethical hacking", "vulnerability assessment",
                "incident response", "risk assessment", "gdpr", "iso 27001",
                "firewall", "vpn", "encryption", "cryptography", "siem",
                "malware analysis", "forensics", "threat intelligence",
            ],
        },
        SkillCategory {
            name: "cloud_computing",
            locale: English,
            skills: &[
                "aws", "amazon web services", "azure", "google cloud", "gcp",
                "docker", "kubernetes", "helm", "terraform", "ansible",
                "serverless", "lambda", "api gateway", "load balancer", "auto scaling",
                "cdn", "cloud security", "multi-cloud", "cloud migration",
            ],
        },
        SkillCategory {
            name: "project_management",
            locale: English,
            skills: &[
                "project management", "prince2", "pmp", "lean", "six sigma", "waterfall",
                "risk management", "stakeholder management", "resource planning",
                "budget management", "quality assurance", "vendor management",
                "team leadership", "change management",
            ],
        },
        SkillCategory {
            name: "business_analysis",
            locale: English,
            skills: &[
                "business analysis", "requirements gathering", "process improvement",
                "bpmn", "uml", "data modeling", "user stories", "use cases",
                "gap analysis", "root cause analysis", "swot analysis",
                "cost-benefit analysis", "roi analysis", "feasibility study",
            ],
        },
        SkillCategory {
            name: "marketing",
            locale: English,
            skills: &[
                "digital marketing", "content marketing", "social media marketing",
                "email marketing", "seo", "search engine optimization", "sem",
                "google ads", "facebook ads", "influencer marketing",
                "marketing automation", "lead generation", "conversion optimization",
                "brand management", "market research", "competitive analysis",
                "customer acquisition", "google analytics", "crm",
            ],
        },
        SkillCategory {
            name: "sales",
            locale: English,
            skills: &[
                "sales", "inside sales", "enterprise sales", "b2b sales", "b2c sales",
                "cold calling", "lead qualification", "sales funnel", "salesforce",
                "hubspot", "negotiation", "account management", "prospecting",
                "pipeline management", "territory management", "key account management",
            ],
        },
        SkillCategory {
            name: "finance",
            locale: English,
            skills: &[
                "financial analysis", "financial modeling", "financial planning",
                "investment analysis", "portfolio management", "corporate finance",
                "financial reporting", "budgeting", "forecasting", "variance analysis",
                "cost accounting", "bloomberg", "derivatives", "equity research",
                "credit analysis", "treasury management", "cash flow", "dcf", "npv", "irr",
            ],
        },
        SkillCategory {
            name: "accounting",
            locale: English,
            skills: &[
                "accounting", "bookkeeping", "tax accounting", "audit", "internal audit",
                "forensic accounting", "quickbooks", "xero", "gaap", "ifrs",
                "financial statements", "accounts payable", "accounts receivable",
                "general ledger", "reconciliations", "tax preparation",
            ],
        },
        SkillCategory {
            name: "healthcare",
            locale: English,
            skills: &[
                "clinical research", "medical research", "pharmaceutical", "biotech",
                "medical devices", "healthcare administration", "patient care",
                "medical coding", "icd-10", "hipaa compliance", "electronic health records",
                "ehr", "emr", "medical billing", "claims processing", "patient safety",
                "clinical trials", "regulatory affairs",
            ],
        },
        SkillCategory {
            name: "education",
            locale: English,
            skills: &[
                "teaching", "instructional design", "curriculum development",
                "lesson planning", "student assessment", "educational technology",
                "e-learning", "learning management system", "lms", "moodle",
                "pedagogy", "special education", "classroom management",
                "academic advising",
            ],
        },
        SkillCategory {
            name: "legal",
            locale: English,
            skills: &[
                "legal research", "contract law", "corporate law", "litigation",
                "employment law", "intellectual property", "regulatory compliance",
                "due diligence", "legal writing", "document review",
                "contract management", "mediation", "arbitration",
            ],
        },
        SkillCategory {
            name: "design",
            locale: English,
            skills: &[
                "graphic design", "ui design", "ux design", "product design",
                "visual design", "web design", "interaction design", "user research",
                "wireframing", "prototyping", "figma", "adobe photoshop",
                "adobe illustrator", "sketch", "design thinking", "design systems",
                "branding", "typography",
            ],
        },
        SkillCategory {
            name: "hr",
            locale: English,
            skills: &[
                "human resources", "recruitment", "talent acquisition", "onboarding",
                "performance management", "employee relations", "compensation",
                "benefits administration", "payroll", "hris", "workday",
                "workforce planning", "employee engagement",
                "organizational development", "succession planning",
            ],
        },
        SkillCategory {
            name: "operations",
            locale: English,
            skills: &[
                "operations management", "supply chain management", "logistics",
                "inventory management", "procurement", "lean manufacturing",
                "quality management", "iso 9001", "erp", "sap",
                "warehouse management", "demand planning",
            ],
        },
        SkillCategory {
            name: "product_management",
            locale: English,
            skills: &[
                "product management", "product development", "product strategy",
                "roadmap planning", "backlog management", "feature prioritization",
                "product lifecycle", "launch management", "product analytics",
                "a/b testing", "customer feedback", "product-market fit",
            ],
        },
        SkillCategory {
            name: "leadership",
            locale: English,
            skills: &[
                "leadership", "team leadership", "strategic thinking", "decision making",
                "mentoring", "coaching", "delegation", "conflict resolution",
            ],
        },
        SkillCategory {
            name: "communication",
            locale: English,
            skills: &[
                "communication", "presentation", "public speaking",
                "written communication", "interpersonal skills", "active listening",
                "relationship building", "customer service",
            ],
        },
        SkillCategory {
            name: "problem_solving",
            locale: English,
            skills: &[
                "problem solving", "critical thinking", "analytical thinking",
                "creative thinking", "innovation", "troubleshooting", "debugging",
                "continuous improvement",
            ],
        },
        SkillCategory {
            name: "collaboration",
            locale: English,
            skills: &[
                "teamwork", "collaboration", "remote work", "stakeholder management",
                "partnership building", "networking",
            ],
        },
        SkillCategory {
            name: "time_management",
            locale: English,
            skills: &[
                "time management", "prioritization", "task management", "productivity",
                "planning", "scheduling", "goal setting",
            ],
        },
        SkillCategory {
            name: "programming_id",
            locale: Indonesian,
            skills: &[
                "pemrograman", "pengembangan aplikasi", "web development",
                "mobile development", "frontend", "backend", "fullstack", "database",
                "mysql", "postgresql", "mongodb", "codeigniter", "laravel",
                "spring boot", "android", "ios", "bootstrap", "tailwind", "jquery",
                "api", "git", "github", "gitlab", "jenkins",
            ],
        },
        SkillCategory {
            name: "business_id",
            locale: Indonesian,
            skills: &[
                "manajemen bisnis", "strategi bisnis", "penjualan", "brand awareness",
                "manajemen proyek", "perencanaan anggaran", "pengurangan biaya",
                "pelayanan pelanggan", "operational efficiency", "tiktok marketing",
            ],
        },
        SkillCategory {
            name: "finance_id",
            locale: Indonesian,
            skills: &[
                "keuangan", "akuntansi", "manajemen keuangan", "analisis keuangan",
                "laporan keuangan", "anggaran", "proyeksi", "investasi",
                "manajemen risiko", "perpajakan", "arus kas", "perencanaan keuangan",
                "pivot table", "vlookup",
            ],
        },
        SkillCategory {
            name: "healthcare_id",
            locale: Indonesian,
            skills: &[
                "kesehatan", "medis", "klinik", "rumah sakit", "pasien", "perawatan",
                "terapi", "diagnosis", "rekam medis", "billing medis",
                "asuransi kesehatan", "keamanan pasien", "riset klinis", "farmasi",
                "keperawatan", "bidan", "dokter",
            ],
        },
        SkillCategory {
            name: "education_id",
            locale: Indonesian,
            skills: &[
                "pendidikan", "mengajar", "pelatihan", "kursus", "workshop", "seminar",
                "kurikulum", "rencana pembelajaran", "evaluasi", "teknologi pendidikan",
                "video pembelajaran", "riset", "publikasi", "penulisan akademik",
                "konseling siswa",
            ],
        },
        SkillCategory {
            name: "legal_id",
            locale: Indonesian,
            skills: &[
                "hukum", "perundang-undangan", "regulasi", "kepatuhan", "kontrak",
                "perjanjian", "litigasi", "mediasi", "arbitrase", "riset hukum",
                "hak kekayaan intelektual", "hak paten", "hak cipta", "merek dagang",
                "hukum kontrak", "hukum ketenagakerjaan", "hukum perusahaan",
                "analisis hukum",
            ],
        },
        SkillCategory {
            name: "hr_id",
            locale: Indonesian,
            skills: &[
                "sumber daya manusia", "sdm", "rekrutmen", "perekrutan",
                "manajemen kinerja", "hubungan karyawan", "kompensasi", "gaji",
                "retensi karyawan", "perubahan organisasi", "manajemen talenta",
                "suksesi",
            ],
        },
        SkillCategory {
            name: "design_id",
            locale: Indonesian,
            skills: &[
                "desain", "desain grafis", "desain aplikasi", "desain visual",
                "tipografi", "teori warna", "desain tata letak", "photoshop",
                "illustrator", "canva", "adobe creative", "premiere pro",
                "after effects", "fotografi", "videografi", "penyuntingan",
            ],
        },
    ]
}

fn builtin_industries() -> Vec<IndustryProfile> {
    vec![
        IndustryProfile {
            name: "technology",
            weight: 1.0,
            keywords: &[
                "software", "programming", "development", "tech", "digital",
                "data science", "cloud", "cybersecurity", "blockchain",
                "web development", "devops", "python", "java", "javascript", "react",
                "aws", "azure", "machine learning", "artificial intelligence",
                "data analysis", "big data", "pemrograman", "pengembangan aplikasi",
                "teknologi", "cloud computing",
            ],
        },
        IndustryProfile {
            name: "finance",
            weight: 1.0,
            keywords: &[
                "finance", "banking", "investment", "trading", "accounting", "audit",
                "financial", "portfolio", "derivatives", "equity", "credit",
                "treasury", "bloomberg", "financial modeling", "keuangan",
                "perbankan", "akuntansi", "manajemen keuangan", "investasi",
            ],
        },
        IndustryProfile {
            name: "healthcare",
            weight: 1.0,
            keywords: &[
                "medical", "health", "clinical", "patient", "hospital",
                "pharmaceutical", "nursing", "healthcare", "biotech",
                "clinical research", "medical device", "ehr", "emr", "doctor",
                "kesehatan", "medis", "klinik", "rumah sakit", "keperawatan",
                "farmasi",
            ],
        },
        IndustryProfile {
            name: "education",
            weight: 1.0,
            keywords: &[
                "education", "teaching", "academic", "curriculum", "student",
                "learning", "training", "university", "college", "school", "lms",
                "pendidikan", "mengajar", "pelatihan", "kurikulum", "universitas",
                "riset",
            ],
        },
        IndustryProfile {
            name: "marketing",
            weight: 1.0,
            keywords: &[
                "marketing", "advertising", "branding", "campaign",
                "digital marketing", "seo", "sem", "social media",
                "content marketing", "lead generation", "customer acquisition",
                "google ads", "facebook ads", "brand management", "kampanye",
                "media sosial",
            ],
        },
        IndustryProfile {
            name: "sales",
            weight: 1.0,
            keywords: &[
                "sales", "revenue", "client", "customer", "account", "territory",
                "quota", "pipeline", "b2b", "b2c", "enterprise sales", "penjualan",
                "klien", "pelanggan", "target",
            ],
        },
        IndustryProfile {
            name: "operations",
            weight: 1.0,
            keywords: &[
                "operations", "supply chain", "logistics", "manufacturing",
                "quality", "process", "lean", "six sigma", "erp", "inventory",
                "procurement", "vendor management", "operasional", "rantai pasok",
                "manufaktur", "kualitas",
            ],
        },
        IndustryProfile {
            name: "hr",
            weight: 1.0,
            keywords: &[
                "human resources", "recruitment", "talent", "employee", "benefits",
                "performance", "hris", "workforce", "organizational", "culture",
                "engagement", "sumber daya manusia", "sdm", "rekrutmen", "karyawan",
                "kinerja",
            ],
        },
        IndustryProfile {
            name: "legal",
            weight: 1.0,
            keywords: &[
                "legal", "law", "compliance", "regulatory", "contract", "litigation",
                "intellectual property", "hukum", "kepatuhan", "regulasi", "kontrak",
                "hukum perusahaan",
            ],
        },
        IndustryProfile {
            name: "consulting",
            weight: 1.0,
            keywords: &[
                "consulting", "advisory", "strategy", "transformation",
                "optimization", "implementation", "konsultasi", "konsultan",
                "strategi", "transformasi", "optimasi",
            ],
        },
    ]
}

fn builtin_benchmarks() -> Vec<BenchmarkSpec> {
    vec![
        BenchmarkSpec {
            industry: "technology",
            essential: &["programming", "problem solving", "git", "sql", "debugging"],
            preferred: &["cloud computing", "docker", "ci/cd", "agile", "microservices"],
        },
        BenchmarkSpec {
            industry: "finance",
            essential: &[
                "financial analysis",
                "excel",
                "financial reporting",
                "budgeting",
                "accounting",
            ],
            preferred: &[
                "financial modeling",
                "bloomberg",
                "risk management",
                "forecasting",
                "derivatives",
            ],
        },
        BenchmarkSpec {
            industry: "marketing",
            essential: &[
                "digital marketing",
                "seo",
                "content marketing",
                "google analytics",
                "social media marketing",
            ],
            preferred: &[
                "marketing automation",
                "google ads",
                "crm",
                "a/b testing",
                "brand management",
            ],
        },
        BenchmarkSpec {
            industry: "healthcare",
            essential: &[
                "patient care",
                "medical coding",
                "hipaa compliance",
                "ehr",
                "clinical research",
            ],
            preferred: &[
                "medical billing",
                "claims processing",
                "regulatory affairs",
                "patient safety",
                "clinical trials",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_stable() {
        let taxonomy = SkillTaxonomy::builtin();
        assert_eq!(taxonomy.categories()[0].name, "programming");
        let names: Vec<_> = taxonomy.categories().iter().map(|c| c.name).collect();
        let again = SkillTaxonomy::builtin();
        let names_again: Vec<_> = again.categories().iter().map(|c| c.name).collect();
        assert_eq!(names, names_again);
    }

    #[test]
    fn test_locale_first_ordering() {
        let taxonomy = SkillTaxonomy::builtin();
        let ordered = taxonomy.categories_for(true, true);
        assert!(ordered[0].name.ends_with("_id"));
        let first_english = ordered
            .iter()
            .position(|c| c.locale == CategoryLocale::English)
            .unwrap();
        assert!(ordered[first_english..]
            .iter()
            .all(|c| c.locale == CategoryLocale::English));
    }

    #[test]
    fn test_english_excludes_locale_categories() {
        let taxonomy = SkillTaxonomy::builtin();
        let english = taxonomy.categories_for(false, false);
        assert!(english.iter().all(|c| c.locale == CategoryLocale::English));
    }

    #[test]
    fn test_benchmark_lookup() {
        let taxonomy = SkillTaxonomy::builtin();
        assert!(taxonomy.benchmark_for("technology").is_some());
        assert!(taxonomy.benchmark_for("general").is_none());
        assert!(taxonomy.benchmark_for("consulting").is_none());
    }

    #[test]
    fn test_categories_represented() {
        let taxonomy = SkillTaxonomy::builtin();
        let skills = vec!["python".to_string(), "leadership".to_string()];
        let categories = taxonomy.categories_represented(&skills);
        assert!(categories.contains(&"programming"));
        assert!(categories.contains(&"leadership"));
    }
}
